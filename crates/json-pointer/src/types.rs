//! Type definitions for JSON Pointer.

/// An unescaped reference token.
pub type Token = String;

/// The decomposition of a pointer string produced by [`interpret`](crate::interpret).
///
/// `tokens` holds every `/`-separated piece, unescaped, including the leading
/// piece that precedes the first `/`. For a well-formed pointer that leading
/// piece is the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    /// All pieces of the pointer, unescaped.
    pub tokens: Vec<Token>,
    /// The second-to-last token, or `""` when there are fewer than two.
    pub parent: Token,
    /// The last token, or `""` when there are none.
    pub key: Token,
}

impl Interpretation {
    /// Whether the pointer starts with `/` (or is the empty root pointer).
    pub fn is_well_formed(&self) -> bool {
        self.tokens.first().is_some_and(|first| first.is_empty())
    }

    /// Whether the pointer denotes the whole document.
    pub fn is_root(&self) -> bool {
        self.tokens.len() == 1 && self.is_well_formed()
    }

    /// Tokens addressing the container of the last token.
    ///
    /// Keeps the leading empty token, so the result can be passed straight
    /// to [`resolve`](crate::resolve).
    pub fn parent_tokens(&self) -> &[Token] {
        match self.tokens.len() {
            0 => &[],
            n => &self.tokens[..n - 1],
        }
    }
}
