use crate::types::Interpretation;

/// Unescapes a JSON Pointer reference token.
///
/// Per RFC 6901, `~1` is replaced with `/` and then `~0` with `~`, so the
/// sequence `~01` decodes to `~1` rather than `/`.
///
/// # Example
///
/// ```
/// use jsonmend_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer reference token.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` with `~1`.
///
/// # Example
///
/// ```
/// use jsonmend_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Split a pointer string into unescaped reference tokens.
///
/// No validation happens here: the leading token is kept as-is so callers
/// can check that it is empty before treating the pointer as well-formed.
///
/// # Example
///
/// ```
/// use jsonmend_json_pointer::interpret;
///
/// let it = interpret("/a~1b/c/d");
/// assert_eq!(it.tokens, vec!["", "a/b", "c", "d"]);
/// assert_eq!(it.parent, "c");
/// assert_eq!(it.key, "d");
///
/// let root = interpret("");
/// assert_eq!(root.tokens, vec![""]);
/// assert_eq!(root.parent, "");
/// assert_eq!(root.key, "");
/// ```
pub fn interpret(pointer: &str) -> Interpretation {
    let tokens: Vec<String> = pointer.split('/').map(unescape_component).collect();
    let len = tokens.len();
    let key = tokens.last().cloned().unwrap_or_default();
    let parent = if len >= 2 {
        tokens[len - 2].clone()
    } else {
        String::new()
    };
    Interpretation {
        tokens,
        parent,
        key,
    }
}

/// Format reference tokens into a JSON Pointer string.
///
/// Returns an empty string for the root (no tokens).
///
/// # Example
///
/// ```
/// use jsonmend_json_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["slash/key".to_string()]), "/slash~1key");
/// ```
pub fn format_json_pointer(tokens: &[String]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push('/');
        out.push_str(&escape_component(token));
    }
    out
}

/// Check if a token matches the unsigned-integer pattern (ASCII digits only).
///
/// Leading zeros are accepted, so `"01"` is an integer token addressing
/// index 1.
///
/// # Example
///
/// ```
/// use jsonmend_json_pointer::is_integer;
///
/// assert!(is_integer("0"));
/// assert!(is_integer("007"));
/// assert!(!is_integer("-1"));
/// assert!(!is_integer("-"));
/// assert!(!is_integer(""));
/// ```
pub fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
