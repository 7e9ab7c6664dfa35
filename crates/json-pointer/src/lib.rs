//! JSON Pointer (RFC 6901) utilities.
//!
//! This crate interprets [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! strings into reference tokens and evaluates them against
//! [`serde_json::Value`] documents.
//!
//! # Example
//!
//! ```
//! use jsonmend_json_pointer::{evaluate, format_json_pointer, interpret};
//!
//! let it = interpret("/foo/bar");
//! assert_eq!(it.tokens, vec!["", "foo", "bar"]);
//! assert_eq!(format_json_pointer(&it.tokens[1..]), "/foo/bar");
//!
//! let doc = serde_json::json!({"foo": {"bar": 42}});
//! assert_eq!(evaluate(&doc, "/foo/bar").unwrap(), &serde_json::json!(42));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Interpretation, Token};

mod util;
pub use util::{escape_component, format_json_pointer, interpret, is_integer, unescape_component};

mod evaluate;
pub use evaluate::{evaluate, evaluate_mut, resolve, resolve_mut};

pub mod validate;
pub use validate::validate_json_pointer;

/// Errors raised while evaluating a pointer.
///
/// The display strings are part of the public contract; callers match on them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("Document root must be an object or an array.")]
    RootNotObject,
    #[error("Invalid JSON pointer: {0}")]
    InvalidPointer(String),
    #[error("Key not found: {0}")]
    KeyNotFound(String),
    #[error("Array index out of bounds: {0}")]
    ArrayIndexOutOfBounds(String),
    #[error("Invalid array index: {0}")]
    InvalidArrayIndex(String),
    #[error("Invalid reference: '-' points to a non-existent array element.")]
    InvalidArrayReference,
    #[error("Cannot resolve token '{token}' on non-object/non-array value: {value}")]
    UnresolvableToken { token: String, value: String },
    #[error("Unresolved JSON pointer: {0}")]
    Unresolved(String),
}
