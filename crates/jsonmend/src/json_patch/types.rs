//! Core types for the JSON Patch module.

use serde_json::Value;
use thiserror::Error;

use super::hooks::HookFailure;

pub use jsonmend_json_pointer::PointerError;

// ── Error ─────────────────────────────────────────────────────────────────

/// Errors raised while decoding or applying a patch.
///
/// Pointer evaluation failures pass through unchanged, so their messages
/// (`Key not found: <token>`, ...) reach the caller verbatim.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    #[error(transparent)]
    Pointer(#[from] PointerError),
    /// The last token does not fit the shape of its container.
    #[error("Invalid add target: {0}")]
    InvalidAddTarget(String),
    #[error("Array index too large: {0}")]
    IndexTooLarge(String),
    /// The location to remove does not hold a removable value.
    #[error("Invalid remove target: {0}")]
    InvalidRemoveTarget(String),
    #[error("Test operation failed due to value mismatch.")]
    TestMismatch,
    #[error("Invalid operation: {0}")]
    InvalidOp(String),
    /// A post-apply hook failed. Display and source are the hook's own.
    #[error(transparent)]
    Hook(#[from] HookFailure),
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation.
///
/// Paths are JSON Pointer strings and are interpreted when the operation is
/// applied, not when it is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

impl Op {
    /// Returns the operation name as it appears in the `op` member.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Move { .. } => "move",
            Op::Copy { .. } => "copy",
            Op::Test { .. } => "test",
        }
    }

    /// Returns the target path of the operation.
    pub fn path(&self) -> &str {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Move { path, .. }
            | Op::Copy { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// Returns the source path of `move` and `copy`.
    pub fn from_path(&self) -> Option<&str> {
        match self {
            Op::Move { from, .. } | Op::Copy { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Returns the value carried by `add`, `replace`, and `test`.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Op::Add { value, .. } | Op::Replace { value, .. } | Op::Test { value, .. } => {
                Some(value)
            }
            _ => None,
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// What decoding does with an operation whose `op` is not one of the six
/// RFC 6902 names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownOpPolicy {
    /// Fail with [`PatchError::InvalidOp`].
    #[default]
    Reject,
    /// Drop the operation; the rest of the patch behaves as if it were a no-op.
    Skip,
}

/// Options for decoding and applying textual patches.
#[derive(Debug, Clone, Default)]
pub struct ApplyPatchOptions {
    pub unknown_ops: UnknownOpPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let op = Op::Move {
            from: "/a".into(),
            path: "/b".into(),
        };
        assert_eq!(op.op_name(), "move");
        assert_eq!(op.path(), "/b");
        assert_eq!(op.from_path(), Some("/a"));
        assert_eq!(op.value(), None);

        let op = Op::Test {
            path: "/x".into(),
            value: json!([1]),
        };
        assert_eq!(op.op_name(), "test");
        assert_eq!(op.from_path(), None);
        assert_eq!(op.value(), Some(&json!([1])));
    }

    #[test]
    fn test_pointer_errors_keep_their_message() {
        let err: PatchError = PointerError::KeyNotFound("e".into()).into();
        assert_eq!(err.to_string(), "Key not found: e");
    }

    #[test]
    fn test_default_options_reject_unknown_ops() {
        assert_eq!(
            ApplyPatchOptions::default().unknown_ops,
            UnknownOpPolicy::Reject
        );
    }
}
