//! String-level entry point for callers holding JSON text, such as
//! partial-update API handlers.

use serde_json::Value;
use thiserror::Error;

use crate::json_patch::{apply_ops, from_json_patch, ApplyPatchOptions, PatchError};

/// Errors from [`apply_json_patch`]: malformed JSON text on either side, or
/// a patch that failed to decode or apply.
#[derive(Debug, Error)]
pub enum TextError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Patch(#[from] PatchError),
}

/// Apply a JSON Patch document to a JSON document, both given as text.
///
/// Returns the patched document serialized compactly.
///
/// # Example
///
/// ```
/// use jsonmend::json_patch::ApplyPatchOptions;
/// use jsonmend::text::apply_json_patch;
///
/// let out = apply_json_patch(
///     r#"{"a":1}"#,
///     r#"[{"op":"replace","path":"/a","value":2}]"#,
///     &ApplyPatchOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(out, r#"{"a":2}"#);
/// ```
pub fn apply_json_patch(
    doc_json: &str,
    patch_json: &str,
    options: &ApplyPatchOptions,
) -> Result<String, TextError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let raw_ops: Value = serde_json::from_str(patch_json)?;
    let ops = from_json_patch(&raw_ops, options)?;
    let result = apply_ops(&doc, &ops)?;
    Ok(serde_json::to_string(&*result)?)
}
