//! JSON codec for JSON Patch operations.
//!
//! Converts operations to and from `serde_json::Value` in the RFC 6902 shape:
//! an object with an `op` discriminator, a `path`, a `from` for `move`/`copy`,
//! and a `value` for `add`/`replace`/`test`. Unknown members are ignored.

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::json_patch::types::{ApplyPatchOptions, Op, PatchError, UnknownOpPolicy};

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({ "op": "add", "path": path, "value": value }),
        Op::Remove { path } => json!({ "op": "remove", "path": path }),
        Op::Replace { path, value } => json!({ "op": "replace", "path": path, "value": value }),
        Op::Move { from, path } => json!({ "op": "move", "from": from, "path": path }),
        Op::Copy { from, path } => json!({ "op": "copy", "from": from, "path": path }),
        Op::Test { path, value } => json!({ "op": "test", "path": path, "value": value }),
    }
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

fn member_pointer(obj: &Map<String, Value>, op: &str, key: &str) -> Result<String, PatchError> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(PatchError::InvalidOp(format!("'{key}' must be a string"))),
        None => Err(PatchError::InvalidOp(format!("{op} requires '{key}'"))),
    }
}

fn member_value(obj: &Map<String, Value>, op: &str) -> Result<Value, PatchError> {
    obj.get("value")
        .cloned()
        .ok_or_else(|| PatchError::InvalidOp(format!("{op} requires 'value'")))
}

/// Deserialize a `serde_json::Value` into an `Op`.
///
/// Returns `Ok(None)` for an unrecognized `op` name when `policy` is
/// [`UnknownOpPolicy::Skip`].
pub fn from_json(v: &Value, policy: UnknownOpPolicy) -> Result<Option<Op>, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op_str = obj
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp("missing 'op' field".into()))?;

    let op = match op_str {
        "add" => Op::Add {
            path: member_pointer(obj, op_str, "path")?,
            value: member_value(obj, op_str)?,
        },
        "remove" => Op::Remove {
            path: member_pointer(obj, op_str, "path")?,
        },
        "replace" => Op::Replace {
            path: member_pointer(obj, op_str, "path")?,
            value: member_value(obj, op_str)?,
        },
        "move" => Op::Move {
            from: member_pointer(obj, op_str, "from")?,
            path: member_pointer(obj, op_str, "path")?,
        },
        "copy" => Op::Copy {
            from: member_pointer(obj, op_str, "from")?,
            path: member_pointer(obj, op_str, "path")?,
        },
        "test" => Op::Test {
            path: member_pointer(obj, op_str, "path")?,
            value: member_value(obj, op_str)?,
        },
        other => {
            return match policy {
                UnknownOpPolicy::Skip => {
                    debug!(op = other, "skipping unknown patch operation");
                    Ok(None)
                }
                UnknownOpPolicy::Reject => Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
            };
        }
    };
    Ok(Some(op))
}

/// Deserialize a JSON array into a list of operations.
pub fn from_json_patch(v: &Value, options: &ApplyPatchOptions) -> Result<Vec<Op>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    arr.iter()
        .filter_map(|op| from_json(op, options.unknown_ops).transpose())
        .collect()
}
