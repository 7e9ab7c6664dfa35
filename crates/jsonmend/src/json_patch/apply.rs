//! JSON Patch apply logic.
//!
//! Every mutating operation clones its input first and edits the clone, so
//! a call never changes the document it was given. `test`, and `copy` onto
//! its own source, hand the input back untouched as [`Cow::Borrowed`].

use std::borrow::Cow;

use jsonmend_json_pointer::{evaluate, interpret, is_integer, resolve_mut, PointerError};
use jsonmend_util::{clone, deep_equal, is_truthy};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::hooks::{HookFailure, PatchHook};
use super::types::{Op, PatchError};

fn invalid_pointer(path: &str) -> PatchError {
    PatchError::Pointer(PointerError::InvalidPointer(path.to_string()))
}

// ── Individual operation applicators ─────────────────────────────────────

/// Add `value` at `path`.
///
/// - `-` appends to an array
/// - an integer token inserts into an array, shifting later elements right;
///   the index may equal the length
/// - any other token sets an object member, creating or overwriting it
///
/// The empty path does not replace the document: the result is an object
/// whose only member `value` holds the given value.
pub fn apply_add(doc: &Value, path: &str, value: &Value) -> Result<Value, PatchError> {
    let interpretation = interpret(path);
    if !interpretation.is_well_formed() {
        return Err(invalid_pointer(path));
    }
    if interpretation.is_root() {
        let mut wrapper = Map::new();
        wrapper.insert("value".to_string(), clone(value));
        return Ok(Value::Object(wrapper));
    }

    let mut out = clone(doc);
    let target = resolve_mut(&mut out, interpretation.parent_tokens(), path)?;
    let key = &interpretation.key;

    if key == "-" {
        let Value::Array(arr) = target else {
            return Err(PatchError::InvalidAddTarget(path.to_string()));
        };
        arr.push(clone(value));
    } else if is_integer(key) {
        let Value::Array(arr) = target else {
            return Err(PatchError::InvalidAddTarget(path.to_string()));
        };
        let idx: usize = key
            .parse()
            .map_err(|_| PatchError::IndexTooLarge(key.clone()))?;
        if idx > arr.len() {
            return Err(PatchError::IndexTooLarge(idx.to_string()));
        }
        arr.insert(idx, clone(value));
    } else {
        let Value::Object(map) = target else {
            return Err(PatchError::InvalidAddTarget(path.to_string()));
        };
        map.insert(key.clone(), clone(value));
    }
    Ok(out)
}

/// Remove the value at `path`.
///
/// The empty path yields an empty object whatever the root was. An array
/// element only counts as present when it is truthy, so `0`, `""`, `false`
/// and `null` elements cannot be removed. An object member counts as present
/// whenever the key exists.
pub fn apply_remove(doc: &Value, path: &str) -> Result<Value, PatchError> {
    let interpretation = interpret(path);
    if !interpretation.is_well_formed() {
        return Err(invalid_pointer(path));
    }
    if interpretation.is_root() {
        return Ok(Value::Object(Map::new()));
    }

    let key = &interpretation.key;
    if key == "-" {
        return Err(PatchError::InvalidRemoveTarget(path.to_string()));
    }

    let mut out = clone(doc);
    let target = resolve_mut(&mut out, interpretation.parent_tokens(), path)?;

    if is_integer(key) {
        let Value::Array(arr) = target else {
            return Err(PatchError::InvalidRemoveTarget(path.to_string()));
        };
        match key.parse::<usize>() {
            Ok(idx) if arr.get(idx).is_some_and(is_truthy) => {
                arr.remove(idx);
            }
            _ => return Err(PatchError::InvalidRemoveTarget(path.to_string())),
        }
    } else {
        match target {
            Value::Object(map) if map.contains_key(key.as_str()) => {
                map.remove(key.as_str());
            }
            _ => return Err(PatchError::InvalidRemoveTarget(path.to_string())),
        }
    }
    Ok(out)
}

/// Replace the value at `path`: a `remove` followed by an `add`.
///
/// Inherits the `remove` precondition, so replacing a missing location
/// fails exactly as removing it would.
pub fn apply_replace(doc: &Value, path: &str, value: &Value) -> Result<Value, PatchError> {
    let removed = apply_remove(doc, path)?;
    apply_add(&removed, path, value)
}

/// Move the value at `from` to `path`.
///
/// The value is read from the original document, then removed, then added.
/// Index shifts caused by the removal are visible to the add.
pub fn apply_move(doc: &Value, from: &str, path: &str) -> Result<Value, PatchError> {
    let value = evaluate(doc, from)?;
    let removed = apply_remove(doc, from)?;
    apply_add(&removed, path, value)
}

/// Copy the value at `from` to `path`.
///
/// When `from` and `path` are the same string the input is returned as is.
pub fn apply_copy<'a>(doc: &'a Value, from: &str, path: &str) -> Result<Cow<'a, Value>, PatchError> {
    if from == path {
        return Ok(Cow::Borrowed(doc));
    }
    let value = evaluate(doc, from)?;
    apply_add(doc, path, value).map(Cow::Owned)
}

/// Check that the value at `path` is structurally equal to `value`.
///
/// Returns the input document itself on success.
pub fn apply_test<'a>(doc: &'a Value, path: &str, value: &Value) -> Result<&'a Value, PatchError> {
    let actual = evaluate(doc, path)?;
    if deep_equal(actual, value) {
        Ok(doc)
    } else {
        Err(PatchError::TestMismatch)
    }
}

// ── Main apply function ───────────────────────────────────────────────────

/// Apply a single operation.
pub fn apply_op<'a>(doc: &'a Value, op: &Op) -> Result<Cow<'a, Value>, PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, value).map(Cow::Owned),
        Op::Remove { path } => apply_remove(doc, path).map(Cow::Owned),
        Op::Replace { path, value } => apply_replace(doc, path, value).map(Cow::Owned),
        Op::Move { from, path } => apply_move(doc, from, path).map(Cow::Owned),
        Op::Copy { from, path } => apply_copy(doc, from, path),
        Op::Test { path, value } => apply_test(doc, path, value).map(Cow::Borrowed),
    }
}

/// Apply one operation to the running document of a fold.
///
/// An operation that hands its input back keeps the current document, owned
/// or borrowed, instead of copying it.
fn step<'a>(current: Cow<'a, Value>, op: &Op) -> Result<Cow<'a, Value>, PatchError> {
    match current {
        Cow::Borrowed(doc) => apply_op(doc, op),
        Cow::Owned(doc) => {
            let next = match apply_op(&doc, op)? {
                Cow::Owned(next) => Some(next),
                Cow::Borrowed(_) => None,
            };
            Ok(Cow::Owned(next.unwrap_or(doc)))
        }
    }
}

/// Apply a sequence of operations in order, without hooks.
pub fn apply_ops<'a>(doc: &'a Value, ops: &[Op]) -> Result<Cow<'a, Value>, PatchError> {
    apply_patch(doc, ops, &[])
}

/// Apply a sequence of operations in order, then run `hooks` on the result.
///
/// The first failing operation aborts the call and its error is returned;
/// no partially patched document is ever produced. Later operations see the
/// effects of earlier ones. A patch made only of passing `test`s returns the
/// input as [`Cow::Borrowed`].
///
/// Hooks run after every operation succeeded, in order, each receiving the
/// final document and `ops`. A hook failure is returned as
/// [`PatchError::Hook`] and stops the remaining hooks.
pub fn apply_patch<'a>(
    doc: &'a Value,
    ops: &[Op],
    hooks: &[&dyn PatchHook],
) -> Result<Cow<'a, Value>, PatchError> {
    let mut current = Cow::Borrowed(doc);
    for (index, op) in ops.iter().enumerate() {
        trace!(index, op = op.op_name(), path = op.path(), "applying operation");
        current = step(current, op).map_err(|err| {
            debug!(index, op = op.op_name(), path = op.path(), %err, "patch aborted");
            err
        })?;
    }

    for hook in hooks {
        hook.after_apply(&current, ops)
            .map_err(HookFailure::from)?;
    }
    debug!(ops = ops.len(), hooks = hooks.len(), "patch applied");
    Ok(current)
}

// ── Tests ─────────────────────────────────────────────────────────────────
