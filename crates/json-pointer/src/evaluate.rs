use serde_json::Value;

use crate::util::{interpret, is_integer};
use crate::PointerError;

/// Evaluate a pointer against a document.
///
/// Returns a borrow of the value at the pointer location; the empty pointer
/// yields the document itself.
///
/// # Errors
///
/// - [`PointerError::RootNotObject`] if `doc` is neither an object nor an array
/// - [`PointerError::InvalidPointer`] if a non-empty pointer lacks a leading `/`
/// - [`PointerError::KeyNotFound`], [`PointerError::InvalidArrayIndex`],
///   [`PointerError::ArrayIndexOutOfBounds`], [`PointerError::InvalidArrayReference`]
///   for tokens that do not match the container they are applied to
/// - [`PointerError::UnresolvableToken`] / [`PointerError::Unresolved`] when a
///   token is applied to a primitive or `null`
///
/// # Example
///
/// ```
/// use jsonmend_json_pointer::evaluate;
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": {"c": 2, "d": [3, 4]}});
/// assert_eq!(evaluate(&doc, "/b/d/1").unwrap(), &json!(4));
/// assert_eq!(evaluate(&doc, "").unwrap(), &doc);
/// ```
pub fn evaluate<'a>(doc: &'a Value, pointer: &str) -> Result<&'a Value, PointerError> {
    let interpretation = interpret(pointer);
    resolve(doc, &interpretation.tokens, pointer)
}

/// Mutable counterpart of [`evaluate`], with the same walk and the same errors.
pub fn evaluate_mut<'a>(doc: &'a mut Value, pointer: &str) -> Result<&'a mut Value, PointerError> {
    let interpretation = interpret(pointer);
    resolve_mut(doc, &interpretation.tokens, pointer)
}

/// Resolve already-interpreted tokens against a document.
///
/// `tokens` must include the leading empty token, as produced by
/// [`interpret`](crate::interpret). `pointer` is only used in error messages.
pub fn resolve<'a>(
    doc: &'a Value,
    tokens: &[String],
    pointer: &str,
) -> Result<&'a Value, PointerError> {
    let steps = reference_steps(doc, tokens, pointer)?;

    let mut current = doc;
    for token in steps {
        current = match current {
            Value::Array(arr) => &arr[array_index(token, arr.len())?],
            Value::Object(map) => map
                .get(token)
                .ok_or_else(|| PointerError::KeyNotFound(token.clone()))?,
            Value::Null => return Err(PointerError::Unresolved(pointer.to_string())),
            other => return Err(unresolvable(token, other)),
        };
    }
    Ok(current)
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a>(
    doc: &'a mut Value,
    tokens: &[String],
    pointer: &str,
) -> Result<&'a mut Value, PointerError> {
    let steps = reference_steps(doc, tokens, pointer)?;

    let mut current = doc;
    for token in steps {
        current = match current {
            Value::Array(arr) => {
                let idx = array_index(token, arr.len())?;
                &mut arr[idx]
            }
            Value::Object(map) => map
                .get_mut(token)
                .ok_or_else(|| PointerError::KeyNotFound(token.clone()))?,
            Value::Null => return Err(PointerError::Unresolved(pointer.to_string())),
            other => return Err(unresolvable(token, other)),
        };
    }
    Ok(current)
}

/// Checks the root shape and the leading empty token, returning the tokens
/// left to walk.
fn reference_steps<'t>(
    doc: &Value,
    tokens: &'t [String],
    pointer: &str,
) -> Result<&'t [String], PointerError> {
    if !doc.is_object() && !doc.is_array() {
        return Err(PointerError::RootNotObject);
    }
    match tokens.split_first() {
        Some((first, rest)) if first.is_empty() => Ok(rest),
        _ => Err(PointerError::InvalidPointer(pointer.to_string())),
    }
}

/// Parse an array reference token into an in-bounds index.
fn array_index(token: &str, len: usize) -> Result<usize, PointerError> {
    if token == "-" {
        return Err(PointerError::InvalidArrayReference);
    }
    if !is_integer(token) {
        return Err(PointerError::InvalidArrayIndex(token.to_string()));
    }
    // Digit strings too long for usize are out of bounds for any real array.
    let idx: usize = token
        .parse()
        .map_err(|_| PointerError::ArrayIndexOutOfBounds(token.to_string()))?;
    if idx >= len {
        return Err(PointerError::ArrayIndexOutOfBounds(idx.to_string()));
    }
    Ok(idx)
}

fn unresolvable(token: &str, value: &Value) -> PointerError {
    PointerError::UnresolvableToken {
        token: token.to_string(),
        value: value.to_string(),
    }
}
