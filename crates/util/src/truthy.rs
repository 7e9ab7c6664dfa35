use serde_json::Value;

/// Check whether a JSON value is truthy.
///
/// `null`, `false`, numeric zero, and the empty string are falsy. Every other
/// value is truthy, including empty arrays and empty objects.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use jsonmend_util::truthy::is_truthy;
///
/// assert!(is_truthy(&json!("x")));
/// assert!(is_truthy(&json!([])));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => match n.as_f64() {
            Some(f) => f != 0.0 && !f.is_nan(),
            None => true,
        },
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
