use serde_json::Value;

/// Creates a deep clone of a JSON value.
///
/// `Value` owns all of its children, so its `Clone` is already deep and
/// edits to the result never reach the source document. Patch operations
/// call this one function for every copy they take of caller data.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use jsonmend_util::json_clone::clone;
///
/// let original = json!({"foo": [1, 2, 3]});
/// let mut cloned = clone(&original);
/// cloned["foo"][0] = json!(100);
///
/// assert_eq!(original, json!({"foo": [1, 2, 3]}));
/// ```
pub fn clone(value: &Value) -> Value {
    value.clone()
}
