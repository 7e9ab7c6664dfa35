//! Validation functions for JSON Pointer.

use crate::PointerError;

/// Validate a JSON Pointer string.
///
/// The empty pointer is valid and addresses the whole document. Every other
/// pointer must start with `/`.
///
/// # Errors
///
/// Returns [`PointerError::InvalidPointer`] for a non-empty pointer without a
/// leading `/`.
///
/// # Example
///
/// ```
/// use jsonmend_json_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();
/// validate_json_pointer("/foo/bar").unwrap();
/// validate_json_pointer("foo").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), PointerError> {
    if pointer.is_empty() || pointer.starts_with('/') {
        return Ok(());
    }
    Err(PointerError::InvalidPointer(pointer.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_pointer() {
        assert!(validate_json_pointer("").is_ok());
    }

    #[test]
    fn test_validate_absolute_pointer() {
        assert!(validate_json_pointer("/").is_ok());
        assert!(validate_json_pointer("/foo").is_ok());
        assert!(validate_json_pointer("/foo/bar").is_ok());
        assert!(validate_json_pointer("//").is_ok());
    }

    #[test]
    fn test_validate_relative_pointer() {
        assert_eq!(
            validate_json_pointer("foo/bar"),
            Err(PointerError::InvalidPointer("foo/bar".to_string()))
        );
        assert!(validate_json_pointer("~1foo").is_err());
    }
}
