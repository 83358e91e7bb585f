//! Validation functions for JSON Pointer.

use crate::util::check_escapes;
use crate::{JsonPointerError, Result};

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns a syntax error if:
/// - The pointer is non-empty but doesn't start with `/`
/// - A segment contains `~` not followed by `0` or `1`
///
/// # Example
///
/// ```
/// use json_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();  // Root is valid
/// validate_json_pointer("/foo/bar").unwrap();  // Valid absolute pointer
/// validate_json_pointer("foo").unwrap_err();  // Missing leading /
/// validate_json_pointer("/foo/bar~").unwrap_err();  // Dangling escape
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<()> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(JsonPointerError::Syntax(format!(
            "location '{pointer}' must start with /"
        )));
    }
    pointer[1..].split('/').try_for_each(check_escapes)
}
