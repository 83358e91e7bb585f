//! Token codec: escaping, unescaping and index parsing of single path
//! components.

use percent_encoding::percent_decode_str;

use crate::{JsonPointerError, Result};

/// Reference token that stands for the position one past the last element
/// of an array.
pub const END_OF_LIST: &str = "-";

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// # Example
///
/// ```
/// use json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("~1"), "~01");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Unescapes a JSON Pointer path component.
///
/// `~1` becomes `/` and `~0` becomes `~`. Any other use of `~` is a syntax
/// error.
///
/// # Example
///
/// ```
/// use json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b").unwrap(), "a~b");
/// assert_eq!(unescape_component("c~1d").unwrap(), "c/d");
/// assert_eq!(unescape_component("~01").unwrap(), "~1");
/// assert!(unescape_component("bar~").is_err());
/// assert!(unescape_component("bar~2").is_err());
/// ```
pub fn unescape_component(component: &str) -> Result<String> {
    if !component.contains('~') {
        return Ok(component.to_string());
    }
    check_escapes(component)?;
    // Order matters: ~1 must be replaced before ~0
    Ok(component.replace("~1", "/").replace("~0", "~"))
}

/// Rejects a `~` that is not followed by `0` or `1`.
pub(crate) fn check_escapes(component: &str) -> Result<()> {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'~' {
            match bytes.get(i + 1) {
                Some(b'0') | Some(b'1') => i += 1,
                _ => {
                    return Err(JsonPointerError::Syntax(format!(
                        "found invalid escape sequence in '{component}'"
                    )))
                }
            }
        }
        i += 1;
    }
    Ok(())
}

/// Percent-decodes a path component (`%20` becomes a space).
///
/// This predates the `~` escaping of RFC 6901 and is only applied by
/// [`JsonPointer::parse_legacy`](crate::JsonPointer::parse_legacy).
pub fn percent_decode_component(component: &str) -> Result<String> {
    if !component.contains('%') {
        return Ok(component.to_string());
    }
    percent_decode_str(component)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|err| {
            JsonPointerError::Syntax(format!("'{component}' does not decode to UTF-8: {err}"))
        })
}

/// Check if a string represents a valid non-negative integer array index.
///
/// The grammar is `0` or a non-zero digit followed by digits: no signs,
/// no leading zeros, no decimals.
///
/// # Example
///
/// ```
/// use json_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("1.5"));
/// assert!(!is_valid_index("01"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parses a token as an array index.
///
/// # Errors
///
/// - `InvalidIndex` if the token does not match the index grammar
/// - `OutOfBounds` if it matches but does not fit in a `usize`
pub fn parse_index(token: &str) -> Result<usize> {
    if !is_valid_index(token) {
        return Err(JsonPointerError::InvalidIndex(format!(
            "'{token}' is not a valid sequence index"
        )));
    }
    token.parse().map_err(|_| JsonPointerError::OutOfBounds {
        index: token.to_string(),
        len: None,
    })
}
