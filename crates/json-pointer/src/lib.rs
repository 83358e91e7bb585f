//! JSON Pointer (RFC 6901).
//!
//! This crate parses and formats [JSON Pointers](https://tools.ietf.org/html/rfc6901),
//! resolves them against a document and sets values at the location they
//! identify. Documents are anything implementing [`Node`]; an implementation
//! for [`serde_json::Value`] is provided.
//!
//! # Example
//!
//! ```
//! use json_pointer::{resolve_pointer, set_pointer, JsonPointer};
//! use serde_json::json;
//!
//! let doc = json!({"foo": {"bar": [10, 20]}});
//!
//! // Parse a pointer and format it back
//! let pointer = JsonPointer::parse("/foo/bar/0").unwrap();
//! assert_eq!(pointer.tokens(), ["foo", "bar", "0"]);
//! assert_eq!(pointer.to_string(), "/foo/bar/0");
//!
//! // Resolve it
//! let found = resolve_pointer(&doc, "/foo/bar/0", None).unwrap();
//! assert_eq!(found.node(), Some(&json!(10)));
//!
//! // Set a value on a copy of the document
//! let copy = set_pointer(&doc, "/foo/bar/-", json!(30)).unwrap();
//! assert_eq!(copy, json!({"foo": {"bar": [10, 20, 30]}}));
//! assert_eq!(doc, json!({"foo": {"bar": [10, 20]}}));
//! ```

use thiserror::Error;

pub mod find;
pub mod pointer;
pub mod set;
pub mod types;
pub mod util;
pub mod validate;

pub use find::{get, resolve, resolve_or, resolve_pointer, walk, walk_to_parent};
pub use pointer::{IntoPointerSuffix, JsonPointer};
pub use set::{set, set_in_place, set_pointer, set_pointer_in_place};
pub use types::{EndOfList, Indexable, Keyed, Node, Ordered, Resolved, Shape};
pub use util::{
    escape_component, is_valid_index, parse_index, percent_decode_component, unescape_component,
    END_OF_LIST,
};
pub use validate::validate_json_pointer;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JsonPointerError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    /// Malformed pointer string.
    #[error("invalid pointer syntax: {0}")]
    Syntax(String),
    /// A key lookup missed, or a generic accessor reported absence.
    #[error("not found: {0}")]
    NotFound(String),
    /// A token used against an array is not a valid index.
    #[error("invalid index: {0}")]
    InvalidIndex(String),
    /// A well-formed index past the end of an array.
    #[error("index '{index}' is out of bounds{}", .len.map(|len| format!(" for length {len}")).unwrap_or_default())]
    OutOfBounds { index: String, len: Option<usize> },
    /// The operation cannot be carried out on this pointer or node.
    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failure class of a [`JsonPointerError`], without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    NotFound,
    InvalidIndex,
    OutOfBounds,
    NotSupported,
}

impl JsonPointerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JsonPointerError::Syntax(_) => ErrorKind::Syntax,
            JsonPointerError::NotFound(_) => ErrorKind::NotFound,
            JsonPointerError::InvalidIndex(_) => ErrorKind::InvalidIndex,
            JsonPointerError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            JsonPointerError::NotSupported(_) => ErrorKind::NotSupported,
        }
    }
}
