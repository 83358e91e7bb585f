//! Setting values at the location a pointer identifies.
//!
//! [`set`] works on a deep copy and leaves the caller's document alone;
//! [`set_in_place`] changes the document it is given, so every other view
//! into that document sees the new value.

use tracing::debug;

use crate::find::{unsupported, walk_to_parent_mut};
use crate::pointer::JsonPointer;
use crate::types::{Node, Shape};
use crate::util::{parse_index, END_OF_LIST};
use crate::{JsonPointerError, Result};

/// Set `value` at `pointer` inside `doc`.
///
/// Keys of objects are inserted or overwritten. Array elements are
/// replaced, except for `-` which appends. Returns the value that was
/// displaced, if any.
///
/// # Errors
///
/// - `NotSupported` - `pointer` is the root, or the parent is a scalar
/// - `InvalidIndex` / `OutOfBounds` - the last token does not name an
///   existing array element
/// - any error from walking to the parent
///
/// # Example
///
/// ```
/// use json_pointer::{set_in_place, JsonPointer};
/// use serde_json::json;
///
/// let mut doc = json!({"foo": ["bar", "baz"]});
/// let old = set_in_place(&mut doc, &JsonPointer::parse("/foo/1").unwrap(), json!("cod")).unwrap();
/// assert_eq!(old, Some(json!("baz")));
/// assert_eq!(doc, json!({"foo": ["bar", "cod"]}));
/// ```
pub fn set_in_place<N: Node>(doc: &mut N, pointer: &JsonPointer, value: N) -> Result<Option<N>> {
    let (parent, last) = walk_to_parent_mut(doc, pointer)?;
    let Some(token) = last else {
        return Err(JsonPointerError::NotSupported(
            "cannot replace the root of a document in place".to_string(),
        ));
    };
    debug!(pointer = %pointer, "set");

    match parent.shape() {
        Shape::Keyed => {
            let keyed = parent.as_keyed_mut().ok_or_else(|| unsupported(token))?;
            Ok(keyed.insert(token.to_string(), value))
        }
        Shape::Ordered => {
            let ordered = parent.as_ordered_mut().ok_or_else(|| unsupported(token))?;
            if token == END_OF_LIST {
                ordered.push(value);
                return Ok(None);
            }
            let index = parse_index(token)?;
            let len = ordered.len();
            let slot = ordered
                .get_mut(index)
                .ok_or_else(|| JsonPointerError::OutOfBounds {
                    index: token.to_string(),
                    len: Some(len),
                })?;
            Ok(Some(std::mem::replace(slot, value)))
        }
        Shape::Indexable => parent
            .as_indexable_mut()
            .ok_or_else(|| unsupported(token))?
            .assign(token, value)
            .map_err(JsonPointerError::NotSupported),
        Shape::Scalar => Err(unsupported(token)),
    }
}

/// Set `value` at `pointer` on a copy of `doc` and return the copy.
///
/// Setting the root pointer simply returns `value`.
///
/// # Example
///
/// ```
/// use json_pointer::{set, JsonPointer};
/// use serde_json::json;
///
/// let doc = json!({"foo": [1, 2]});
/// let out = set(&doc, &JsonPointer::parse("/foo/-").unwrap(), json!(3)).unwrap();
/// assert_eq!(out, json!({"foo": [1, 2, 3]}));
/// assert_eq!(doc, json!({"foo": [1, 2]}));
/// ```
pub fn set<N: Node>(doc: &N, pointer: &JsonPointer, value: N) -> Result<N> {
    if pointer.is_root() {
        return Ok(value);
    }
    let mut copy = doc.clone();
    set_in_place(&mut copy, pointer, value)?;
    Ok(copy)
}

/// Parse `pointer` and [`set`] `value` on a copy of `doc`.
pub fn set_pointer<N: Node>(doc: &N, pointer: &str, value: N) -> Result<N> {
    set(doc, &JsonPointer::parse(pointer)?, value)
}

/// Parse `pointer` and [`set_in_place`] `value` inside `doc`.
pub fn set_pointer_in_place<N: Node>(doc: &mut N, pointer: &str, value: N) -> Result<Option<N>> {
    set_in_place(doc, &JsonPointer::parse(pointer)?, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use serde_json::json;

    fn doc() -> serde_json::Value {
        json!({"foo": ["bar", "baz"], "a": {"b": 1}})
    }

    #[test]
    fn test_set_copy_leaves_original() {
        let original = doc();
        let out = set_pointer(&original, "/foo/1", json!("cod")).unwrap();
        assert_eq!(out["foo"][1], json!("cod"));
        assert_eq!(original, doc());
    }

    #[test]
    fn test_set_append() {
        let original = doc();
        let out = set_pointer(&original, "/foo/-", json!("x")).unwrap();
        assert_eq!(out["foo"], json!(["bar", "baz", "x"]));
        assert_eq!(original["foo"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_set_object_key() {
        let mut target = doc();
        let old = set_pointer_in_place(&mut target, "/a/c", json!(2)).unwrap();
        assert_eq!(old, None);
        let old = set_pointer_in_place(&mut target, "/a/b", json!(3)).unwrap();
        assert_eq!(old, Some(json!(1)));
        assert_eq!(target["a"], json!({"b": 3, "c": 2}));
    }

    #[test]
    fn test_set_root() {
        let mut target = doc();
        let err = set_pointer_in_place(&mut target, "", json!(9)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotSupported);
        assert_eq!(target, doc());

        assert_eq!(set_pointer(&target, "", json!(9)).unwrap(), json!(9));
    }

    #[test]
    fn test_set_errors() {
        let target = doc();
        let kind = |p: &str| set_pointer(&target, p, json!(0)).unwrap_err().kind();
        assert_eq!(kind("/foo/2"), ErrorKind::OutOfBounds);
        assert_eq!(kind("/foo/x"), ErrorKind::InvalidIndex);
        assert_eq!(kind("/missing/key"), ErrorKind::NotFound);
        assert_eq!(kind("/a/b/c"), ErrorKind::NotSupported);
        assert_eq!(kind("/foo/-/0"), ErrorKind::NotSupported);
        assert_eq!(kind("bad"), ErrorKind::Syntax);
    }

    #[test]
    fn test_set_in_place_is_visible_through_the_document() {
        let mut target = doc();
        let pointer = JsonPointer::parse("/foo/0").unwrap();
        pointer.set_in_place(&mut target, json!(null)).unwrap();
        assert_eq!(pointer.resolve(&target).unwrap().node(), Some(&json!(null)));
    }
}
