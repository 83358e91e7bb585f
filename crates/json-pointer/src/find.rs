use tracing::trace;

use crate::pointer::JsonPointer;
use crate::types::{EndOfList, Node, Resolved, Shape};
use crate::util::{parse_index, END_OF_LIST};
use crate::{JsonPointerError, Result};

/// Walk one step from `node` following `token`.
///
/// # Errors
///
/// - `NotFound` - a key is missing, or a generic accessor reported absence
/// - `InvalidIndex` - `token` is not an array index
/// - `OutOfBounds` - the index is past the end of the array
/// - `NotSupported` - `node` is a scalar
///
/// # Example
///
/// ```
/// use json_pointer::{walk, Resolved};
/// use serde_json::json;
///
/// let doc = json!({"foo": [1, 2]});
/// assert_eq!(walk(&doc, "foo").unwrap(), Resolved::Node(&json!([1, 2])));
/// assert!(walk(&doc["foo"], "-").unwrap().is_end_of_list());
/// ```
pub fn walk<'a, N: Node>(node: &'a N, token: &str) -> Result<Resolved<'a, N>> {
    let shape = node.shape();
    trace!(token, ?shape, "walk");
    match shape {
        Shape::Keyed => node
            .as_keyed()
            .and_then(|keyed| keyed.get(token))
            .map(Resolved::Node)
            .ok_or_else(|| JsonPointerError::NotFound(format!("member '{token}' not found"))),
        Shape::Ordered => {
            let Some(ordered) = node.as_ordered() else {
                return Err(unsupported(token));
            };
            if token == END_OF_LIST {
                return Ok(Resolved::EndOfList(EndOfList::new(node)));
            }
            let index = parse_index(token)?;
            ordered
                .get(index)
                .map(Resolved::Node)
                .ok_or_else(|| JsonPointerError::OutOfBounds {
                    index: token.to_string(),
                    len: Some(ordered.len()),
                })
        }
        Shape::Indexable => node
            .as_indexable()
            .ok_or_else(|| unsupported(token))?
            .lookup(token)
            .map(Resolved::Node)
            .map_err(JsonPointerError::NotFound),
        Shape::Scalar => Err(unsupported(token)),
    }
}

pub(crate) fn unsupported(token: &str) -> JsonPointerError {
    JsonPointerError::NotSupported(format!("cannot look up '{token}' in a scalar value"))
}

fn past_end_of_list(token: &str) -> JsonPointerError {
    JsonPointerError::NotSupported(format!(
        "cannot walk to '{token}' past the end of a list"
    ))
}

/// Resolve `pointer` against `doc`.
///
/// Resolving the `-` token on an array yields [`Resolved::EndOfList`];
/// it must be the last token.
///
/// # Example
///
/// ```
/// use json_pointer::{resolve, JsonPointer};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [10, 20]}});
/// let pointer = JsonPointer::parse("/a/b/0").unwrap();
/// assert_eq!(resolve(&doc, &pointer).unwrap().node(), Some(&json!(10)));
/// ```
pub fn resolve<'a, N: Node>(doc: &'a N, pointer: &JsonPointer) -> Result<Resolved<'a, N>> {
    let mut current = Resolved::Node(doc);
    for token in pointer.tokens() {
        current = match current {
            Resolved::Node(node) => walk(node, token)?,
            Resolved::EndOfList(_) => return Err(past_end_of_list(token)),
        };
    }
    Ok(current)
}

/// Alias of [`resolve`].
pub fn get<'a, N: Node>(doc: &'a N, pointer: &JsonPointer) -> Result<Resolved<'a, N>> {
    resolve(doc, pointer)
}

/// Resolve `pointer` against `doc`, returning `default` if any step fails.
pub fn resolve_or<'a, N: Node>(doc: &'a N, pointer: &JsonPointer, default: &'a N) -> Resolved<'a, N> {
    match resolve(doc, pointer) {
        Ok(resolved) => resolved,
        Err(err) => {
            trace!(pointer = %pointer, error = %err, "resolve fell back to default");
            Resolved::Node(default)
        }
    }
}

/// Parse `pointer` and resolve it against `doc`.
///
/// With a `default`, failures during the walk return it instead. Syntax
/// errors in `pointer` are reported either way.
///
/// # Example
///
/// ```
/// use json_pointer::resolve_pointer;
/// use serde_json::json;
///
/// let doc = json!({"a/b": 1});
/// assert_eq!(resolve_pointer(&doc, "/a~1b", None).unwrap().node(), Some(&json!(1)));
///
/// let fallback = json!("none");
/// let found = resolve_pointer(&doc, "/missing", Some(&fallback)).unwrap();
/// assert_eq!(found.node(), Some(&fallback));
/// ```
pub fn resolve_pointer<'a, N: Node>(
    doc: &'a N,
    pointer: &str,
    default: Option<&'a N>,
) -> Result<Resolved<'a, N>> {
    let pointer = JsonPointer::parse(pointer)?;
    match default {
        Some(default) => Ok(resolve_or(doc, &pointer, default)),
        None => resolve(doc, &pointer),
    }
}

/// Resolve all tokens of `pointer` but the last.
///
/// Returns the node that should hold the final token, together with that
/// token. For the root pointer this is `(doc, None)`.
///
/// # Example
///
/// ```
/// use json_pointer::{walk_to_parent, JsonPointer};
/// use serde_json::json;
///
/// let doc = json!({"foo": [1, 2]});
/// let pointer = JsonPointer::parse("/foo/-").unwrap();
/// let (parent, last) = walk_to_parent(&doc, &pointer).unwrap();
/// assert_eq!(parent, &json!([1, 2]));
/// assert_eq!(last, Some("-"));
/// ```
pub fn walk_to_parent<'a, 'p, N: Node>(
    doc: &'a N,
    pointer: &'p JsonPointer,
) -> Result<(&'a N, Option<&'p str>)> {
    let Some((last, init)) = pointer.tokens().split_last() else {
        return Ok((doc, None));
    };
    let mut current = doc;
    for token in init {
        current = match walk(current, token)? {
            Resolved::Node(node) => node,
            Resolved::EndOfList(_) => return Err(past_end_of_list(token)),
        };
    }
    Ok((current, Some(last.as_str())))
}

/// Mutable counterpart of [`walk`]. The `-` token has no node to hand out.
pub(crate) fn walk_mut<'a, N: Node>(node: &'a mut N, token: &str) -> Result<&'a mut N> {
    match node.shape() {
        Shape::Keyed => node
            .as_keyed_mut()
            .and_then(|keyed| keyed.get_mut(token))
            .ok_or_else(|| JsonPointerError::NotFound(format!("member '{token}' not found"))),
        Shape::Ordered => {
            if token == END_OF_LIST {
                return Err(past_end_of_list(token));
            }
            let index = parse_index(token)?;
            let ordered = node.as_ordered_mut().ok_or_else(|| unsupported(token))?;
            let len = ordered.len();
            ordered
                .get_mut(index)
                .ok_or_else(|| JsonPointerError::OutOfBounds {
                    index: token.to_string(),
                    len: Some(len),
                })
        }
        Shape::Indexable => node
            .as_indexable_mut()
            .ok_or_else(|| unsupported(token))?
            .lookup_mut(token)
            .map_err(JsonPointerError::NotFound),
        Shape::Scalar => Err(unsupported(token)),
    }
}

/// Mutable counterpart of [`walk_to_parent`].
pub(crate) fn walk_to_parent_mut<'a, 'p, N: Node>(
    doc: &'a mut N,
    pointer: &'p JsonPointer,
) -> Result<(&'a mut N, Option<&'p str>)> {
    let Some((last, init)) = pointer.tokens().split_last() else {
        return Ok((doc, None));
    };
    let mut current = doc;
    for token in init {
        current = walk_mut(current, token)?;
    }
    Ok((current, Some(last.as_str())))
}
