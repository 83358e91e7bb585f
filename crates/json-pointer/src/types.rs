//! Type definitions for the documents a pointer walks through.
//!
//! A document node is classified at every step by probing which capability
//! it offers: keyed lookup first, then ordered lookup, then a generic
//! token accessor. Anything offering none of them is a scalar.

use std::fmt;

use serde_json::{Map, Value};

/// Lookup by string key (JSON objects).
pub trait Keyed<N> {
    fn get(&self, key: &str) -> Option<&N>;
    fn get_mut(&mut self, key: &str) -> Option<&mut N>;
    /// Inserts or overwrites, returning the previous value.
    fn insert(&mut self, key: String, value: N) -> Option<N>;
}

/// Lookup by position (JSON arrays).
pub trait Ordered<N> {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&N>;
    fn get_mut(&mut self, index: usize) -> Option<&mut N>;
    fn push(&mut self, value: N);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generic lookup for node types that are neither maps nor sequences.
///
/// The raw token is passed through unmodified. Failures are reported as a
/// human-readable message.
pub trait Indexable<N> {
    fn lookup(&self, token: &str) -> Result<&N, String>;
    fn lookup_mut(&mut self, token: &str) -> Result<&mut N, String>;
    fn assign(&mut self, token: &str, value: N) -> Result<Option<N>, String>;
}

/// The shape of a node as seen by a single traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Keyed,
    Ordered,
    Indexable,
    Scalar,
}

/// A node of a document that pointers can walk through.
///
/// Every probe defaults to `None`, so an implementation only overrides the
/// capabilities it actually has. `Clone` must produce a copy that shares no
/// mutable state with the original.
pub trait Node: Clone {
    fn as_keyed(&self) -> Option<&dyn Keyed<Self>> {
        None
    }

    fn as_keyed_mut(&mut self) -> Option<&mut dyn Keyed<Self>> {
        None
    }

    fn as_ordered(&self) -> Option<&dyn Ordered<Self>> {
        None
    }

    fn as_ordered_mut(&mut self) -> Option<&mut dyn Ordered<Self>> {
        None
    }

    fn as_indexable(&self) -> Option<&dyn Indexable<Self>> {
        None
    }

    fn as_indexable_mut(&mut self) -> Option<&mut dyn Indexable<Self>> {
        None
    }

    /// Classifies the node: keyed, then ordered, then indexable.
    fn shape(&self) -> Shape {
        if self.as_keyed().is_some() {
            Shape::Keyed
        } else if self.as_ordered().is_some() {
            Shape::Ordered
        } else if self.as_indexable().is_some() {
            Shape::Indexable
        } else {
            Shape::Scalar
        }
    }
}

impl Keyed<Value> for Map<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        Map::get(self, key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        Map::get_mut(self, key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        Map::insert(self, key, value)
    }
}

impl Ordered<Value> for Vec<Value> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&Value> {
        <[Value]>::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        <[Value]>::get_mut(self, index)
    }

    fn push(&mut self, value: Value) {
        Vec::push(self, value)
    }
}

impl Node for Value {
    fn as_keyed(&self) -> Option<&dyn Keyed<Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    fn as_keyed_mut(&mut self) -> Option<&mut dyn Keyed<Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    fn as_ordered(&self) -> Option<&dyn Ordered<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    fn as_ordered_mut(&mut self) -> Option<&mut dyn Ordered<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

/// The append position of an ordered container, produced by resolving the
/// `-` token.
///
/// It has no value of its own; walking any further through it fails.
pub struct EndOfList<'a, N> {
    list: &'a N,
}

impl<'a, N: Node> EndOfList<'a, N> {
    pub(crate) fn new(list: &'a N) -> Self {
        Self { list }
    }

    /// The container this marker points past.
    pub fn list(&self) -> &'a N {
        self.list
    }

    /// The index the marker stands for, i.e. the container length.
    pub fn index(&self) -> usize {
        self.list.as_ordered().map_or(0, |list| list.len())
    }
}

impl<N> Clone for EndOfList<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for EndOfList<'_, N> {}

impl<N: PartialEq> PartialEq for EndOfList<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<N: fmt::Debug> fmt::Debug for EndOfList<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EndOfList({:?})", self.list)
    }
}

/// The outcome of a successful resolve.
#[derive(Debug, PartialEq)]
pub enum Resolved<'a, N> {
    /// A concrete node inside the document.
    Node(&'a N),
    /// The append position of an ordered container.
    EndOfList(EndOfList<'a, N>),
}

impl<'a, N> Resolved<'a, N> {
    /// The referenced node, or `None` for an end-of-list marker.
    pub fn node(&self) -> Option<&'a N> {
        match *self {
            Resolved::Node(node) => Some(node),
            Resolved::EndOfList(_) => None,
        }
    }

    pub fn is_end_of_list(&self) -> bool {
        matches!(self, Resolved::EndOfList(_))
    }
}

impl<N: Clone> Resolved<'_, N> {
    /// Clones the referenced node out of the document.
    pub fn cloned(&self) -> Option<N> {
        self.node().cloned()
    }
}

impl<N> Clone for Resolved<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Resolved<'_, N> {}
