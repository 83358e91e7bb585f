//! Walking documents whose nodes are not `serde_json::Value`.

use json_pointer::{
    resolve_pointer, set_pointer, set_pointer_in_place, ErrorKind, Indexable, JsonPointer, Node,
    Ordered, Shape,
};

#[derive(Debug, Clone, PartialEq)]
enum Tree {
    Leaf(i64),
    Dir(Dir),
    List(Vec<Tree>),
}

/// Directory entries, looked up by name through the generic accessor.
#[derive(Debug, Clone, PartialEq, Default)]
struct Dir {
    entries: Vec<(String, Tree)>,
    read_only: bool,
}

impl Dir {
    fn with(entries: Vec<(&str, Tree)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, tree)| (name.to_string(), tree))
                .collect(),
            read_only: false,
        }
    }
}

impl Indexable<Tree> for Dir {
    fn lookup(&self, token: &str) -> Result<&Tree, String> {
        self.entries
            .iter()
            .find(|(name, _)| name == token)
            .map(|(_, tree)| tree)
            .ok_or_else(|| format!("no entry named '{token}'"))
    }

    fn lookup_mut(&mut self, token: &str) -> Result<&mut Tree, String> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == token)
            .map(|(_, tree)| tree)
            .ok_or_else(|| format!("no entry named '{token}'"))
    }

    fn assign(&mut self, token: &str, value: Tree) -> Result<Option<Tree>, String> {
        if self.read_only {
            return Err("directory is read-only".to_string());
        }
        match self.entries.iter_mut().find(|(name, _)| name == token) {
            Some((_, slot)) => Ok(Some(std::mem::replace(slot, value))),
            None => {
                self.entries.push((token.to_string(), value));
                Ok(None)
            }
        }
    }
}

impl Ordered<Tree> for Vec<Tree> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&Tree> {
        <[Tree]>::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut Tree> {
        <[Tree]>::get_mut(self, index)
    }

    fn push(&mut self, value: Tree) {
        Vec::push(self, value)
    }
}

impl Node for Tree {
    fn as_ordered(&self) -> Option<&dyn Ordered<Tree>> {
        match self {
            Tree::List(items) => Some(items),
            _ => None,
        }
    }

    fn as_ordered_mut(&mut self) -> Option<&mut dyn Ordered<Tree>> {
        match self {
            Tree::List(items) => Some(items),
            _ => None,
        }
    }

    fn as_indexable(&self) -> Option<&dyn Indexable<Tree>> {
        match self {
            Tree::Dir(dir) => Some(dir),
            _ => None,
        }
    }

    fn as_indexable_mut(&mut self) -> Option<&mut dyn Indexable<Tree>> {
        match self {
            Tree::Dir(dir) => Some(dir),
            _ => None,
        }
    }
}

fn sample() -> Tree {
    Tree::Dir(Dir::with(vec![
        ("size", Tree::Leaf(3)),
        (
            "items",
            Tree::List(vec![
                Tree::Leaf(10),
                Tree::Dir(Dir::with(vec![("0", Tree::Leaf(20))])),
            ]),
        ),
    ]))
}

#[test]
fn shapes_are_probed_per_node() {
    let tree = sample();
    assert_eq!(tree.shape(), Shape::Indexable);
    assert_eq!(Tree::List(vec![]).shape(), Shape::Ordered);
    assert_eq!(Tree::Leaf(1).shape(), Shape::Scalar);
}

#[test]
fn resolve_through_mixed_containers() {
    let tree = sample();
    let found = resolve_pointer(&tree, "/items/0", None).unwrap();
    assert_eq!(found.node(), Some(&Tree::Leaf(10)));

    // The generic accessor receives the raw token, so "0" is a name here.
    let found = resolve_pointer(&tree, "/items/1/0", None).unwrap();
    assert_eq!(found.node(), Some(&Tree::Leaf(20)));

    assert!(resolve_pointer(&tree, "/items/-", None).unwrap().is_end_of_list());
}

#[test]
fn accessor_failures_are_not_found() {
    let tree = sample();
    let err = resolve_pointer(&tree, "/nope", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("no entry named 'nope'"));

    let err = resolve_pointer(&tree, "/size/x", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSupported);
}

#[test]
fn set_through_the_generic_accessor() {
    let tree = sample();
    let out = set_pointer(&tree, "/items/1/name", Tree::Leaf(7)).unwrap();
    let pointer = JsonPointer::parse("/items/1/name").unwrap();
    assert_eq!(pointer.resolve(&out).unwrap().node(), Some(&Tree::Leaf(7)));
    assert!(pointer.resolve(&tree).is_err());

    let mut tree = sample();
    set_pointer_in_place(&mut tree, "/items/-", Tree::Leaf(30)).unwrap();
    let found = resolve_pointer(&tree, "/items/2", None).unwrap();
    assert_eq!(found.node(), Some(&Tree::Leaf(30)));
}

#[test]
fn refused_assignment_is_not_supported() {
    let mut tree = Tree::Dir(Dir {
        read_only: true,
        ..Dir::default()
    });
    let err = set_pointer_in_place(&mut tree, "/x", Tree::Leaf(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSupported);
    assert_eq!(err.to_string(), "not supported: directory is read-only");
}
