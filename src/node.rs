//! Node storage shared by every tree in this crate.
//!
//! Nodes live in a flat arena owned by their tree and refer to each other by index. A node knows
//! its parent as well as its children, but only the arena owns anything: parent links are plain
//! indices and never keep a node alive. Dropping (or clearing) the arena reclaims every node at
//! once.
//!
//! Callers see nodes through [`NodeRef`], a borrowed view that can walk to a node's parent and
//! children.
//!
//! # Examples
//!
//! ```
//! use bstree::{BinarySearchTree, NodeLinks, Tree};
//!
//! let tree = BinarySearchTree::from_values([2, 1, 3]).unwrap();
//!
//! let root = tree.root();
//! assert_eq!(root.to_text(), "2");
//!
//! let left = root.left_child().unwrap();
//! assert_eq!(left.to_text(), "1");
//! assert_eq!(left.parent().unwrap(), root);
//!
//! // Walking off the bottom of the tree gives an absent node which renders as "nil".
//! let missing = left.left_child().unwrap();
//! assert_eq!(missing.to_text(), "nil");
//! assert!(missing.parent().is_err());
//! ```

use std::fmt;
use std::ptr;

use crate::error::Error;

/// Index of a node in its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// Which child slot of a parent a new node goes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    value: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub(crate) fn right(&self) -> Option<NodeId> {
        self.right
    }
}

/// The arena backing a tree, along with which of its nodes is the root.
#[derive(Clone, Debug)]
pub(crate) struct Nodes<T> {
    slab: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Nodes<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Nodes<T> {
    pub(crate) fn new() -> Self {
        Self {
            slab: Vec::new(),
            root: None,
        }
    }

    /// How many nodes the arena holds. Every one of them is reachable from the root.
    pub(crate) fn len(&self) -> usize {
        self.slab.len()
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| NodeRef::new(&self.slab, id))
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<T> {
        &self.slab[id.0]
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> NodeRef<'_, T> {
        NodeRef::new(&self.slab, id)
    }

    /// Makes `value` the root of an empty arena.
    pub(crate) fn insert_root(&mut self, value: T) -> NodeId {
        debug_assert!(self.root.is_none(), "the arena already has a root");

        let id = self.push(value, None);
        self.root = Some(id);
        id
    }

    /// Hangs `value` off the given side of `parent`. That side must be empty.
    pub(crate) fn attach(&mut self, parent: NodeId, side: Side, value: T) -> NodeId {
        let id = self.push(value, Some(parent));
        let slot = match side {
            Side::Left => &mut self.slab[parent.0].left,
            Side::Right => &mut self.slab[parent.0].right,
        };
        debug_assert!(slot.is_none(), "child slots are only ever filled once");
        *slot = Some(id);
        id
    }

    /// Drops every node, handing back the values in the order given by `ids`. Any node not named
    /// in `ids` is discarded.
    pub(crate) fn drain_in(&mut self, ids: &[NodeId]) -> Vec<T> {
        self.root = None;
        let mut slots: Vec<Option<T>> = std::mem::take(&mut self.slab)
            .into_iter()
            .map(|node| Some(node.value))
            .collect();

        ids.iter().filter_map(|id| slots[id.0].take()).collect()
    }

    fn push(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.slab.len());
        self.slab.push(Node {
            value,
            parent,
            left: None,
            right: None,
        });
        id
    }
}

/// A borrowed view of one node of a tree. From here you can read the node's value and walk to
/// its parent and children.
///
/// Two `NodeRef`s are equal when they point at the same node of the same tree, regardless of the
/// values stored.
pub struct NodeRef<'a, T> {
    slab: &'a [Node<T>],
    id: NodeId,
}

/// Manual implementations of `Clone` and `Copy` so a `NodeRef` is copyable even when `T` isn't.
impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.slab, other.slab) && self.id == other.id
    }
}
impl<T> Eq for NodeRef<'_, T> {}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("parent", &self.node().parent.map(|id| &self.slab[id.0].value))
            .finish()
    }
}

impl<T> fmt::Display for NodeRef<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value(), f)
    }
}

impl<'a, T> NodeRef<'a, T> {
    fn new(slab: &'a [Node<T>], id: NodeId) -> Self {
        Self { slab, id }
    }

    fn node(&self) -> &'a Node<T> {
        let slab = self.slab;
        &slab[self.id.0]
    }

    fn link(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.slab, id))
    }

    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// This node's parent. Only the root has none.
    pub fn parent(&self) -> Option<Self> {
        self.link(self.node().parent)
    }

    /// This node's left child, if it has one.
    pub fn left_child(&self) -> Option<Self> {
        self.link(self.node().left)
    }

    /// This node's right child, if it has one.
    pub fn right_child(&self) -> Option<Self> {
        self.link(self.node().right)
    }
}

/// Link accessors for a node that may not exist. Asking an absent node for its links is an
/// error rather than a panic, which lets lookups be chained with `?`:
///
/// ```
/// use bstree::{BinarySearchTree, Error, NodeLinks, Tree};
///
/// let tree = BinarySearchTree::from_values([5, 3, 4]).unwrap();
/// let four = tree.root().left_child()?.right_child()?;
/// assert_eq!(four.to_text(), "4");
/// # Ok::<(), Error<i32>>(())
/// ```
pub trait NodeLinks<'a, T> {
    /// The parent of this node. Fails with [`Error::NodeAbsent`] if the node doesn't exist.
    fn parent(&self) -> Result<Option<NodeRef<'a, T>>, Error<T>>;

    /// The left child of this node. Fails with [`Error::NodeAbsent`] if the node doesn't exist.
    fn left_child(&self) -> Result<Option<NodeRef<'a, T>>, Error<T>>;

    /// The right child of this node. Fails with [`Error::NodeAbsent`] if the node doesn't exist.
    fn right_child(&self) -> Result<Option<NodeRef<'a, T>>, Error<T>>;

    /// The node's value as text, or `"nil"` if the node doesn't exist.
    fn to_text(&self) -> String;
}

impl<'a, T> NodeLinks<'a, T> for Option<NodeRef<'a, T>>
where
    T: fmt::Display,
{
    fn parent(&self) -> Result<Option<NodeRef<'a, T>>, Error<T>> {
        self.map(|n| n.parent()).ok_or(Error::NodeAbsent)
    }

    fn left_child(&self) -> Result<Option<NodeRef<'a, T>>, Error<T>> {
        self.map(|n| n.left_child()).ok_or(Error::NodeAbsent)
    }

    fn right_child(&self) -> Result<Option<NodeRef<'a, T>>, Error<T>> {
        self.map(|n| n.right_child()).ok_or(Error::NodeAbsent)
    }

    fn to_text(&self) -> String {
        match self {
            Some(n) => n.to_string(),
            None => "nil".to_string(),
        }
    }
}
