//! A plain binary tree with no ordering between values.
//!
//! Values are added breadth first: each new node takes the first free child slot found scanning
//! the tree level by level, left to right. The tree therefore stays complete (every level full
//! except possibly the last, which fills from the left).
//!
//! # Examples
//!
//! ```
//! use bstree::{BinaryTree, CompleteTree, NodeLinks, Strategy, Tree};
//!
//! let tree = BinaryTree::from_values(["a", "b", "c", "d"]).unwrap();
//!
//! assert_eq!(tree.traverse_breadth_first().unwrap(), "-a--b--c--d-");
//! assert_eq!(tree.traverse_in_order(Strategy::Recursive).unwrap(), "-d--b--a--c-");
//!
//! // "d" was added last and hangs off the left of "b".
//! let last = tree.last_leaf();
//! assert_eq!(last.to_text(), "d");
//! assert_eq!(last.parent().unwrap().to_text(), "b");
//!
//! assert_eq!(tree.search(&"c"), Ok(true));
//! assert_eq!(tree.search(&"z"), Ok(false));
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::error::Error;
use crate::node::{NodeId, NodeRef, Nodes, Side};
use crate::traverse::{self, Order, Strategy, TokenStyle};
use crate::tree::Tree;

/// A binary tree filled level by level.
#[derive(Clone, Debug)]
pub struct BinaryTree<T> {
    nodes: Nodes<T>,
    last_leaf: Option<NodeId>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self {
            nodes: Nodes::new(),
            last_leaf: None,
        }
    }

    /// The first node, in breadth-first order, with a free child slot, and which slot that is.
    fn first_free_slot(&self, root: NodeId) -> (NodeId, Side) {
        let mut queue = VecDeque::from([root]);
        while let Some(runner) = queue.pop_front() {
            let node = self.nodes.get(runner);
            match (node.left(), node.right()) {
                (None, _) => return (runner, Side::Left),
                (Some(_), None) => return (runner, Side::Right),
                (Some(left), Some(right)) => queue.extend([left, right]),
            }
        }

        unreachable!("a non-empty tree always has a free child slot")
    }
}

impl<T> BinaryTree<T>
where
    T: fmt::Display + PartialEq,
{
    /// Builds a tree by adding the values breadth first in the order given.
    pub fn from_values<I>(values: I) -> Result<Self, Error<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        for value in values {
            tree.push(value)?;
        }

        Ok(tree)
    }
}

/// Breadth-first insertion and search for plain binary trees.
///
/// Implemented for [`BinaryTree`] and for `Option<BinaryTree>`. On `None` every fallible method
/// fails with [`Error::TreeAbsent`].
pub trait CompleteTree<T>: Tree<Value = T>
where
    T: fmt::Display + PartialEq,
{
    /// Adds `value` in the first free child slot, scanning level by level and left to right.
    fn push(&mut self, value: T) -> Result<(), Error<T>>;

    /// The node most recently added, if any.
    fn last_leaf(&self) -> Option<NodeRef<'_, T>>;

    /// Whether any node holds `value`, scanning breadth first. Fails on an absent or empty tree.
    fn search(&self, value: &T) -> Result<bool, Error<T>>;
}

impl<T> Tree for BinaryTree<T>
where
    T: fmt::Display,
{
    type Value = T;

    const STYLE: TokenStyle = TokenStyle::Plain;

    fn root(&self) -> Option<NodeRef<'_, T>> {
        self.nodes.root()
    }

    fn count(&self) -> Result<usize, Error<T>> {
        Ok(self.nodes.len())
    }
}

impl<T> CompleteTree<T> for BinaryTree<T>
where
    T: fmt::Display + PartialEq,
{
    fn push(&mut self, value: T) -> Result<(), Error<T>> {
        let id = match self.nodes.root_id() {
            None => {
                log::trace!("added {value} as the root");
                self.nodes.insert_root(value)
            }
            Some(root) => {
                let (parent, side) = self.first_free_slot(root);
                log::trace!(
                    "added {value} as the {side:?} child of {}",
                    self.nodes.get(parent).value()
                );
                self.nodes.attach(parent, side, value)
            }
        };
        self.last_leaf = Some(id);

        Ok(())
    }

    fn last_leaf(&self) -> Option<NodeRef<'_, T>> {
        self.last_leaf.map(|id| self.nodes.node_ref(id))
    }

    fn search(&self, value: &T) -> Result<bool, Error<T>> {
        let root = self.root().ok_or(Error::TreeEmpty)?;

        Ok(traverse::visit(root, Order::BreadthFirst, Strategy::Iterative)
            .into_iter()
            .any(|node| node.value() == value))
    }
}

impl<T> CompleteTree<T> for Option<BinaryTree<T>>
where
    T: fmt::Display + PartialEq,
{
    fn push(&mut self, value: T) -> Result<(), Error<T>> {
        self.as_mut().ok_or(Error::TreeAbsent)?.push(value)
    }

    fn last_leaf(&self) -> Option<NodeRef<'_, T>> {
        self.as_ref().and_then(|tree| tree.last_leaf())
    }

    fn search(&self, value: &T) -> Result<bool, Error<T>> {
        self.as_ref().ok_or(Error::TreeAbsent)?.search(value)
    }
}
