//! Queries and traversals common to every kind of tree in this crate.
//!
//! A tree that doesn't exist at all is represented by `None`. [`Tree`] is implemented for
//! `Option<X>` whenever it is implemented for `X`, so the same calls work on a tree that may not
//! exist and report [`Error::TreeAbsent`] instead of [`Error::TreeEmpty`]:
//!
//! ```
//! use bstree::{BinarySearchTree, Error, Tree};
//!
//! let absent: Option<BinarySearchTree<i32>> = None;
//! assert!(absent.is_absent());
//! assert_eq!(absent.count(), Err(Error::TreeAbsent));
//!
//! let empty = Some(BinarySearchTree::<i32>::new());
//! assert!(!empty.is_absent());
//! assert_eq!(empty.count(), Ok(0));
//! assert_eq!(empty.traverse_breadth_first(), Err(Error::TreeEmpty));
//! ```

use std::fmt;

use crate::error::Error;
use crate::node::NodeRef;
use crate::traverse::{self, Order, Strategy, TokenStyle};

/// State queries and traversals shared by [`BinarySearchTree`][crate::BinarySearchTree] and
/// [`BinaryTree`][crate::BinaryTree].
pub trait Tree {
    /// The type of the values stored in the tree.
    type Value: fmt::Display;

    /// How traversals render each node.
    const STYLE: TokenStyle;

    /// Whether this is the "no tree" handle. Only `None` is absent.
    fn is_absent(&self) -> bool {
        false
    }

    /// Whether the tree is absent or has no nodes.
    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// The root of the tree, if it has one.
    fn root(&self) -> Option<NodeRef<'_, Self::Value>>;

    /// How many values the tree holds. An empty tree holds zero values but an absent tree fails
    /// with [`Error::TreeAbsent`].
    fn count(&self) -> Result<usize, Error<Self::Value>>;

    /// Renders the nodes of the tree in the given order. Fails with [`Error::TreeAbsent`] or
    /// [`Error::TreeEmpty`] if there is nothing to traverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BinarySearchTree, Order, Strategy, Tree};
    ///
    /// let tree = BinarySearchTree::from_values([2, 1, 3]).unwrap();
    ///
    /// let pre_order = tree.traverse(Order::PreOrder, Strategy::Recursive).unwrap();
    /// assert_eq!(pre_order, "-(2)--(1)--(3)-");
    /// ```
    fn traverse(&self, order: Order, strategy: Strategy) -> Result<String, Error<Self::Value>> {
        if self.is_absent() {
            return Err(Error::TreeAbsent);
        }
        let root = self.root().ok_or(Error::TreeEmpty)?;

        Ok(traverse::render(root, order, strategy, Self::STYLE))
    }

    /// Renders the nodes level by level, left to right within a level.
    fn traverse_breadth_first(&self) -> Result<String, Error<Self::Value>> {
        self.traverse(Order::BreadthFirst, Strategy::Iterative)
    }

    /// Renders each node before its left and then right subtree.
    fn traverse_pre_order(&self, strategy: Strategy) -> Result<String, Error<Self::Value>> {
        self.traverse(Order::PreOrder, strategy)
    }

    /// Renders each node between its left and right subtree.
    fn traverse_in_order(&self, strategy: Strategy) -> Result<String, Error<Self::Value>> {
        self.traverse(Order::InOrder, strategy)
    }

    /// Renders each node after its left and then right subtree.
    fn traverse_post_order(&self, strategy: Strategy) -> Result<String, Error<Self::Value>> {
        self.traverse(Order::PostOrder, strategy)
    }
}

impl<X> Tree for Option<X>
where
    X: Tree,
{
    type Value = X::Value;

    const STYLE: TokenStyle = X::STYLE;

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn is_empty(&self) -> bool {
        self.as_ref().map_or(true, |tree| tree.is_empty())
    }

    fn root(&self) -> Option<NodeRef<'_, Self::Value>> {
        self.as_ref().and_then(|tree| tree.root())
    }

    fn count(&self) -> Result<usize, Error<Self::Value>> {
        self.as_ref().ok_or(Error::TreeAbsent)?.count()
    }
}
