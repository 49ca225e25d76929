//! An unbalanced Binary Search Tree that can be rebalanced on demand.
//!
//! Inserting never reshapes the tree: each value is placed at the end of the path a search for it
//! would follow, so inserting values in sorted order builds a tree as tall as it has values.
//! [`SearchTree::balance`] rebuilds the tree into its shortest possible shape when asked.
//!
//! # Examples
//!
//! ```
//! use bstree::{BinarySearchTree, Error, SearchTree, Strategy, Tree};
//!
//! let mut tree = BinarySearchTree::<i32>::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), Err(Error::TreeEmpty));
//!
//! for value in [1, 2, 3] {
//!     tree.try_insert(value).unwrap();
//! }
//! assert_eq!(tree.search(&2), Ok(true));
//!
//! // Values can only be inserted once.
//! assert_eq!(tree.try_insert(2), Err(Error::DuplicateValue(2)));
//!
//! // Inserting in order made a tall, thin tree...
//! assert_eq!(tree.traverse_breadth_first().unwrap(), "-(1)--(2)--(3)-");
//!
//! // ...which balancing fixes without changing the order of values.
//! tree.balance().unwrap();
//! assert_eq!(tree.traverse_breadth_first().unwrap(), "-(2)--(1)--(3)-");
//! assert_eq!(tree.traverse_in_order(Strategy::Iterative).unwrap(), "-(1)--(2)--(3)-");
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::Error;
use crate::node::{NodeId, NodeRef, Nodes, Side};
use crate::traverse::{self, Order, Strategy, TokenStyle};
use crate::tree::Tree;

/// What a value must support to be stored in a [`BinarySearchTree`]: a total order to decide
/// where it goes and a textual form for traversals. Every `Ord + Display` type qualifies.
pub trait Element: Ord + fmt::Display {}

impl<T> Element for T where T: Ord + fmt::Display {}

/// A Binary Search Tree. Every value in a node's left subtree is less than the node's value and
/// every value in its right subtree is greater. Each value is stored at most once.
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    nodes: Nodes<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            nodes: Nodes::new(),
        }
    }
}

impl<T> BinarySearchTree<T>
where
    T: Element,
{
    /// Builds a tree by inserting the values in the order given. If any insert fails (because
    /// a value is repeated) no tree is built and the first failure is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BinarySearchTree, Error, Tree};
    ///
    /// let tree = BinarySearchTree::from_values([3, 1, 2]).unwrap();
    /// assert_eq!(tree.traverse_breadth_first().unwrap(), "-(3)--(1)--(2)-");
    ///
    /// let duplicated = BinarySearchTree::from_values([3, 1, 3]);
    /// assert_eq!(duplicated.unwrap_err(), Error::DuplicateValue(3));
    /// ```
    pub fn from_values<I>(values: I) -> Result<Self, Error<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        for value in values {
            tree.try_insert(value)?;
        }

        Ok(tree)
    }

    /// Builds the shortest possible tree holding the given values. The values are sorted and then
    /// the middle one is inserted first, followed (recursively) by the middle of each half.
    ///
    /// Fails with [`Error::NoValues`] when given no values and with [`Error::DuplicateValue`] if
    /// any value is repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BinarySearchTree, Error, Tree};
    ///
    /// let tree = BinarySearchTree::balanced_from([7, 6, 5, 4, 3, 2, 1]).unwrap();
    /// assert_eq!(tree.traverse_breadth_first().unwrap(), "-(4)--(2)--(6)--(1)--(3)--(5)--(7)-");
    ///
    /// assert_eq!(BinarySearchTree::<i32>::balanced_from([]).unwrap_err(), Error::NoValues);
    /// ```
    pub fn balanced_from<I>(values: I) -> Result<Self, Error<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return Err(Error::NoValues);
        }
        values.sort();
        log::debug!("building a balanced tree from {} values", values.len());

        let mut tree = Self::new();
        tree.insert_middle_first(values)?;

        Ok(tree)
    }

    /// Inserts sorted `values` so that the tree ends up as short as possible.
    fn insert_middle_first(&mut self, values: Vec<T>) -> Result<(), Error<T>> {
        let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
        self.insert_middle_of(&mut slots)
    }

    /// Inserts the middle value of `slots` then recurses into the values either side of it. For
    /// an even number of values the lower middle is chosen so the extra value lands on the left.
    fn insert_middle_of(&mut self, slots: &mut [Option<T>]) -> Result<(), Error<T>> {
        if slots.is_empty() {
            return Ok(());
        }

        let mid = (slots.len() - 1) / 2;
        let (lower, rest) = slots.split_at_mut(mid);
        let (middle, upper) = rest.split_at_mut(1);
        if let Some(value) = middle[0].take() {
            self.try_insert(value)?;
        }

        self.insert_middle_of(lower)?;
        self.insert_middle_of(upper)
    }

    /// Walks from `root` to where `value` belongs. Returns the node already holding an equal
    /// value with no side, or the node whose empty child slot on the returned side it goes into.
    fn find_slot(&self, root: NodeId, value: &T) -> (NodeId, Option<Side>) {
        let mut runner = root;
        loop {
            let node = self.nodes.get(runner);
            let (side, next) = match value.cmp(node.value()) {
                Ordering::Equal => return (runner, None),
                Ordering::Less => (Side::Left, node.left()),
                Ordering::Greater => (Side::Right, node.right()),
            };
            match next {
                Some(child) => runner = child,
                None => return (runner, Some(side)),
            }
        }
    }
}

/// Insertion, search, sorted extraction, and rebalancing for binary search trees.
///
/// Implemented for [`BinarySearchTree`] and for `Option<BinarySearchTree>`. On `None` every
/// method fails with [`Error::TreeAbsent`].
pub trait SearchTree<T>: Tree<Value = T>
where
    T: Element,
{
    /// Inserts `value` where it belongs. If the tree already holds an equal value the tree is left
    /// untouched and the value is handed back in [`Error::DuplicateValue`].
    ///
    /// This never rebalances; see [`SearchTree::balance`].
    fn try_insert(&mut self, value: T) -> Result<(), Error<T>>;

    /// Whether the tree holds `value`. Fails on an absent or empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BinarySearchTree, SearchTree};
    ///
    /// let tree = BinarySearchTree::from_values([7, 4, 9, 5, 1, 0, 2]).unwrap();
    ///
    /// assert_eq!(tree.search(&5), Ok(true));
    /// assert_eq!(tree.search(&6), Ok(false));
    /// ```
    fn search(&self, value: &T) -> Result<bool, Error<T>>;

    /// All of the tree's values in ascending order. An empty tree gives an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BinarySearchTree, SearchTree};
    ///
    /// let tree = BinarySearchTree::from_values(["pear", "apple", "fig"]).unwrap();
    /// assert_eq!(tree.ordered_values().unwrap(), vec![&"apple", &"fig", &"pear"]);
    /// ```
    fn ordered_values(&self) -> Result<Vec<&T>, Error<T>>;

    /// Rebuilds the tree into its shortest possible shape. The values (and so the in-order
    /// traversal) are unchanged. Trees with fewer than two values are left alone.
    fn balance(&mut self) -> Result<(), Error<T>>;
}

impl<T> Tree for BinarySearchTree<T>
where
    T: Element,
{
    type Value = T;

    const STYLE: TokenStyle = TokenStyle::Parenthesized;

    fn root(&self) -> Option<NodeRef<'_, T>> {
        self.nodes.root()
    }

    fn count(&self) -> Result<usize, Error<T>> {
        Ok(self.nodes.len())
    }
}

impl<T> SearchTree<T> for BinarySearchTree<T>
where
    T: Element,
{
    fn try_insert(&mut self, value: T) -> Result<(), Error<T>> {
        let Some(root) = self.nodes.root_id() else {
            log::trace!("inserted {value} as the root");
            self.nodes.insert_root(value);
            return Ok(());
        };

        match self.find_slot(root, &value) {
            (_, None) => Err(Error::DuplicateValue(value)),
            (parent, Some(side)) => {
                log::trace!(
                    "inserted {value} as the {side:?} child of {}",
                    self.nodes.get(parent).value()
                );
                self.nodes.attach(parent, side, value);
                Ok(())
            }
        }
    }

    fn search(&self, value: &T) -> Result<bool, Error<T>> {
        let mut runner = self.root();
        if runner.is_none() {
            return Err(Error::TreeEmpty);
        }

        while let Some(node) = runner {
            runner = match value.cmp(node.value()) {
                Ordering::Equal => return Ok(true),
                Ordering::Less => node.left_child(),
                Ordering::Greater => node.right_child(),
            };
        }

        Ok(false)
    }

    fn ordered_values(&self) -> Result<Vec<&T>, Error<T>> {
        let mut values = Vec::with_capacity(self.count()?);
        if let Some(root) = self.root() {
            values.extend(
                traverse::visit(root, Order::InOrder, Strategy::Iterative)
                    .into_iter()
                    .map(|node| node.value()),
            );
        }

        Ok(values)
    }

    fn balance(&mut self) -> Result<(), Error<T>> {
        let count = self.count()?;
        if count < 2 {
            return Ok(());
        }
        log::debug!("balancing a tree of {count} values");

        let in_order: Vec<NodeId> = match self.root() {
            Some(root) => traverse::visit(root, Order::InOrder, Strategy::Iterative)
                .iter()
                .map(NodeRef::id)
                .collect(),
            None => return Ok(()),
        };
        let sorted = self.nodes.drain_in(&in_order);

        self.insert_middle_first(sorted)
    }
}

impl<T> SearchTree<T> for Option<BinarySearchTree<T>>
where
    T: Element,
{
    fn try_insert(&mut self, value: T) -> Result<(), Error<T>> {
        self.as_mut().ok_or(Error::TreeAbsent)?.try_insert(value)
    }

    fn search(&self, value: &T) -> Result<bool, Error<T>> {
        self.as_ref().ok_or(Error::TreeAbsent)?.search(value)
    }

    fn ordered_values(&self) -> Result<Vec<&T>, Error<T>> {
        self.as_ref().ok_or(Error::TreeAbsent)?.ordered_values()
    }

    fn balance(&mut self) -> Result<(), Error<T>> {
        self.as_mut().ok_or(Error::TreeAbsent)?.balance()
    }
}

/// Depths of every leaf, with the root at depth 0.
#[cfg(test)]
fn leaf_depths<T>(node: NodeRef<'_, T>, depth: usize, depths: &mut Vec<usize>) {
    match (node.left_child(), node.right_child()) {
        (None, None) => depths.push(depth),
        (left, right) => {
            for child in left.into_iter().chain(right) {
                leaf_depths(child, depth + 1, depths);
            }
        }
    }
}
