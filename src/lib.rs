//! This crate exposes a Binary Search Tree (BST) that is rebalanced on demand,
//! along with a plain binary tree built on the same nodes, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`BinarySearchTree`] here
//! never reshapes itself while inserting, so its height depends on insertion
//! order. [`SearchTree::balance`] (or building with
//! [`BinarySearchTree::balanced_from`]) limits the height to `O(lg N)` where `N`
//! is the number of nodes in the tree. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! ## Absent trees
//!
//! Every operation can also be called on an `Option` of a tree. `None` stands
//! for a tree that doesn't exist at all and each fallible operation reports
//! [`Error::TreeAbsent`] for it, distinct from [`Error::TreeEmpty`] for a tree
//! that exists but holds nothing. See [`Tree`].
//!
//! ## Logging
//!
//! Node placement is logged at `trace` level and rebalancing at `debug` level
//! through the [`log`](https://docs.rs/log) facade. No logger is installed by
//! this crate.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary;
pub mod error;
pub mod node;
pub mod search;
pub mod traverse;
pub mod tree;

pub use binary::{BinaryTree, CompleteTree};
pub use error::Error;
pub use node::{NodeLinks, NodeRef};
pub use search::{BinarySearchTree, Element, SearchTree};
pub use traverse::{Order, Strategy, TokenStyle};
pub use tree::Tree;
