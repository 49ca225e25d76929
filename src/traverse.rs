//! Tree traversals.
//!
//! Every traversal walks the tree from its root and renders each visited node as a token,
//! concatenating the tokens in visit order with nothing in between. Binary search trees render a
//! node holding `4` as `-(4)-` while plain binary trees render it as `-4-`.
//!
//! Each depth-first order comes in a recursive and an iterative flavor, and both always visit
//! nodes in the same order. The recursive flavor recurses once per level of the tree so a very
//! unbalanced tree (say, one built by inserting already sorted values into a
//! [`BinarySearchTree`][crate::BinarySearchTree]) can overflow the stack. The iterative flavor
//! keeps its stack on the heap.

use std::collections::VecDeque;
use std::fmt;

use crate::node::NodeRef;

/// The order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Level by level from the root, left to right within a level.
    BreadthFirst,
    /// A node, then its left subtree, then its right subtree.
    PreOrder,
    /// A node's left subtree, then the node, then its right subtree. For a binary search tree
    /// this visits values in ascending order.
    InOrder,
    /// A node's left subtree, then its right subtree, then the node.
    PostOrder,
}

/// How a depth-first traversal keeps track of where it is. Breadth-first traversal always uses a
/// queue and ignores this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Uses the call stack. Can overflow on very deep trees.
    Recursive,
    /// Uses an explicit stack.
    #[default]
    Iterative,
}

/// How each visited node is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenStyle {
    /// `-(value)-`
    Parenthesized,
    /// `-value-`
    Plain,
}

/// Renders the nodes reachable from `root` in the given order.
pub(crate) fn render<T>(
    root: NodeRef<'_, T>,
    order: Order,
    strategy: Strategy,
    style: TokenStyle,
) -> String
where
    T: fmt::Display,
{
    visit(root, order, strategy)
        .into_iter()
        .map(|node| match style {
            TokenStyle::Parenthesized => format!("-({node})-"),
            TokenStyle::Plain => format!("-{node}-"),
        })
        .collect()
}

/// Returns the nodes reachable from `root` in the order they are visited.
pub(crate) fn visit<T>(
    root: NodeRef<'_, T>,
    order: Order,
    strategy: Strategy,
) -> Vec<NodeRef<'_, T>> {
    let mut visited = Vec::new();
    match (order, strategy) {
        (Order::BreadthFirst, _) => breadth_first(root, &mut visited),
        (Order::PreOrder, Strategy::Recursive) => pre_order_recursive(root, &mut visited),
        (Order::PreOrder, Strategy::Iterative) => pre_order_iterative(root, &mut visited),
        (Order::InOrder, Strategy::Recursive) => in_order_recursive(root, &mut visited),
        (Order::InOrder, Strategy::Iterative) => in_order_iterative(root, &mut visited),
        (Order::PostOrder, Strategy::Recursive) => post_order_recursive(root, &mut visited),
        (Order::PostOrder, Strategy::Iterative) => post_order_iterative(root, &mut visited),
    }
    visited
}

fn breadth_first<'a, T>(root: NodeRef<'a, T>, visited: &mut Vec<NodeRef<'a, T>>) {
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        visited.push(node);
        queue.extend(node.left_child());
        queue.extend(node.right_child());
    }
}

fn pre_order_recursive<'a, T>(node: NodeRef<'a, T>, visited: &mut Vec<NodeRef<'a, T>>) {
    visited.push(node);
    if let Some(left) = node.left_child() {
        pre_order_recursive(left, visited);
    }
    if let Some(right) = node.right_child() {
        pre_order_recursive(right, visited);
    }
}

fn pre_order_iterative<'a, T>(root: NodeRef<'a, T>, visited: &mut Vec<NodeRef<'a, T>>) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visited.push(node);
        // Right first so the left child is popped first.
        stack.extend(node.right_child());
        stack.extend(node.left_child());
    }
}

fn in_order_recursive<'a, T>(node: NodeRef<'a, T>, visited: &mut Vec<NodeRef<'a, T>>) {
    if let Some(left) = node.left_child() {
        in_order_recursive(left, visited);
    }
    visited.push(node);
    if let Some(right) = node.right_child() {
        in_order_recursive(right, visited);
    }
}

fn in_order_iterative<'a, T>(root: NodeRef<'a, T>, visited: &mut Vec<NodeRef<'a, T>>) {
    let mut stack = Vec::new();
    let mut runner = Some(root);
    loop {
        if let Some(node) = runner {
            stack.push(node);
            runner = node.left_child();
            continue;
        }
        let Some(node) = stack.pop() else {
            break;
        };
        visited.push(node);
        runner = node.right_child();
    }
}

fn post_order_recursive<'a, T>(node: NodeRef<'a, T>, visited: &mut Vec<NodeRef<'a, T>>) {
    if let Some(left) = node.left_child() {
        post_order_recursive(left, visited);
    }
    if let Some(right) = node.right_child() {
        post_order_recursive(right, visited);
    }
    visited.push(node);
}

fn post_order_iterative<'a, T>(root: NodeRef<'a, T>, visited: &mut Vec<NodeRef<'a, T>>) {
    let mut stack: Vec<NodeRef<'a, T>> = Vec::new();
    let mut runner = Some(root);
    let mut last_visited = None;
    loop {
        if let Some(node) = runner {
            stack.push(node);
            runner = node.left_child();
            continue;
        }
        let Some(&top) = stack.last() else {
            break;
        };
        // The right subtree is done either when there isn't one or when we just came up from it.
        match top.right_child() {
            Some(right) if last_visited != Some(right) => runner = Some(right),
            _ => {
                stack.pop();
                visited.push(top);
                last_visited = Some(top);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Nodes, Side};

    /// ```text
    ///        d
    ///      /   \
    ///     b     f
    ///    / \     \
    ///   a   c     g
    ///            /
    ///           e
    /// ```
    fn lopsided() -> Nodes<char> {
        let mut nodes = Nodes::new();
        let d = nodes.insert_root('d');
        let b = nodes.attach(d, Side::Left, 'b');
        let f = nodes.attach(d, Side::Right, 'f');
        nodes.attach(b, Side::Left, 'a');
        nodes.attach(b, Side::Right, 'c');
        let g = nodes.attach(f, Side::Right, 'g');
        nodes.attach(g, Side::Left, 'e');
        nodes
    }

    fn rendered(order: Order, strategy: Strategy, style: TokenStyle) -> String {
        let nodes = lopsided();
        render(nodes.root().unwrap(), order, strategy, style)
    }

    #[test]
    fn breadth_first_ignores_strategy() {
        let want = "-d--b--f--a--c--g--e-";
        assert_eq!(rendered(Order::BreadthFirst, Strategy::Recursive, TokenStyle::Plain), want);
        assert_eq!(rendered(Order::BreadthFirst, Strategy::Iterative, TokenStyle::Plain), want);
    }

    #[test]
    fn pre_order() {
        let want = "-(d)--(b)--(a)--(c)--(f)--(g)--(e)-";
        for strategy in [Strategy::Recursive, Strategy::Iterative] {
            assert_eq!(rendered(Order::PreOrder, strategy, TokenStyle::Parenthesized), want);
        }
    }

    #[test]
    fn in_order() {
        let want = "-(a)--(b)--(c)--(d)--(f)--(e)--(g)-";
        for strategy in [Strategy::Recursive, Strategy::Iterative] {
            assert_eq!(rendered(Order::InOrder, strategy, TokenStyle::Parenthesized), want);
        }
    }

    #[test]
    fn post_order() {
        let want = "-(a)--(c)--(b)--(e)--(g)--(f)--(d)-";
        for strategy in [Strategy::Recursive, Strategy::Iterative] {
            assert_eq!(rendered(Order::PostOrder, strategy, TokenStyle::Parenthesized), want);
        }
    }

    #[test]
    fn single_node() {
        let mut nodes = Nodes::new();
        nodes.insert_root(1);
        let root = nodes.root().unwrap();

        for order in [Order::BreadthFirst, Order::PreOrder, Order::InOrder, Order::PostOrder] {
            for strategy in [Strategy::Recursive, Strategy::Iterative] {
                assert_eq!(render(root, order, strategy, TokenStyle::Plain), "-1-");
            }
        }
    }
}
