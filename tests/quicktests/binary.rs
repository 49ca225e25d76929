use bstree::{BinaryTree, CompleteTree, NodeLinks, Order, Strategy, Tree};

/// The depth of the deepest node.
fn height<T>(tree: &BinaryTree<T>) -> usize
where
    T: std::fmt::Display,
{
    fn go<T>(node: Option<bstree::NodeRef<'_, T>>) -> usize {
        node.map_or(0, |n| 1 + go(n.left_child()).max(go(n.right_child())))
    }
    go(tree.root())
}

#[test]
fn parents_of_seven_letters() {
    let tree = BinaryTree::from_values(["a", "b", "c", "d", "e", "f", "g"]).unwrap();

    let root = tree.root();
    assert_eq!(root.parent().unwrap().to_text(), "nil");

    let e = root.left_child().unwrap().right_child().unwrap();
    assert_eq!(e.to_text(), "e");
    assert_eq!(e.parent().unwrap().to_text(), "b");
    assert_eq!(tree.last_leaf().to_text(), "g");
}

quickcheck::quickcheck! {
    fn breadth_first_is_insertion_order(xs: Vec<u8>) -> bool {
        let tree = BinaryTree::from_values(xs.iter().copied()).unwrap();
        if xs.is_empty() {
            return tree.traverse_breadth_first().is_err();
        }
        let want: String = xs.iter().map(|x| format!("-{x}-")).collect();

        tree.traverse_breadth_first() == Ok(want)
    }
}

quickcheck::quickcheck! {
    fn stays_complete(xs: Vec<u8>) -> bool {
        let tree = BinaryTree::from_values(xs.iter().copied()).unwrap();
        // A complete tree with n nodes is floor(lg n) + 1 levels tall.
        let want = (usize::BITS - xs.len().leading_zeros()) as usize;

        height(&tree) == want && tree.count() == Ok(xs.len())
    }
}

quickcheck::quickcheck! {
    fn recursive_and_iterative_agree(xs: Vec<u8>) -> bool {
        let tree = BinaryTree::from_values(xs).unwrap();
        [Order::PreOrder, Order::InOrder, Order::PostOrder].into_iter().all(|order| {
            tree.traverse(order, Strategy::Recursive) == tree.traverse(order, Strategy::Iterative)
        })
    }
}

quickcheck::quickcheck! {
    fn search_matches_contains(xs: Vec<u8>, probe: u8) -> bool {
        let tree = BinaryTree::from_values(xs.iter().copied()).unwrap();
        if xs.is_empty() {
            return tree.search(&probe).is_err();
        }

        tree.search(&probe) == Ok(xs.contains(&probe))
    }
}
