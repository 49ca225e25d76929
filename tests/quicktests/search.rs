use bstree::{BinarySearchTree, Error, NodeLinks, NodeRef, Order, SearchTree, Strategy, Tree};

use std::collections::BTreeSet;

/// Builds a tree from `xs`, skipping repeated values, and returns it with the set of values kept.
fn build(xs: &[i16]) -> (BinarySearchTree<i16>, BTreeSet<i16>) {
    let mut tree = BinarySearchTree::<i16>::new();
    let mut set = BTreeSet::new();
    for x in xs {
        match tree.try_insert(*x) {
            Ok(()) => assert!(set.insert(*x)),
            Err(Error::DuplicateValue(dup)) => assert!(set.contains(&dup)),
            Err(e) => panic!("unexpected error {e}"),
        }
    }

    (tree, set)
}

/// Checks every node is ordered relative to its children and that children point back at it.
fn well_formed(node: NodeRef<'_, i16>) -> bool {
    let left_ok = node.left_child().map_or(true, |left| {
        left.value() < node.value() && left.parent() == Some(node) && well_formed(left)
    });
    let right_ok = node.right_child().map_or(true, |right| {
        right.value() > node.value() && right.parent() == Some(node) && well_formed(right)
    });

    left_ok && right_ok
}

#[test]
fn absent_and_empty_are_different() {
    let absent: Option<BinarySearchTree<i16>> = None;
    let empty = Some(BinarySearchTree::<i16>::new());

    assert_eq!(absent.count(), Err(Error::TreeAbsent));
    assert_eq!(empty.count(), Ok(0));
    assert_eq!(absent.search(&0), Err(Error::TreeAbsent));
    assert_eq!(empty.search(&0), Err(Error::TreeEmpty));
    assert_eq!(absent.root().to_text(), "nil");
    assert_eq!(absent.root().parent(), Err(Error::NodeAbsent));
}

quickcheck::quickcheck! {
    fn count_matches_distinct_inserts(xs: Vec<i16>) -> bool {
        let (tree, set) = build(&xs);
        tree.count() == Ok(set.len())
    }
}

quickcheck::quickcheck! {
    fn ordered_values_are_sorted(xs: Vec<i16>) -> bool {
        let (tree, set) = build(&xs);
        let values = tree.ordered_values().unwrap();

        values.len() == tree.count().unwrap() && values.into_iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn links_are_consistent(xs: Vec<i16>) -> bool {
        let (tree, _) = build(&xs);
        tree.root().map_or(true, |root| root.parent().is_none() && well_formed(root))
    }
}

quickcheck::quickcheck! {
    fn search_finds_exactly_what_was_inserted(xs: Vec<i16>, probes: Vec<i16>) -> bool {
        let (tree, set) = build(&xs);
        if set.is_empty() {
            return tree.search(&0) == Err(Error::TreeEmpty);
        }

        probes.iter().chain(&xs).all(|p| tree.search(p) == Ok(set.contains(p)))
    }
}

quickcheck::quickcheck! {
    fn duplicate_changes_nothing(xs: Vec<i16>) -> bool {
        let (mut tree, _) = build(&xs);
        let Some(&first) = xs.first() else {
            return true;
        };
        let before = tree.traverse_breadth_first();
        let count = tree.count();

        tree.try_insert(first) == Err(Error::DuplicateValue(first))
            && tree.traverse_breadth_first() == before
            && tree.count() == count
    }
}

quickcheck::quickcheck! {
    fn recursive_and_iterative_agree(xs: Vec<i16>) -> bool {
        let (tree, set) = build(&xs);
        if set.is_empty() {
            return true;
        }

        [Order::PreOrder, Order::InOrder, Order::PostOrder].into_iter().all(|order| {
            tree.traverse(order, Strategy::Recursive) == tree.traverse(order, Strategy::Iterative)
        })
    }
}

quickcheck::quickcheck! {
    fn balance_is_idempotent(xs: Vec<i16>) -> bool {
        let (mut tree, _) = build(&xs);
        tree.balance().unwrap();
        let once = tree.traverse_breadth_first();

        tree.balance().unwrap();
        tree.traverse_breadth_first() == once
    }
}

quickcheck::quickcheck! {
    fn balance_matches_balanced_construction(xs: Vec<i16>) -> bool {
        let (mut tree, set) = build(&xs);
        if set.is_empty() {
            return BinarySearchTree::balanced_from(set).unwrap_err() == Error::NoValues;
        }
        tree.balance().unwrap();
        let built = BinarySearchTree::balanced_from(set).unwrap();

        tree.traverse_breadth_first() == built.traverse_breadth_first()
    }
}
