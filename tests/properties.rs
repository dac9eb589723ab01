use avl::{AvlTree, NodeRef};
use quickcheck::{TestResult, quickcheck};

// Walks the subtree below `node`, checking parent links, heights and balance, and returns its
// height.
fn check_node<T>(node: NodeRef<T>) -> usize where T: Ord {
    let mut heights = [0, 0];

    for (i, child) in [node.left(), node.right()].iter().enumerate() {
        if let Some(child) = *child {
            let parent = child.parent().map(|parent| parent.value() as *const T);
            assert!(parent == Some(node.value() as *const T));

            if i == 0 {
                assert!(child.value() <= node.value());
            } else {
                assert!(child.value() >= node.value());
            }

            heights[i] = check_node(child);
        }
    }

    assert_eq!(node.height(), 1 + heights[0].max(heights[1]));
    assert_eq!(node.balance(), heights[0] as isize - heights[1] as isize);
    assert!(node.balance().abs() <= 1);
    node.height()
}

fn check_tree<T>(tree: &AvlTree<T>) where T: Ord {
    match tree.root() {
        None => assert_eq!(tree.height(), 0),
        Some(root) => {
            assert!(root.parent().is_none());
            assert_eq!(check_node(root), tree.height());
        }
    }
}

macro_rules! tree_props {
    ($name:ident, $T:ty) => {
        mod $name {
            use avl::AvlTree;
            use quickcheck::quickcheck;

            #[test]
            fn balanced_after_every_insertion() {
                fn test(values: Vec<$T>) -> bool {
                    let mut tree = AvlTree::new();

                    for value in values {
                        tree.insert(value);
                        super::check_tree(&tree);
                    }

                    true
                }

                quickcheck(test as fn(Vec<$T>) -> bool);
            }

            #[test]
            fn iterates_sorted_values() {
                fn test(values: Vec<$T>) -> bool {
                    let tree: AvlTree<$T> = values.iter().cloned().collect();
                    let mut sorted = values;
                    sorted.sort();

                    tree.len() == sorted.len() &&
                        tree.iter().cloned().collect::<Vec<_>>() == sorted &&
                        tree.in_order_values().cloned().collect::<Vec<_>>() == sorted &&
                        tree.into_iter().collect::<Vec<_>>() == sorted
                }

                quickcheck(test as fn(Vec<$T>) -> bool);
            }

            #[test]
            fn iterates_backwards() {
                fn test(tree: AvlTree<$T>) -> bool {
                    let forward: Vec<_> = tree.iter().collect();
                    let mut backward: Vec<_> = tree.iter().rev().collect();
                    backward.reverse();

                    let mut owned: Vec<_> = tree.clone().into_iter().rev().collect();
                    owned.reverse();

                    forward == backward && owned.iter().collect::<Vec<_>>() == forward
                }

                quickcheck(test as fn(AvlTree<$T>) -> bool);
            }

            #[test]
            fn iterates_from_both_ends() {
                fn test(tree: AvlTree<$T>, picks: Vec<bool>) -> bool {
                    let expected: Vec<_> = tree.iter().collect();
                    let mut front = vec![];
                    let mut back = vec![];
                    let mut it = tree.iter();
                    let mut picks = picks.into_iter().cycle();

                    loop {
                        assert_eq!(it.len(), expected.len() - front.len() - back.len());

                        let next = if picks.next().unwrap_or(true) {
                            it.next().map(|value| front.push(value))
                        } else {
                            it.next_back().map(|value| back.push(value))
                        };

                        if next.is_none() { break; }
                    }

                    back.reverse();
                    front.extend(back);
                    front == expected
                }

                quickcheck(test as fn(AvlTree<$T>, Vec<bool>) -> bool);
            }

            #[test]
            fn min_max_agree_with_iter() {
                fn test(tree: AvlTree<$T>) -> bool {
                    (&tree).min() == tree.iter().next() && (&tree).max() == tree.iter().next_back()
                }

                quickcheck(test as fn(AvlTree<$T>) -> bool);
            }

            #[test]
            fn extend_matches_insert() {
                fn test(mut tree: AvlTree<$T>, values: Vec<$T>) -> bool {
                    let mut inserted = tree.clone();
                    for value in values.iter().cloned() { inserted.insert(value); }

                    tree.extend(values);
                    super::check_tree(&tree);
                    tree == inserted
                }

                quickcheck(test as fn(AvlTree<$T>, Vec<$T>) -> bool);
            }

            #[test]
            fn clear_empties() {
                fn test(mut tree: AvlTree<$T>) -> bool {
                    tree.clear();
                    tree.is_empty() && tree.len() == 0 && tree.height() == 0 &&
                        tree.root().is_none() && tree.iter().next().is_none()
                }

                quickcheck(test as fn(AvlTree<$T>) -> bool);
            }
        }
    }
}

tree_props!{small, u8}
tree_props!{wide, u32}
tree_props!{strings, String}

#[quickcheck_macros::quickcheck]
fn height_is_logarithmic(values: Vec<i64>) -> bool {
    let tree: AvlTree<_> = values.into_iter().collect();
    tree.height() as f64 <= 1.4405 * ((tree.len() + 1) as f64).log2()
}

#[quickcheck_macros::quickcheck]
fn shape_does_not_affect_equality(values: Vec<u16>) -> bool {
    let tree: AvlTree<_> = values.iter().cloned().collect();
    let reversed: AvlTree<_> = values.iter().rev().cloned().collect();
    tree == reversed && Ord::cmp(&tree, &reversed) == std::cmp::Ordering::Equal
}

#[test]
fn duplicates_keep_insertion_order() {
    fn test(keys: Vec<u8>) -> TestResult {
        if keys.is_empty() { return TestResult::discard(); }

        let mut tree = AvlTree::with_cmp(|l: &(u8, usize), r: &(u8, usize)| l.0.cmp(&r.0));
        for (i, &key) in keys.iter().enumerate() { tree.insert((key % 4, i)); }

        let values: Vec<_> = tree.iter().cloned().collect();
        TestResult::from_bool(values.windows(2).all(|w| w[0].0 < w[1].0 ||
                                                        (w[0].0 == w[1].0 && w[0].1 < w[1].1)))
    }

    quickcheck(test as fn(Vec<u8>) -> TestResult);
}

#[test]
fn scenarios() {
    let tree: AvlTree<_> = vec![10, 20, 30].into_iter().collect();
    let root = tree.root().unwrap();
    assert_eq!((*root.value(), root.height()), (20, 2));
    assert_eq!(root.left().map(|n| (*n.value(), n.height())), Some((10, 1)));
    assert_eq!(root.right().map(|n| (*n.value(), n.height())), Some((30, 1)));

    let tree: AvlTree<_> = vec![30, 10, 20].into_iter().collect();
    let root = tree.root().unwrap();
    assert_eq!(*root.value(), 20);
    assert_eq!(root.left().map(|n| *n.value()), Some(10));
    assert_eq!(root.right().map(|n| *n.value()), Some(30));

    let tree: AvlTree<_> = (1..8).collect();
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.root().map(|n| *n.value()), Some(4));
    assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);

    let tree: AvlTree<_> = vec![5, 5, 5].into_iter().collect();
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.root().map(|n| *n.value()), Some(5));
    assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [5, 5, 5]);
    check_tree(&tree);

    let tree: AvlTree<_> = vec![42].into_iter().collect();
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [42]);
}
