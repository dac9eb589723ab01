//! A height-balanced (AVL) binary search tree.
//!
//! [`AvlTree`](struct.AvlTree.html) keeps its values in ascending order and rebalances itself
//! on every insertion, so that the heights of any node's two subtrees never differ by more than
//! one.
//!
//! ```
//! let mut tree = avl::AvlTree::new();
//!
//! for value in vec![1, 2, 3, 4, 5, 6, 7] { tree.insert(value); }
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root().map(|root| *root.value()), Some(4));
//! assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
//! ```
//!
//! Rebalancing is reported through the [`log`](https://docs.rs/log) facade: `trace` for every
//! node visited on the way back up to the root and `debug` whenever a rotation fires.

#![deny(missing_docs)]

mod node;
mod tree;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use tree::{AvlTree, IntoIter, Iter, NodeRef};
