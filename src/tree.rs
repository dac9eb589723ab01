//! A height-balanced binary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use super::node::{Dir, Left, Nodes, Right};

pub use super::node::{IntoIter, Iter, NodeRef};

/// A height-balanced (AVL) binary search tree.
///
/// Values are kept in ascending order according to the tree's comparator. Equal values are all
/// retained and are visited in the order they were inserted. After every insertion the heights
/// of any node's two subtrees differ by at most one, so the tree's height is logarithmic in the
/// number of values it holds.
///
/// The behavior of this tree is unspecified if a value's ordering relative to any other value
/// changes while the value is in the tree, or if the comparator is not a total order. This is
/// never memory-unsafe and never panics.
#[derive(Clone)]
pub struct AvlTree<T, C = Natural<T>> where C: Compare<T> {
    nodes: Nodes<T>,
    cmp: C,
}

impl<T> AvlTree<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its values.
    ///
    /// To build a tree from existing values, collect them into it; each value is inserted in
    /// turn.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    ///
    /// let tree: AvlTree<_> = vec![3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.in_order_values().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn new() -> Self { AvlTree::with_cmp(compare::natural()) }
}

impl<T, C> AvlTree<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = AvlTree::with_cmp(natural().rev());
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { AvlTree { nodes: Nodes::new(), cmp: cmp } }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.nodes.root().is_none() }

    /// Returns the number of values in the tree, counting duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2);
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns a reference to the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    /// use compare::{Compare, natural};
    ///
    /// let tree: AvlTree<i32> = AvlTree::new();
    /// assert!(tree.cmp().compares_lt(&1, &2));
    ///
    /// let tree: AvlTree<i32, _> = AvlTree::with_cmp(natural().rev());
    /// assert!(tree.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all values from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    ///
    /// tree.clear();
    /// assert_eq!(tree.len(), 0);
    /// assert_eq!(tree.iter().next(), None);
    /// ```
    pub fn clear(&mut self) { self.nodes.clear(); }

    /// Inserts a value into the tree, rebalancing it as necessary.
    ///
    /// A value equal to one already in the tree is inserted alongside it rather than replacing
    /// it, and is visited after it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// tree.insert(10);
    /// tree.insert(20);
    /// tree.insert(30);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &20);
    /// assert_eq!(root.height(), 2);
    ///
    /// tree.insert(20);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&10, &20, &20, &30]);
    /// ```
    pub fn insert(&mut self, value: T) { self.nodes.insert(&self.cmp, value); }

    /// Returns an iterator over the tree's values in ascending order.
    ///
    /// The iterator borrows the tree and does not modify it; calling this again starts a new
    /// traversal from the beginning.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: avl::AvlTree<_> = vec![5, 5, 5].into_iter().collect();
    /// assert_eq!(tree.in_order_values().collect::<Vec<_>>(), [&5, &5, &5]);
    /// ```
    pub fn in_order_values(&self) -> Iter<T> { self.nodes.iter() }

    /// Returns an iterator over the tree's values in ascending order.
    ///
    /// This is the same traversal as [`in_order_values`](#method.in_order_values).
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next_back(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> { self.nodes.iter() }

    /// Returns an iterator that consumes the tree, yielding its values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// tree.insert("b");
    /// tree.insert("a");
    /// tree.insert("c");
    ///
    /// let mut it = tree.into_iter();
    /// assert_eq!(it.next(), Some("a"));
    /// assert_eq!(it.next(), Some("b"));
    /// assert_eq!(it.next(), Some("c"));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn into_iter(self) -> IntoIter<T> { self.nodes.into_iter() }

    /// Returns a view of the tree's root node, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: avl::AvlTree<_> = vec![30, 10, 20].into_iter().collect();
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &20);
    /// assert_eq!(root.balance(), 0);
    /// assert_eq!(root.left().unwrap().value(), &10);
    /// assert_eq!(root.right().unwrap().value(), &30);
    /// assert!(root.parent().is_none());
    /// ```
    pub fn root(&self) -> Option<NodeRef<T>> { self.nodes.node_ref(self.nodes.root()) }

    /// Returns the height of the tree: the number of nodes on its longest root-to-leaf path, or
    /// zero if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// for i in 1..8 { tree.insert(i); }
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize { self.nodes.height(self.nodes.root()) }

    /// Returns a reference to the tree's minimum value, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert_eq!((&tree).min(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!((&tree).min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        Left::extremum(&self.nodes, self.nodes.root()).map(|index| self.nodes[index].value())
    }

    /// Returns a reference to the tree's maximum value, or `None` if the tree is empty.
    ///
    /// When the maximum occurs more than once, this is the most recently inserted copy.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert_eq!((&tree).max(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!((&tree).max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        Right::extremum(&self.nodes, self.nodes.root()).map(|index| self.nodes[index].value())
    }

    #[cfg(feature = "quickcheck")]
    pub(crate) fn insertion_order(&self) -> impl Iterator<Item = &T> {
        self.nodes.insertion_order()
    }

    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &Nodes<T> { &self.nodes }
}

impl<T, C> Debug for AvlTree<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some(value) = it.next() {
            write!(f, "{:?}", value)?;
            for value in it { write!(f, ", {:?}", value)?; }
        }

        write!(f, "}}")
    }
}

impl<T, C> Default for AvlTree<T, C> where C: Compare<T> + Default {
    fn default() -> Self { AvlTree::with_cmp(Default::default()) }
}

impl<T, C> Extend<T> for AvlTree<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for value in it { self.insert(value); }
    }
}

impl<T, C> iter::FromIterator<T> for AvlTree<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut tree = AvlTree::default();
        tree.extend(it);
        tree
    }
}

impl<T, C> Hash for AvlTree<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for value in self.iter() { value.hash(h); }
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for AvlTree<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { self.into_iter() }
}

impl<T, C> PartialEq for AvlTree<T, C> where C: Compare<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.iter().zip(other.iter()).all(|(l, r)| self.cmp.compares_eq(l, r))
    }
}

impl<T, C> Eq for AvlTree<T, C> where C: Compare<T> {}

impl<T, C> PartialOrd for AvlTree<T, C> where C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(Ord::cmp(self, other)) }
}

impl<T, C> Ord for AvlTree<T, C> where C: Compare<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.cmp.compare(l, r) {
                    Equal => {}
                    order => return order,
                },
            }
        }
    }
}
