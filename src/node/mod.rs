mod iter;


use compare::Compare;
use log::{debug, trace};
use std::fmt::{self, Debug};
use std::ops::Index;

pub use self::iter::{IntoIter, Iter};

/// An index into the arena, or `None` for an absent node.
pub type Link = Option<usize>;

#[derive(Clone)]
pub struct Node<T> {
    value: T,
    parent: Link,
    left: Link,
    right: Link,
    height: usize,
}

impl<T> Node<T> {
    fn new(value: T, parent: Link) -> Self {
        Node { value: value, parent: parent, left: None, right: None, height: 1 }
    }

    pub fn value(&self) -> &T { &self.value }
}

/// The nodes of a tree, stored in insertion order.
///
/// Only `left` and `right` describe the shape of the tree. `parent` is a back-link used to walk
/// towards the root after an insertion and is rewritten by every rotation that moves a node.
#[derive(Clone)]
pub struct Nodes<T> {
    nodes: Vec<Node<T>>,
    root: Link,
}

impl<T> Nodes<T> {
    pub fn new() -> Self { Nodes { nodes: vec![], root: None } }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn root(&self) -> Link { self.root }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn iter(&self) -> Iter<T> { Iter::new(self) }

    pub fn into_iter(self) -> IntoIter<T> { IntoIter::new(self) }

    /// Returns the values in the order they were inserted.
    pub fn insertion_order(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().map(|node| &node.value)
    }

    pub fn node_ref(&self, link: Link) -> Option<NodeRef<T>> {
        link.map(|index| NodeRef { nodes: &self.nodes, index: index })
    }

    pub fn height(&self, link: Link) -> usize { link.map_or(0, |index| self.nodes[index].height) }

    /// Returns `height(left) - height(right)` for the given node.
    pub fn balance(&self, index: usize) -> isize {
        let node = &self.nodes[index];
        self.height(node.left) as isize - self.height(node.right) as isize
    }

    fn update_height(&mut self, index: usize) {
        let node = &self.nodes[index];
        let height = 1 + self.height(node.left).max(self.height(node.right));
        self.nodes[index].height = height;
    }

    /// Inserts a value below the last node whose child slot on the value's side is empty, then
    /// restores the height and balance of its ancestors.
    ///
    /// Values that compare less than a node go left; all others, including equal values, go
    /// right.
    pub fn insert<C>(&mut self, cmp: &C, value: T) where C: Compare<T> {
        let mut parent = None;
        let mut link = self.root;
        let mut left = false;

        while let Some(index) = link {
            let node = &self.nodes[index];
            left = cmp.compares_lt(&value, &node.value);
            link = if left { node.left } else { node.right };
            parent = Some(index);
        }

        let index = self.nodes.len();
        self.nodes.push(Node::new(value, parent));

        match parent {
            None => self.root = Some(index),
            Some(parent) => {
                if left {
                    self.nodes[parent].left = Some(index);
                } else {
                    self.nodes[parent].right = Some(index);
                }

                self.rebalance_from(parent);
            }
        }
    }

    // Walks from `index` towards the root, stopping early once a subtree's height is unchanged
    // since nothing above it can have moved.
    fn rebalance_from(&mut self, index: usize) {
        let mut link = Some(index);

        while let Some(index) = link {
            let old_height = self.nodes[index].height;
            self.update_height(index);
            let balance = self.balance(index);
            trace!("rebalancing node {} (height {}, balance {})",
                   index, self.nodes[index].height, balance);

            let top = if balance > 1 {
                self.fix_left_heavy(index)
            } else if balance < -1 {
                self.fix_right_heavy(index)
            } else if self.nodes[index].height == old_height {
                break;
            } else {
                index
            };

            link = self.nodes[top].parent;
        }
    }

    // Each fix returns the node now occupying the unbalanced node's former position.

    fn fix_left_heavy(&mut self, index: usize) -> usize {
        match self.nodes[index].left {
            Some(left) if self.balance(left) < 0 => {
                debug!("left-right case at node {}", index);
                self.rotate_left(left);
            }
            _ => debug!("left-left case at node {}", index),
        }

        self.rotate_right(index)
    }

    fn fix_right_heavy(&mut self, index: usize) -> usize {
        match self.nodes[index].right {
            Some(right) if self.balance(right) > 0 => {
                debug!("right-left case at node {}", index);
                self.rotate_right(right);
            }
            _ => debug!("right-right case at node {}", index),
        }

        self.rotate_left(index)
    }

    /// Rotates the subtree rooted at the given node to the left, if possible, returning the
    /// subtree's new root.
    pub fn rotate_left(&mut self, index: usize) -> usize { self.rotate::<Left>(index) }

    /// Rotates the subtree rooted at the given node to the right, if possible, returning the
    /// subtree's new root.
    pub fn rotate_right(&mut self, index: usize) -> usize { self.rotate::<Right>(index) }

    // Lifts the node's opposite child into its place, moving the node down in direction `D`.
    //
    //       node                child
    //      /    \              /     \
    //     a    child   -->   node     c
    //          /   \        /    \
    //       inner   c      a    inner
    //
    // (shown for `D = Left`)
    fn rotate<D>(&mut self, index: usize) -> usize where D: Dir {
        let child = match D::Opposite::forward(&self.nodes[index]) {
            None => return index,
            Some(child) => child,
        };

        let inner = D::forward(&self.nodes[child]);
        let parent = self.nodes[index].parent;

        *D::Opposite::forward_mut(&mut self.nodes[index]) = inner;
        if let Some(inner) = inner { self.nodes[inner].parent = Some(index); }

        *D::forward_mut(&mut self.nodes[child]) = Some(index);
        self.nodes[index].parent = Some(child);
        self.nodes[child].parent = parent;

        match parent {
            None => self.root = Some(child),
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(index) {
                    parent.left = Some(child);
                } else {
                    parent.right = Some(child);
                }
            }
        }

        self.update_height(index);
        self.update_height(child);
        child
    }
}

impl<T> Index<usize> for Nodes<T> {
    type Output = Node<T>;
    fn index(&self, index: usize) -> &Node<T> { &self.nodes[index] }
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn forward<T>(node: &Node<T>) -> Link;
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link;

    /// Follows children in this direction from the given node until there are none left.
    fn extremum<T>(nodes: &Nodes<T>, mut link: Link) -> Link {
        while let Some(index) = link {
            match Self::forward(&nodes[index]) {
                None => break,
                child => link = child,
            }
        }

        link
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward<T>(node: &Node<T>) -> Link { node.left }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward<T>(node: &Node<T>) -> Link { node.right }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link { &mut node.right }
}

/// A read-only view of a node and the subtree below it.
///
/// See [`AvlTree::root`](struct.AvlTree.html#method.root) for an example.
pub struct NodeRef<'a, T: 'a> {
    nodes: &'a [Node<T>],
    index: usize,
}

impl<'a, T> NodeRef<'a, T> {
    fn at(&self, link: Link) -> Option<NodeRef<'a, T>> {
        link.map(|index| NodeRef { nodes: self.nodes, index: index })
    }

    fn node(&self) -> &'a Node<T> { &self.nodes[self.index] }

    /// Returns a reference to the node's value.
    pub fn value(&self) -> &'a T { &self.node().value }

    /// Returns the number of nodes on the longest path from this node down to a leaf, counting
    /// this node.
    pub fn height(&self) -> usize { self.node().height }

    /// Returns the height of the node's left subtree minus the height of its right subtree.
    pub fn balance(&self) -> isize {
        let height = |link: Link| link.map_or(0, |index| self.nodes[index].height as isize);
        height(self.node().left) - height(self.node().right)
    }

    /// Returns the node's left child, if any.
    pub fn left(&self) -> Option<NodeRef<'a, T>> { self.at(self.node().left) }

    /// Returns the node's right child, if any.
    pub fn right(&self) -> Option<NodeRef<'a, T>> { self.at(self.node().right) }

    /// Returns the node's parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> { self.at(self.node().parent) }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> Debug for NodeRef<'a, T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("height", &self.height())
            .field("left", &self.left().map(|node| node.value()))
            .field("right", &self.right().map(|node| node.value()))
            .finish()
    }
}
