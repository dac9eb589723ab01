use std::collections::VecDeque;
use std::vec;
use self::visit::{Seen, Visit};
use super::{Node, Nodes};

/// An in-order walk over the arena, yielding node indices from both ends.
pub struct Indices<'a, T: 'a> {
    nodes: &'a [Node<T>],
    visits: VecDeque<Visit>,
    size: usize,
}

impl<'a, T> Indices<'a, T> {
    pub fn new(nodes: &'a Nodes<T>) -> Self {
        Indices {
            nodes: &nodes.nodes,
            visits: nodes.root.into_iter().map(Visit::new).collect(),
            size: nodes.len(),
        }
    }
}

impl<'a, T> Clone for Indices<'a, T> {
    fn clone(&self) -> Self {
        Indices { nodes: self.nodes, visits: self.visits.clone(), size: self.size }
    }
}

enum Op {
    Push(Option<usize>),
    PopPush(Option<usize>),
    Pop,
}

impl<'a, T> Iterator for Indices<'a, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let nodes = self.nodes;

        loop {
            let op = match self.visits.back_mut() {
                None => return None,
                Some(visit) => match visit.seen() {
                    Seen::N | Seen::R => Op::Push(visit.left(nodes)),
                    Seen::L => Op::PopPush(visit.right(nodes)),
                    Seen::B => Op::Pop,
                },
            };

            match op {
                Op::Push(link) =>
                    if let Some(index) = link { self.visits.push_back(Visit::new(index)); },
                Op::PopPush(link) => {
                    self.size -= 1;
                    let visit = self.visits.pop_back();
                    if let Some(index) = link { self.visits.push_back(Visit::new(index)); }
                    return visit.map(Visit::index);
                }
                Op::Pop => {
                    self.size -= 1;
                    return self.visits.pop_back().map(Visit::index);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, T> DoubleEndedIterator for Indices<'a, T> {
    fn next_back(&mut self) -> Option<usize> {
        let nodes = self.nodes;

        loop {
            let op = match self.visits.front_mut() {
                None => return None,
                Some(visit) => match visit.seen() {
                    Seen::N | Seen::L => Op::Push(visit.right(nodes)),
                    Seen::R => Op::PopPush(visit.left(nodes)),
                    Seen::B => Op::Pop,
                },
            };

            match op {
                Op::Push(link) =>
                    if let Some(index) = link { self.visits.push_front(Visit::new(index)); },
                Op::PopPush(link) => {
                    self.size -= 1;
                    let visit = self.visits.pop_front();
                    if let Some(index) = link { self.visits.push_front(Visit::new(index)); }
                    return visit.map(Visit::index);
                }
                Op::Pop => {
                    self.size -= 1;
                    return self.visits.pop_front().map(Visit::index);
                }
            }
        }
    }
}

impl<'a, T> ExactSizeIterator for Indices<'a, T> {}

mod visit {
    use super::super::Node;

    // Records which of a node's children have already been pushed, so that the front and the
    // back of the walk can share the same stack of pending nodes.
    #[derive(Clone)]
    pub struct Visit {
        index: usize,
        seen: Seen,
    }

    impl Visit {
        pub fn new(index: usize) -> Visit { Visit { index: index, seen: Seen::N } }

        pub fn left<T>(&mut self, nodes: &[Node<T>]) -> Option<usize> {
            match self.seen {
                Seen::N => { self.seen = Seen::L; nodes[self.index].left }
                Seen::R => { self.seen = Seen::B; nodes[self.index].left }
                Seen::L | Seen::B => None,
            }
        }

        pub fn right<T>(&mut self, nodes: &[Node<T>]) -> Option<usize> {
            match self.seen {
                Seen::N => { self.seen = Seen::R; nodes[self.index].right }
                Seen::L => { self.seen = Seen::B; nodes[self.index].right }
                Seen::R | Seen::B => None,
            }
        }

        pub fn index(self) -> usize { self.index }

        pub fn seen(&self) -> Seen { self.seen }
    }

    #[derive(Clone, Copy)]
    pub enum Seen {
        N,
        L,
        R,
        B,
    }
}

/// An iterator over a tree's values in ascending order.
///
/// See [`AvlTree::iter`](struct.AvlTree.html#method.iter) for an example.
pub struct Iter<'a, T: 'a>(Indices<'a, T>);

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(nodes: &'a Nodes<T>) -> Self { Iter(Indices::new(nodes)) }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.0.nodes;
        self.0.next().map(move |index| &nodes[index].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        let nodes = self.0.nodes;
        self.0.next_back().map(move |index| &nodes[index].value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An iterator that consumes a tree, yielding its values in ascending order.
///
/// See [`AvlTree::into_iter`](struct.AvlTree.html#method.into_iter) for an example.
pub struct IntoIter<T> {
    order: vec::IntoIter<usize>,
    slots: Vec<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(nodes: Nodes<T>) -> Self {
        let order: Vec<usize> = Indices::new(&nodes).collect();
        let slots = nodes.nodes.into_iter().map(|node| Some(node.value)).collect();
        IntoIter { order: order.into_iter(), slots: slots }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let index = self.order.next()?;
        self.slots[index].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.order.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        let index = self.order.next_back()?;
        self.slots[index].take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
