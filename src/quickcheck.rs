use compare::Compare;
use ::quickcheck::{Arbitrary, Gen};
use std::default::Default;
use super::AvlTree;

// Shrinks the insertion sequence rather than the sorted values, so a shrunk tree is built in the
// same relative order as the tree that failed.
impl<T, C> Arbitrary for AvlTree<T, C>
    where T: Arbitrary, C: 'static + Clone + Compare<T> + Default {

    fn arbitrary(gen: &mut Gen) -> Self { Vec::<T>::arbitrary(gen).into_iter().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<T> = self.insertion_order().cloned().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
