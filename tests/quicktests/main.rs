#[macro_use]
extern crate quickcheck_macros;

mod reference;

use quickcheck::{Arbitrary, Gen};

/// The operations that change a tree's shape. Shapes are compared after
/// each one so there is no separate search or traversal step.
#[derive(Copy, Clone, Debug)]
pub(crate) enum ShapeOp<T> {
    /// Insert the T into the tree
    Insert(T),
    /// Remove the T from the tree
    Remove(T),
}

impl<T> Arbitrary for ShapeOp<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation.
    /// Inserts are weighted so trees get deep enough to hit every removal case.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => ShapeOp::Insert(T::arbitrary(g)),
            1 => ShapeOp::Remove(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
