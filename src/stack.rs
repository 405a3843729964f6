//! A fixed-capacity stack for remembering the path from the root to a node, so walking back up
//! the tree needs neither recursion nor allocation.

use arrayvec::ArrayVec;

/// The deepest path a [`Stack`] can hold.
///
/// An AVL tree of height `h` has at least `F(h + 2) - 1` nodes, where `F` is the Fibonacci
/// sequence. Reaching height 96 would take more than `2^66` nodes, which no address space holds.
pub(crate) const MAX_HEIGHT: usize = 96;

pub(crate) type Stack<T> = ArrayVec<T, MAX_HEIGHT>;

pub(crate) trait Descend<T> {
    /// Pushes the next level of a path.
    ///
    /// ## Panics
    ///
    /// When the stack already holds [`MAX_HEIGHT`] items, which means the tree isn't balanced.
    fn descend(&mut self, item: T);
}

impl<T> Descend<T> for Stack<T> {
    fn descend(&mut self, item: T) {
        if self.try_push(item).is_err() {
            panic!("tree path deeper than {MAX_HEIGHT} levels");
        }
    }
}
