//! Walking a [`Tree`] in order.
//!
//! [`Cursor`] is the primitive: it keeps the path from the root to its current node on a bounded
//! [`Stack`], so each step is a loop rather than a recursive call. [`Iter`] runs a cursor from each
//! end. [`IntoIter`] consumes the tree instead, rotating it into a list as it goes.

use std::iter::FusedIterator;
use std::ptr;

use crate::node::{Dir, Link, Node};
use crate::stack::{Descend, Stack};
use crate::Tree;

/// A position in a [`Tree`] that can be moved toward smaller or larger keys.
///
/// A new cursor isn't on any key; [`first`](Cursor::first) or [`last`](Cursor::last) put it on
/// one. Stepping off either end leaves it on no key, where [`next`](Cursor::next) and
/// [`prev`](Cursor::prev) return `None` until it is repositioned.
///
/// # Examples
///
/// ```
/// use avl::Tree;
///
/// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
/// let mut cursor = tree.cursor();
///
/// assert_eq!(cursor.first(), Some(&1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.current(), Some(&2));
/// assert_eq!(cursor.prev(), Some(&1));
/// assert_eq!(cursor.prev(), None);
///
/// assert_eq!(cursor.last(), Some(&3));
/// assert_eq!(cursor.next(), None);
/// ```
pub struct Cursor<'a, K> {
    root: Option<&'a Node<K>>,
    current: Option<&'a Node<K>>,
    path: Stack<&'a Node<K>>,
}

/// Manual implementation of `Clone` so we don't require `K: Clone` just to copy references.
///
/// Note the comment on generic structs in
/// [the docs][<https://doc.rust-lang.org/std/clone/trait.Clone.html#derivable>].
impl<K> Clone for Cursor<'_, K> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            current: self.current,
            path: self.path.clone(),
        }
    }
}

impl<'a, K> Cursor<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            root,
            current: None,
            path: Stack::new(),
        }
    }

    /// The key the cursor is on.
    pub fn current(&self) -> Option<&'a K> {
        self.current.map(|node| &node.key)
    }

    /// Moves to the smallest key.
    pub fn first(&mut self) -> Option<&'a K> {
        self.start(Dir::Left)
    }

    /// Moves to the largest key.
    pub fn last(&mut self) -> Option<&'a K> {
        self.start(Dir::Right)
    }

    /// Moves to the next larger key.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a K> {
        self.step(Dir::Right)
    }

    /// Moves to the next smaller key.
    pub fn prev(&mut self) -> Option<&'a K> {
        self.step(Dir::Left)
    }

    /// Goes as far toward `dir` as possible from the root.
    fn start(&mut self, dir: Dir) -> Option<&'a K> {
        self.path.clear();
        self.current = self.root.map(|mut node| {
            while let Some(child) = node.child(dir) {
                self.path.descend(node);
                node = child;
            }
            node
        });
        self.current()
    }

    /// Moves to the in-order neighbor on the `dir` side.
    fn step(&mut self, dir: Dir) -> Option<&'a K> {
        let node = self.current?;
        self.current = match node.child(dir) {
            // The neighbor is the `!dir`-most node of the `dir` subtree.
            Some(mut next) => {
                self.path.descend(node);
                while let Some(child) = next.child(!dir) {
                    self.path.descend(next);
                    next = child;
                }
                Some(next)
            }
            // The neighbor is the first ancestor we reach from its `!dir` side.
            None => {
                let mut last = node;
                loop {
                    let Some(parent) = self.path.pop() else {
                        break None;
                    };
                    match parent.child(dir) {
                        Some(child) if ptr::eq(child, last) => last = parent,
                        _ => break Some(parent),
                    }
                }
            }
        };
        self.current()
    }
}

/// An iterator over the keys of a [`Tree`] in ascending order. Created by [`Tree::iter`].
pub struct Iter<'a, K> {
    front: Cursor<'a, K>,
    back: Cursor<'a, K>,
    remaining: usize,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(tree: &'a Tree<K>) -> Self {
        let mut front = tree.cursor();
        front.first();
        let mut back = tree.cursor();
        back.last();
        Self {
            front,
            back,
            remaining: tree.len(),
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let key = self.front.current();
        self.front.next();
        key
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let key = self.back.current();
        self.back.prev();
        key
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// An owning iterator over the keys of a [`Tree`] in ascending order. Created by
/// [`Tree::into_iter`][IntoIterator::into_iter].
///
/// Each step either frees the smallest remaining node or rotates right to bring a smaller one up,
/// so the whole tree is consumed in `O(N)` time without recursion. Dropping an `IntoIter` frees
/// whatever is left the same way.
pub struct IntoIter<K> {
    rest: Link<K>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(root: Link<K>, len: usize) -> Self {
        Self {
            rest: root,
            remaining: len,
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        loop {
            let mut node = self.rest.take()?;
            match node.links[Dir::Left].take() {
                None => {
                    self.rest = node.links[Dir::Right].take();
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(node.key);
                }
                Some(mut left) => {
                    // Rotate right. Balances are stale from here on, which is fine since
                    // these nodes never go back into a tree.
                    node.links[Dir::Left] = left.links[Dir::Right].take();
                    left.links[Dir::Right] = Some(node);
                    self.rest = Some(left);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> Drop for IntoIter<K> {
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}
