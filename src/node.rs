//! The building blocks of a [`Tree`][crate::Tree]: `Node`s, the links that own them, and the
//! `Dir` used to pick between a node's two children.
//!
//! Every algorithm in this crate is written once for one side and run for the other side by
//! flipping a `Dir`. There is no separate "left case" and "right case" code.

use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut, Not};
use std::ptr::{self, NonNull};

use log::warn;

use crate::Error;

/// An owned, possibly empty, subtree. Each node is owned by exactly one `Link`: its parent's or
/// the tree's root.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// Selects one of a node's children. `Left` is the lesser side and `Right` the greater side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dir {
    Left = 0,
    Right = 1,
}

impl Dir {
    /// The side a search for `key` continues on from a node holding `node_key`. Keys equal to
    /// `node_key` go right, which is where duplicates are placed when they're allowed.
    pub(crate) fn toward<K: Ord + ?Sized>(key: &K, node_key: &K) -> Self {
        match key.cmp(node_key) {
            Ordering::Less => Self::Left,
            Ordering::Equal | Ordering::Greater => Self::Right,
        }
    }

    /// How a node's balance changes when the subtree on this side grows one level.
    pub(crate) const fn sign(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

impl Not for Dir {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A node's two children, indexed by [`Dir`].
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Links<K>([Link<K>; 2]);

impl<K> Links<K> {
    const fn empty() -> Self {
        Self([None, None])
    }
}

impl<K> Index<Dir> for Links<K> {
    type Output = Link<K>;

    fn index(&self, dir: Dir) -> &Link<K> {
        &self.0[dir as usize]
    }
}

impl<K> IndexMut<Dir> for Links<K> {
    fn index_mut(&mut self, dir: Dir) -> &mut Link<K> {
        &mut self.0[dir as usize]
    }
}

/// A `Node` holds a key and up to two children.
///
/// `balance` is `height(right) - height(left)`. Between public operations it is always one of
/// `-1`, `0` or `1`; it only reaches `±2` for the moment between an insertion or deletion and the
/// rotation that repairs it.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) balance: i8,
    pub(crate) links: Links<K>,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("balance", &self.balance)
            .field("left", &self.links[Dir::Left])
            .field("right", &self.links[Dir::Right])
            .finish()
    }
}

impl<K> Node<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            balance: 0,
            links: Links::empty(),
        }
    }

    /// Allocates a new leaf, reporting allocation failure instead of aborting.
    pub(crate) fn try_new_boxed(key: K) -> Result<Box<Self>, Error> {
        let layout = Layout::new::<Self>();
        let ptr = if fault::should_fail() {
            ptr::null_mut()
        } else {
            // SAFETY: A `Node` always holds a balance and two links so `layout` is never
            // zero-sized.
            unsafe { alloc::alloc(layout) }.cast::<Self>()
        };
        let Some(ptr) = NonNull::new(ptr) else {
            warn!("failed to allocate {} bytes for a tree node", layout.size());
            return Err(Error::Alloc { layout });
        };

        // SAFETY: `ptr` is non-null and was just allocated by the global allocator with the layout
        // of `Self`, so it is valid for a write of `Self` and `Box` may take ownership of it.
        unsafe {
            ptr.as_ptr().write(Self::leaf(key));
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    pub(crate) fn child(&self, dir: Dir) -> Option<&Self> {
        self.links[dir].as_deref()
    }

    pub(crate) fn child_mut(&mut self, dir: Dir) -> Option<&mut Self> {
        self.links[dir].as_deref_mut()
    }

    /// The child on the taller side, or the right child when both sides are equally tall.
    pub(crate) fn taller_child(&self) -> Option<&Self> {
        if self.balance < 0 {
            self.child(Dir::Left)
        } else {
            self.child(Dir::Right)
        }
    }
}


#[cfg(not(test))]
mod fault {
    #[inline(always)]
    pub(super) fn should_fail() -> bool {
        false
    }
}
