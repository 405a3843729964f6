//! The [`Tree`] facade. Insertion and deletion live in their own modules; this one holds
//! construction, lookups, and the trait implementations.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same key again is refused.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing reports whether anything was there.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::iter::{Cursor, IntoIter, Iter};
use crate::node::{Dir, Link};
use crate::Config;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of keys. It can be used for
/// inserting, finding, and removing keys in `O(lg N)` time and visiting them in sorted order.
///
/// Whether equal keys may be stored more than once is decided by the [`Config`] the tree was
/// built with.
#[derive(Clone)]
pub struct Tree<K> {
    pub(crate) root: Link<K>,
    pub(crate) len: usize,
    pub(crate) config: Config,
    pub(crate) rotations: u64,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree` that rejects duplicate keys.
    pub const fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Generates a new, empty `Tree` with the given configuration. The configuration can't be
    /// changed afterwards.
    pub const fn with_config(config: Config) -> Self {
        Self {
            root: None,
            len: 0,
            config,
            rotations: 0,
        }
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree; `0` when empty and `1` for a single key.
    ///
    /// This follows the taller child at each level so it costs `O(lg N)`, not `O(N)`.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            height += 1;
            node = n.taller_child();
        }
        height
    }

    /// How many times this tree has rebalanced itself since it was created. A single and a
    /// double rotation each count once.
    ///
    /// An insertion adds at most one to this count. A removal may add up to one per level of the
    /// tree.
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// The smallest key.
    pub fn first(&self) -> Option<&K> {
        self.cursor().first()
    }

    /// The largest key.
    pub fn last(&self) -> Option<&K> {
        self.cursor().last()
    }

    /// An iterator over the keys in ascending order. The iterator is lazy; calling `iter` again
    /// starts over from the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
    /// assert_eq!(tree.iter().rev().next(), Some(&8));
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// A [`Cursor`] that can step through the keys in either direction. It starts unpositioned;
    /// call [`Cursor::first`] or [`Cursor::last`] to begin.
    pub fn cursor(&self) -> Cursor<'_, K> {
        Cursor::new(self.root.as_deref())
    }

    /// Removes every key.
    ///
    /// Nodes are freed by rotating the tree into a right-leaning list, so this never recurses
    /// however many keys there are.
    pub fn clear(&mut self) {
        let len = std::mem::take(&mut self.len);
        if len > 0 {
            log::debug!("tearing down {len} nodes");
        }
        drop(IntoIter::new(self.root.take(), len));
    }
}

impl<K: Ord> Tree<K> {
    /// Finds the stored key equal to `key`. This is useful when keys carry more than the part
    /// they are ordered by.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("a"));
    ///
    /// assert_eq!(tree.find("a"), Some(&String::from("a")));
    /// assert_eq!(tree.find("b"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match key.cmp(n.key.borrow()) {
                Ordering::Less => n.child(Dir::Left),
                Ordering::Equal => return Some(&n.key),
                Ordering::Greater => n.child(Dir::Right),
            };
        }
        None
    }

    /// Whether a key equal to `key` is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }
}

impl<K: PartialEq> PartialEq for Tree<K> {
    /// Trees are equal when they hold equal keys, whatever their shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq> Eq for Tree<K> {}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    /// Consumes the tree, yielding its keys in ascending order.
    fn into_iter(mut self) -> IntoIter<K> {
        let len = std::mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Duplicates;

    #[test]
    fn empty_tree() {
        let tree: Tree<i32> = Tree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert!(!tree.contains(&1));
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn config_is_kept() {
        let tree: Tree<i32> = Tree::with_config(Config::new().allow_duplicates());
        assert_eq!(tree.config().duplicates(), Duplicates::Allow);
        assert_eq!(tree.clone().config().duplicates(), Duplicates::Allow);
    }

    #[test]
    fn find_through_borrow() {
        let tree: Tree<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();

        assert_eq!(tree.find("a").map(String::as_str), Some("a"));
        assert!(tree.contains("c"));
        assert!(!tree.contains("d"));
    }

    #[test]
    fn first_and_last() {
        let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        assert_eq!(tree.first(), Some(&1));
        assert_eq!(tree.last(), Some(&9));
    }

    #[test]
    fn height_follows_balance() {
        let mut tree = Tree::new();
        for key in 1..=7 {
            tree.insert(key);
        }
        // A perfect tree of 7 nodes.
        assert_eq!(tree.height(), 3);

        tree.insert(8);
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.height(), tree.assert_valid());
    }

    #[test]
    fn equality_ignores_shape() {
        let ascending: Tree<_> = (0..10).collect();
        let descending: Tree<_> = (0..10).rev().collect();

        assert_ne!(format!("{ascending:?}"), format!("{descending:?}"));
        assert_eq!(ascending, descending);

        let shorter: Tree<_> = (0..9).collect();
        assert_ne!(ascending, shorter);
    }

    #[test]
    fn clone_is_structurally_equal() {
        let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
        let cloned = tree.clone();

        assert!(tree.root == cloned.root);
        assert_eq!(tree.len(), cloned.len());
        cloned.assert_valid();
    }

    #[test]
    fn clear_empties() {
        let mut tree: Tree<_> = (0..100).collect();
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(!tree.contains(&50));

        // Still usable afterwards.
        assert!(tree.insert(50));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn drop_large_tree() {
        let tree: Tree<_> = (0..100_000).map(|x| x.to_string()).collect();
        assert_eq!(tree.len(), 100_000);
        drop(tree);
    }

    #[test]
    fn debug_shows_structure() {
        let tree: Tree<_> = [2, 1].into_iter().collect();
        let debug = format!("{tree:?}");

        assert!(debug.starts_with("Tree { len: 2, root: Some(Node { key: 2, balance: -1"));
    }
}
