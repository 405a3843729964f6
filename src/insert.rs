//! Insertion.
//!
//! A new key always lands in a fresh leaf. Every ancestor of that leaf may have grown a level,
//! but only up to the deepest ancestor that wasn't perfectly balanced beforehand (the "pivot"):
//! that one either becomes balanced, absorbing the growth, or becomes two levels lopsided and
//! is fixed with one rotation that also restores its old height. Nothing above the pivot changes.
//!
//! So insertion is done top-down in one pass: find the pivot and the empty slot while searching,
//! allocate the leaf, then walk from the pivot to the slot tilting balances toward the new leaf.
//! The walk follows the directions recorded while searching, so keys are only compared once.

use log::debug;

use crate::node::{Dir, Node};
use crate::stack::{Descend, Stack};
use crate::{rotate, Error, Tree};

impl<K: Ord> Tree<K> {
    /// Inserts `key`. Returns `false`, leaving the tree untouched, if an equal key is already
    /// stored and the tree rejects duplicates.
    ///
    /// Like the standard collections, this aborts through [`std::alloc::handle_alloc_error`] if
    /// memory runs out. Use [`Tree::try_insert`] to get an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        match self.try_insert(key) {
            Ok(inserted) => inserted,
            Err(Error::Alloc { layout }) => std::alloc::handle_alloc_error(layout),
        }
    }

    /// Inserts `key`, reporting allocation failure as an error. On error the tree is exactly as
    /// it was before the call and `key` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_insert(1), Ok(true));
    /// assert_eq!(tree.try_insert(1), Ok(false));
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<bool, Error> {
        let Some(root) = self.root.as_deref() else {
            self.root = Some(Node::try_new_boxed(key)?);
            self.len = 1;
            debug!("inserted first key");
            return Ok(true);
        };

        // Search without touching anything, so a duplicate, a failed allocation or a panicking
        // `Ord` leaves the tree as it was. Later passes follow the recorded directions.
        let allow_duplicates = self.config.allows_duplicates();
        let mut dirs: Stack<Dir> = Stack::new();
        let mut pivot_depth = 0;
        let mut node = root;
        loop {
            if !allow_duplicates && key == node.key {
                return Ok(false);
            }
            let dir = Dir::toward(&key, &node.key);
            dirs.descend(dir);
            match node.child(dir) {
                Some(child) => {
                    if child.balance != 0 {
                        pivot_depth = dirs.len();
                    }
                    node = child;
                }
                None => break,
            }
        }

        let leaf = Node::try_new_boxed(key)?;

        let (to_pivot, from_pivot) = dirs.split_at(pivot_depth);
        let mut slot = &mut self.root;
        for &dir in to_pivot {
            slot = &mut slot.as_mut().expect("Pivot is on the search path").links[dir];
        }

        // Every node from the pivot down was balanced except possibly the pivot itself, so each
        // one now leans toward the new leaf.
        let heavy = from_pivot[0];
        let mut cur = &mut *slot;
        for &dir in from_pivot {
            let node = cur.as_mut().expect("Search path leads to the new leaf");
            node.balance += dir.sign();
            cur = &mut node.links[dir];
        }
        *cur = Some(leaf);
        debug!("inserted leaf at depth {}", dirs.len());

        let pivot = slot.as_mut().expect("Pivot is on the search path");
        if pivot.balance.abs() > 1 {
            rotate::rebalance(pivot, heavy);
            self.rotations += 1;
        }

        self.len += 1;
        Ok(true)
    }
}
