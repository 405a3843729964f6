//! Deletion.
//!
//! A read-only search first records which side the path takes at each level. The path is then
//! detached from the tree: each ancestor is taken out of its parent's link and pushed onto a
//! [`Stack`] together with its side. Once the key's node has been unlinked the stack is unwound,
//! reattaching every ancestor and fixing balances on the way back up.
//!
//! Unlike insertion, a rotation here can leave its subtree a level shorter than before, so the
//! parent may need a rotation too. A single removal can rotate once per level.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use log::debug;

use crate::node::{Dir, Link, Node};
use crate::stack::{Descend, Stack};
use crate::{rotate, Tree};

impl<K: Ord> Tree<K> {
    /// Removes the key equal to `key`. Returns `false`, leaving the tree untouched, if there is no
    /// such key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes the key equal to `key` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("a"));
    ///
    /// assert_eq!(tree.take("a"), Some(String::from("a")));
    /// assert_eq!(tree.take("a"), None);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // All comparisons happen before anything is detached, so a panicking `Ord` leaves the
        // tree as it was.
        let mut dirs: Stack<Dir> = Stack::new();
        let mut found = self.root.as_deref();
        loop {
            let node = found?;
            let dir = match key.cmp(node.key.borrow()) {
                Ordering::Less => Dir::Left,
                Ordering::Equal => break,
                Ordering::Greater => Dir::Right,
            };
            dirs.descend(dir);
            found = node.child(dir);
        }

        let mut path: Stack<(Box<Node<K>>, Dir)> = Stack::new();
        let mut node = self.root.take().expect("Found key => root");
        for dir in dirs {
            let child = node.links[dir].take().expect("Found key => on search path");
            path.descend((node, dir));
            node = child;
        }

        let (removed, replacement) = match (
            node.links[Dir::Left].take(),
            node.links[Dir::Right].take(),
        ) {
            (child, None) | (None, child) => {
                debug!("unlinking node with at most one child");
                (node.key, child)
            }
            (Some(left), Some(right)) => {
                // Two children: swap keys with the in-order successor (the leftmost node of the
                // right subtree), which has no left child, and unlink that node instead.
                debug!("substituting in-order successor");
                node.links[Dir::Left] = Some(left);
                let target = path.len();
                path.descend((node, Dir::Right));

                let mut heir = right;
                while let Some(next) = heir.links[Dir::Left].take() {
                    path.descend((heir, Dir::Left));
                    heir = next;
                }

                let (target, _) = path.get_mut(target).expect("Target was just pushed");
                mem::swap(&mut target.key, &mut heir.key);
                let replacement = heir.links[Dir::Right].take();
                (heir.key, replacement)
            }
        };

        self.root = self.reattach(path, replacement);
        self.len -= 1;
        Some(removed)
    }

    /// Unwinds `path`, hanging `child` and then each popped ancestor back onto its parent.
    /// Returns the new root.
    ///
    /// `child` starts as the subtree that replaced the unlinked node and is one level shorter
    /// than the subtree it replaced.
    fn reattach(&mut self, mut path: Stack<(Box<Node<K>>, Dir)>, mut child: Link<K>) -> Link<K> {
        let mut shorter = true;
        while let Some((mut parent, dir)) = path.pop() {
            parent.links[dir] = child;
            if shorter {
                parent.balance -= dir.sign();
                match parent.balance.abs() {
                    // Was taller on the `dir` side; now it's even and a level shorter.
                    0 => {}
                    // Was even; now leans away from `dir` but keeps its height.
                    1 => shorter = false,
                    _ => {
                        shorter = rotate::rebalance(&mut parent, !dir);
                        self.rotations += 1;
                    }
                }
            }
            child = Some(parent);
        }
        child
    }
}
