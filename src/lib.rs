//! This crate provides a height-balanced Binary Search Tree (an AVL tree) of ordered keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)`. Inserting keys in sorted order
//! into a plain BST makes it degenerate into a list, so `height` becomes `N`.
//!
//! ## AVL trees
//!
//! An AVL tree adds a third invariant:
//!
//! 3. For every `Node`, the heights of its two subtrees differ by at most one.
//!
//! This keeps the height below `1.44 lg(N + 2)`. Each node stores a balance
//! of `-1`, `0` or `1` (the height of its right subtree minus the height of
//! its left subtree), and insertions and deletions repair any node that
//! drifts to `±2` with a rotation. An insertion needs at most one rotation; a
//! deletion may need one per level.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//! for key in 0..10 {
//!     tree.insert(key);
//! }
//!
//! // Inserting in order doesn't make the tree degenerate.
//! assert_eq!(tree.height(), 4);
//!
//! assert!(tree.remove(&3));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 4, 5, 6, 7, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod config;
mod error;
mod insert;
mod iter;
mod node;
mod remove;
mod rotate;
mod stack;
mod tree;
mod validate;

#[cfg(test)]
mod test;

pub use config::{Config, Duplicates};
pub use error::{Error, InvariantViolation};
pub use iter::{Cursor, IntoIter, Iter};
pub use tree::Tree;
