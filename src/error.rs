use std::alloc::Layout;

use thiserror::Error;

/// Failures a caller can recover from. Duplicate keys and missing keys aren't errors; they are
/// reported as `false` by [`Tree::insert`][crate::Tree::insert] and
/// [`Tree::remove`][crate::Tree::remove].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The allocator couldn't provide memory for a new node. The tree is exactly as it was
    /// before the call.
    #[error("failed to allocate {} bytes for a tree node", .layout.size())]
    Alloc {
        /// The layout that was requested.
        layout: Layout,
    },
}

/// A broken tree invariant found by [`Tree::validate`][crate::Tree::validate]. Seeing one of
/// these means the tree has a bug, not that the caller misused it.
///
/// Depths count from the root, which is at depth 0.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A key sits on the wrong side of one of its ancestors.
    #[error("key at depth {depth} is out of order with its ancestors")]
    Order {
        /// Depth of the misplaced node.
        depth: usize,
    },
    /// The two subtrees of a node differ in height by more than one.
    #[error("node at depth {depth} has subtrees of height {left} and {right}")]
    Unbalanced {
        /// Depth of the node.
        depth: usize,
        /// Height of the left subtree.
        left: usize,
        /// Height of the right subtree.
        right: usize,
    },
    /// The stored balance indicator doesn't match the shape of the subtree.
    #[error("node at depth {depth} stores balance {stored} but its subtrees differ by {actual}")]
    BalanceDrift {
        /// Depth of the node.
        depth: usize,
        /// The indicator held by the node.
        stored: i8,
        /// `height(right) - height(left)` as measured.
        actual: isize,
    },
    /// The cached key count doesn't match the number of nodes.
    #[error("tree reports {reported} keys but holds {actual}")]
    LenMismatch {
        /// What [`Tree::len`][crate::Tree::len] reports.
        reported: usize,
        /// What was counted.
        actual: usize,
    },
}
