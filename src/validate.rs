//! Consistency checks. Nothing here runs during normal operation; it is for tests and for callers
//! who want to audit a tree.

use crate::node::{Dir, Node};
use crate::{InvariantViolation, Tree};

impl<K: Ord> Tree<K> {
    /// Checks every invariant the tree relies on and returns its height.
    ///
    /// * Keys are in order: everything left of a node is smaller and everything right of it is
    ///   larger. When duplicates are allowed, equal keys may sit on either side.
    /// * The subtrees of every node differ in height by at most one.
    /// * Every node's stored balance matches the heights of its subtrees.
    /// * [`Tree::len`] matches the number of nodes.
    ///
    /// This visits every node, so it costs `O(N)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = (0..10).collect();
    /// assert_eq!(tree.validate(), Ok(4));
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let mut checker = Checker {
            strict: !self.config.allows_duplicates(),
            count: 0,
        };
        let height = checker.check(self.root.as_deref(), None, None, 0)?;
        if checker.count != self.len {
            return Err(InvariantViolation::LenMismatch {
                reported: self.len,
                actual: checker.count,
            });
        }
        Ok(height)
    }

    /// Like [`Tree::validate`] but treats a violation as the bug it is.
    ///
    /// ## Panics
    ///
    /// When any invariant doesn't hold.
    pub fn assert_valid(&self) -> usize {
        match self.validate() {
            Ok(height) => height,
            Err(violation) => panic!("AVL tree invariant violated: {violation}"),
        }
    }
}

struct Checker {
    strict: bool,
    count: usize,
}

impl Checker {
    /// Checks the subtree rooted at `node`, whose keys must lie between `lower` and `upper`, and
    /// returns its height. Recursion is bounded by the height of the tree.
    fn check<K: Ord>(
        &mut self,
        node: Option<&Node<K>>,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
    ) -> Result<usize, InvariantViolation> {
        let Some(node) = node else {
            return Ok(0);
        };
        self.count += 1;

        let above_lower = lower.map_or(true, |lower| self.ordered(lower, &node.key));
        let below_upper = upper.map_or(true, |upper| self.ordered(&node.key, upper));
        if !(above_lower && below_upper) {
            return Err(InvariantViolation::Order { depth });
        }

        let left = self.check(node.child(Dir::Left), lower, Some(&node.key), depth + 1)?;
        let right = self.check(node.child(Dir::Right), Some(&node.key), upper, depth + 1)?;

        let actual = right as isize - left as isize;
        if actual.abs() > 1 {
            return Err(InvariantViolation::Unbalanced { depth, left, right });
        }
        if actual != isize::from(node.balance) {
            return Err(InvariantViolation::BalanceDrift {
                depth,
                stored: node.balance,
                actual,
            });
        }
        Ok(left.max(right) + 1)
    }

    fn ordered<K: Ord>(&self, smaller: &K, larger: &K) -> bool {
        if self.strict {
            smaller < larger
        } else {
            smaller <= larger
        }
    }
}
