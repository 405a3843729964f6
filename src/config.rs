//! Per-tree configuration. A [`Config`] is handed to [`Tree::with_config`][crate::Tree::with_config]
//! once and can't be changed for the lifetime of that tree.

/// What to do when inserting a key that compares equal to one already stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Duplicates {
    /// The insert is refused and reports `false`. The tree stores a set.
    #[default]
    Reject,
    /// Equal keys are stored side by side. New copies go to the greater side of existing ones,
    /// but rotations may later move an equal key to either side of its twin.
    Allow,
}

/// Settings fixed at tree construction.
///
/// # Examples
///
/// ```
/// use avl::{Config, Duplicates, Tree};
///
/// let mut tree = Tree::with_config(Config::new().allow_duplicates());
/// assert_eq!(tree.config().duplicates(), Duplicates::Allow);
///
/// assert!(tree.insert(1));
/// assert!(tree.insert(1));
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config {
    duplicates: Duplicates,
}

impl Config {
    /// The default configuration: duplicate keys are rejected.
    pub const fn new() -> Self {
        Self {
            duplicates: Duplicates::Reject,
        }
    }

    /// Sets the duplicate-key policy.
    pub const fn duplicates_policy(mut self, duplicates: Duplicates) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Shorthand for `duplicates_policy(Duplicates::Allow)`.
    pub const fn allow_duplicates(self) -> Self {
        self.duplicates_policy(Duplicates::Allow)
    }

    /// The configured duplicate-key policy.
    pub const fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    pub(crate) fn allows_duplicates(&self) -> bool {
        self.duplicates == Duplicates::Allow
    }
}
