//! Rotations and the rebalancing step built from them. These are the only functions that move
//! nodes to a different depth; insertion and deletion differ only in when they call
//! [`rebalance`].
//!
//! See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.

use log::trace;

use crate::node::{Dir, Node};

/// Rotates `root` toward `dir`. The child opposite `dir` takes `root`'s place and `root` becomes
/// its `dir` child. The grandchild in between moves across to be `root`'s new `!dir` child.
///
/// Balances are left alone; callers set them by case.
///
/// ## Panics
///
/// When `root` has no child opposite `dir`.
///
/// # Diagram
///
/// Rotating toward `Right`:
///
/// ```text
///       root                save
///      /    \              /    \
///    save    z   rotate-> x     root
///    /  \                       /  \
///   x    y                     y    z
/// ```
pub(crate) fn single<K>(root: &mut Box<Node<K>>, dir: Dir) {
    let mut save = root.links[!dir]
        .take()
        .expect("Rotation needs a child opposite its direction");
    root.links[!dir] = save.links[dir].take();
    std::mem::swap(root, &mut save);
    root.links[dir] = Some(save);
}

/// Rotates the child opposite `dir` toward `!dir`, then `root` toward `dir`. This lifts the
/// "inner" grandchild (`root.links[!dir].links[dir]`) two levels to take `root`'s place.
///
/// Balances are left alone; callers set them with [`adjust_before_double`] first.
///
/// ## Panics
///
/// When that inner grandchild doesn't exist.
///
/// # Diagram
///
/// Rotating toward `Left`:
///
/// ```text
///    root                          inner
///    /  \                         /     \
///   a   child     rotate->     root     child
///       /   \                  / \       / \
///    inner   d                a   b     c   d
///     / \
///    b   c
/// ```
pub(crate) fn double<K>(root: &mut Box<Node<K>>, dir: Dir) {
    let child = root.links[!dir]
        .as_mut()
        .expect("Double rotation needs a child opposite its direction");
    single(child, !dir);
    single(root, dir);
}

/// Sets the final balances of the three nodes a double rotation moves, using only their balances
/// before the rotation. `heavy` is the side of `root` that is two levels too tall.
fn adjust_before_double<K>(root: &mut Node<K>, heavy: Dir) {
    let s = heavy.sign();
    let root_balance = {
        let child = root.child_mut(heavy).expect("Heavy side has a child");
        let inner = child.child_mut(!heavy).expect("Double rotation => inner grandchild");
        let inner_balance = std::mem::replace(&mut inner.balance, 0);

        let (root_balance, child_balance) = if inner_balance == 0 {
            (0, 0)
        } else if inner_balance == s {
            (-s, 0)
        } else {
            (0, s)
        };
        child.balance = child_balance;
        root_balance
    };
    root.balance = root_balance;
}

/// Repairs `root`, whose `heavy` subtree is two levels taller than the other one, with a single
/// or double rotation. Returns whether the repaired subtree is one level shorter than it was
/// before the repair.
///
/// After an insertion the answer is always `true` and the subtree is back to its height before
/// the insert, which is why an insertion never needs a second rotation. After a deletion a
/// `true` means the parent lost a level too and must be checked next.
pub(crate) fn rebalance<K>(root: &mut Box<Node<K>>, heavy: Dir) -> bool {
    let s = heavy.sign();
    debug_assert_eq!(root.balance, 2 * s, "Rebalancing a node that isn't off by two");

    let child_balance = root.child(heavy).expect("Heavy side has a child").balance;
    let shortened = if child_balance == s {
        // The outer grandchild is the tall one: one rotation evens everything out.
        root.balance = 0;
        root.child_mut(heavy).expect("Heavy side has a child").balance = 0;
        single(root, !heavy);
        trace!("single rotation toward {:?}", !heavy);
        true
    } else if child_balance == -s {
        adjust_before_double(root, heavy);
        double(root, !heavy);
        trace!("double rotation toward {:?}", !heavy);
        true
    } else {
        // Only reachable after a deletion: both grandchildren are equally tall so the rotated
        // subtree keeps its height and leans the other way.
        root.balance = s;
        root.child_mut(heavy).expect("Heavy side has a child").balance = -s;
        single(root, !heavy);
        trace!("single rotation toward {:?}, height kept", !heavy);
        false
    };

    if cfg!(debug_assertions) {
        assert!(root.balance.abs() <= 1);
        for dir in [Dir::Left, Dir::Right] {
            if let Some(child) = root.child(dir) {
                assert!(child.balance.abs() <= 1);
            }
        }
    }
    shortened
}
