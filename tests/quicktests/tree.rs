use avl::{Config, Tree};

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    ops.iter().all(|op| {
        let agreed = match op {
            Op::Insert(k) => tree.insert(k.clone()) == set.insert(k.clone()),
            Op::Remove(k) => tree.remove(k) == set.remove(k),
        };
        agreed && tree.validate().is_ok()
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && set.iter().all(|key| tree.contains(key))
        && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.validate().is_ok()
}

#[quickcheck]
fn traversal_is_strictly_increasing(xs: Vec<i16>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.into_iter().collect();
    let keys: Vec<_> = tree.iter().collect();

    keys.len() == tree.len() && keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn height_stays_logarithmic(xs: Vec<u16>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.into_iter().collect();
    let bound = ((tree.len() as f64 + 1.0).log2() * 1.4405).ceil() as usize;

    tree.height() <= bound && tree.validate() == Ok(tree.height())
}

#[quickcheck]
fn duplicates_allowed_counts_match(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::with_config(Config::new().allow_duplicates());
    let mut counts: BTreeMap<i8, usize> = BTreeMap::new();

    for op in &ops {
        match op {
            Op::Insert(k) => {
                if !tree.insert(*k) {
                    return false;
                }
                *counts.entry(*k).or_default() += 1;
            }
            Op::Remove(k) => {
                let expected = match counts.get_mut(k) {
                    Some(count) => {
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(k);
                        }
                        true
                    }
                    None => false,
                };
                if tree.remove(k) != expected {
                    return false;
                }
            }
        }
        if tree.validate().is_err() {
            return false;
        }
    }

    let expected: Vec<i8> = counts
        .iter()
        .flat_map(|(k, n)| std::iter::repeat(*k).take(*n))
        .collect();
    tree.into_iter().eq(expected)
}

#[quickcheck]
fn cursor_matches_iter(xs: Vec<i8>, steps: Vec<bool>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.into_iter().collect();
    let keys: Vec<_> = tree.iter().copied().collect();
    if keys.is_empty() {
        return tree.cursor().first().is_none();
    }

    // Walk back and forth, tracking where we should be.
    let mut cursor = tree.cursor();
    let mut index: usize = 0;
    if cursor.first() != Some(&keys[0]) {
        return false;
    }
    for forward in steps {
        let (key, next_index) = if forward {
            (cursor.next(), index + 1)
        } else {
            (cursor.prev(), index.wrapping_sub(1))
        };
        match keys.get(next_index) {
            Some(expected) if key == Some(expected) => index = next_index,
            // Fell off an end; start again from the front.
            None if key.is_none() => {
                cursor.first();
                index = 0;
            }
            _ => return false,
        }
    }
    true
}
