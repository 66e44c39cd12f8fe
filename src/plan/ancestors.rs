//! Upward walk collecting untracked ancestors.

use crate::oracle::TrackedOracle;
use crate::worktree::{EntryId, WorkTree};

/// Collect the untracked ancestors of `entry`, nearest first, stopping at
/// the first ancestor that is tracked or already present in the growing
/// candidate set. The boundary ancestor itself is never returned.
///
/// A walk that runs out of parents without meeting a boundary is
/// discarded whole: an untracked chain floating above the working copy is
/// not something to register as a side effect.
pub fn resolve_ancestors<F>(
    tree: &WorkTree,
    entry: EntryId,
    tracked: &dyn TrackedOracle,
    already_present: F,
) -> Vec<EntryId>
where
    F: Fn(EntryId) -> bool,
{
    let mut chain = Vec::new();
    let mut cursor = tree.parent(entry);
    loop {
        match cursor {
            None => return Vec::new(),
            Some(parent) => {
                if tracked.is_tracked(tree, parent) || already_present(parent) {
                    return chain;
                }
                chain.push(parent);
                cursor = tree.parent(parent);
            }
        }
    }
}
