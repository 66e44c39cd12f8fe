//! Candidate set construction across all selections.

use crate::domain::PlanStats;
use crate::oracle::{AdminMatcher, TrackedOracle};
use crate::plan::ancestors::resolve_ancestors;
use crate::plan::expand::expand;
use crate::worktree::{EntryId, WorkTree};
use std::collections::HashSet;
use tracing::debug;

/// Build the flat, deduplicated candidate collection for `selection`,
/// sorted lexicographically by path.
///
/// Per selection, the ancestor chain is merged first (so later walks can
/// treat freshly added ancestors as boundaries), then the recursive
/// expansion of the selection itself. Adding an entry twice is a no-op.
/// Metadata selections and selections the VCS already knows contribute
/// nothing. An empty selection yields an empty result.
pub fn collect_candidates(
    tree: &WorkTree,
    selection: &[EntryId],
    tracked: &dyn TrackedOracle,
    admin: &AdminMatcher,
    stats: &mut PlanStats,
) -> Vec<EntryId> {
    let mut seen: HashSet<EntryId> = HashSet::new();
    let mut candidates: Vec<EntryId> = Vec::new();
    stats.selections = selection.len();

    for &selected in selection {
        if admin.is_admin(tree, selected) {
            debug!("Skipping metadata selection: {}", tree.path(selected));
            stats.admin_skipped += 1;
            continue;
        }
        if tracked.is_tracked(tree, selected) {
            debug!("Skipping already-tracked selection: {}", tree.path(selected));
            stats.tracked_skipped += 1;
            continue;
        }

        let chain = resolve_ancestors(tree, selected, tracked, |id| seen.contains(&id));
        for ancestor in chain {
            if seen.insert(ancestor) {
                candidates.push(ancestor);
                stats.ancestors_added += 1;
            }
        }

        for id in expand(tree, selected, admin) {
            if seen.insert(id) {
                candidates.push(id);
            }
        }
    }

    candidates.sort_by(|&a, &b| tree.path(a).cmp(tree.path(b)));
    stats.candidates = candidates.len();
    candidates
}
