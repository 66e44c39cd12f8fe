//! Add-candidate planning.
//!
//! Given a selection of working-copy entries, compute the complete,
//! minimal, correctly-ordered set of paths that must be registered with
//! the VCS, arranged as a forest of top-level roots with their subtrees:
//!
//! 1. Each selection is expanded into itself plus all non-metadata
//!    descendants, and its untracked ancestors are pulled in when (and
//!    only when) a tracked or already-collected boundary exists above.
//! 2. The merged, deduplicated candidates are sorted by path and
//!    assembled into a forest; entries matched by ignore rules stay in
//!    the tree with `included = false`.
//!
//! The planner is synchronous and pure given its oracles: it performs no
//! filesystem mutation and issues no VCS commands.

pub mod ancestors;
pub mod builder;
pub mod expand;
pub mod forest;

pub use ancestors::resolve_ancestors;
pub use builder::collect_candidates;
pub use expand::expand;
pub use forest::{assemble, Forest, NodeId, TreeNode};

use crate::domain::PlanStats;
use crate::oracle::{AdminMatcher, IgnoreOracle, TrackedOracle};
use crate::worktree::{EntryId, WorkTree};
use thiserror::Error;
use tracing::error;

/// Defect-class failures of the planner.
///
/// These indicate a bug, not bad user input: given the documented
/// invariants they cannot occur.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The candidate collection was non-empty but no node survived as a
    /// forest root, which would mean every candidate has a candidate
    /// parent; impossible in a finite hierarchy.
    #[error("{candidates} candidates produced no forest roots")]
    NoRoots { candidates: usize },
}

/// Result of one planning run.
pub struct Plan {
    pub forest: Forest,
    pub stats: PlanStats,
}

impl Plan {
    /// True when there is nothing to register: the caller treats this as
    /// a completed no-op.
    pub fn is_noop(&self) -> bool {
        self.forest.is_empty()
    }
}

/// Run the full pipeline: candidate collection, then forest assembly.
pub fn plan_additions(
    tree: &WorkTree,
    selection: &[EntryId],
    tracked: &dyn TrackedOracle,
    ignored: &dyn IgnoreOracle,
    admin: &AdminMatcher,
) -> Result<Plan, PlanError> {
    let mut stats = PlanStats::default();
    let candidates = collect_candidates(tree, selection, tracked, admin, &mut stats);

    if candidates.is_empty() {
        return Ok(Plan { forest: Forest::default(), stats });
    }

    let forest = assemble(tree, &candidates, ignored);
    if forest.roots().is_empty() {
        error!("Parent linking defect: {} candidates, zero roots", candidates.len());
        return Err(PlanError::NoRoots { candidates: candidates.len() });
    }

    stats.ignored_flagged = forest.iter().filter(|&id| !forest.node(id).included).count();
    Ok(Plan { forest, stats })
}
