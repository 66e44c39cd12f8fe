//! Tracked-status oracle backed by CVS `Entries` registries.
//!
//! Every admin directory carries an `Entries` file listing the entries of
//! its parent directory: `/name/rev/date/opts/tag` lines for files and
//! `D/name////` lines for subdirectories. An entry is tracked when its
//! parent directory's registry lists it. The working-copy root has no
//! parent registry inside the snapshot; it counts as tracked when it
//! carries its own admin directory.

use crate::oracle::{AdminMatcher, TrackedOracle};
use crate::worktree::{EntryId, WorkTree};
use std::collections::HashSet;
use std::fs;
use tracing::debug;

/// Eagerly built tracked set over one snapshot.
pub struct EntriesOracle {
    tracked: HashSet<EntryId>,
    registries: usize,
}

impl EntriesOracle {
    /// Scan the snapshot for admin directories and parse their registries.
    ///
    /// A missing or unreadable `Entries` file means "nothing registered";
    /// malformed lines are skipped. The registry is advisory, never an error.
    pub fn load(tree: &WorkTree, admin: &AdminMatcher) -> Self {
        let mut tracked = HashSet::new();
        let mut registries = 0;

        let root = tree.root();
        let dirs = std::iter::once(root).chain(tree.iter().filter(|&id| tree.is_dir(id)));
        for dir in dirs {
            if admin.is_admin(tree, dir) {
                continue;
            }
            let Some(admin_child) = tree
                .children(dir)
                .iter()
                .copied()
                .find(|&c| admin.matches_entry(tree, c))
            else {
                continue;
            };

            if dir == root {
                tracked.insert(root);
            }

            let registry_path = tree.abs_path(admin_child).join("Entries");
            let content = match fs::read_to_string(&registry_path) {
                Ok(content) => content,
                Err(err) => {
                    debug!("No readable registry at {}: {}", registry_path.display(), err);
                    continue;
                }
            };
            registries += 1;

            for name in parse_registry(&content) {
                if let Some(child) = tree.child_named(dir, &name) {
                    tracked.insert(child);
                }
            }
        }

        Self { tracked, registries }
    }

    /// Number of registries successfully read.
    pub fn registry_count(&self) -> usize {
        self.registries
    }

    /// Number of snapshot entries known to the VCS.
    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }
}

impl TrackedOracle for EntriesOracle {
    fn is_tracked(&self, _tree: &WorkTree, id: EntryId) -> bool {
        self.tracked.contains(&id)
    }
}

/// Extract registered names from one `Entries` file.
fn parse_registry(content: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in content.lines() {
        let line = line.trim_end();
        let rest = if let Some(rest) = line.strip_prefix("D/") {
            rest
        } else if let Some(rest) = line.strip_prefix('/') {
            rest
        } else {
            // Bare "D" marker or junk.
            continue;
        };
        let Some((name, _)) = rest.split_once('/') else {
            continue;
        };
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    names
}
