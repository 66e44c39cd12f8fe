//! Injected capabilities consumed by the planner.
//!
//! Tracked status, ignore status, and admin-path detection are passed into
//! the core as explicit parameters so tests can substitute deterministic
//! fakes. The shipped implementations live in the submodules.

pub mod entries;
pub mod ignore;

pub use entries::EntriesOracle;
pub use ignore::IgnoreRules;

use crate::worktree::{EntryId, WorkTree};

/// Whether the VCS already knows a path.
pub trait TrackedOracle {
    fn is_tracked(&self, tree: &WorkTree, id: EntryId) -> bool;
}

/// Whether ignore rules exclude a path from the add command.
pub trait IgnoreOracle {
    fn is_ignored(&self, tree: &WorkTree, id: EntryId) -> bool;
}

/// Recognizes the VCS metadata directory by name, at any depth.
#[derive(Debug, Clone)]
pub struct AdminMatcher {
    dir_name: String,
}

impl AdminMatcher {
    pub fn new(dir_name: impl Into<String>) -> Self {
        Self { dir_name: dir_name.into() }
    }

    /// True when the entry itself is an admin directory.
    pub fn matches_entry(&self, tree: &WorkTree, id: EntryId) -> bool {
        tree.is_dir(id) && tree.name(id) == self.dir_name
    }

    /// True when the entry or any ancestor is an admin directory.
    pub fn is_admin(&self, tree: &WorkTree, id: EntryId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if self.matches_entry(tree, current) {
                return true;
            }
            cursor = tree.parent(current);
        }
        false
    }

    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_admin_matcher_recognizes_dir_at_any_depth() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir_all(root.join("src/CVS")).expect("mkdirs");
        fs::write(root.join("src/CVS/Entries"), "").expect("write");
        fs::write(root.join("src/main.rs"), "").expect("write");

        let tree = WorkTree::load(root, false).expect("snapshot");
        let admin = AdminMatcher::new("CVS");

        let cvs = tree.find("src/CVS").expect("CVS dir");
        let entries = tree.find("src/CVS/Entries").expect("Entries file");
        let main = tree.find("src/main.rs").expect("main.rs");

        assert!(admin.matches_entry(&tree, cvs));
        assert!(admin.is_admin(&tree, cvs));
        // Files inside the admin directory inherit admin status.
        assert!(admin.is_admin(&tree, entries));
        assert!(!admin.is_admin(&tree, main));
    }

    #[test]
    fn test_admin_matcher_requires_directory_kind() {
        let tmp = TempDir::new().expect("tmp dir");
        // A plain file that happens to carry the admin name.
        fs::write(tmp.path().join("CVS"), "not a dir").expect("write");

        let tree = WorkTree::load(tmp.path(), false).expect("snapshot");
        let admin = AdminMatcher::new("CVS");
        let file = tree.find("CVS").expect("CVS file");
        assert!(!admin.matches_entry(&tree, file));
        assert!(!admin.is_admin(&tree, file));
    }
}
