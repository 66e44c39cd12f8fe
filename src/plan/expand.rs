//! Recursive expansion of a selected entry.

use crate::oracle::AdminMatcher;
use crate::worktree::{EntryId, WorkTree};

/// Expand `entry` into itself plus all reachable descendants, admin
/// directories and their contents excluded.
///
/// The descent runs on an explicit work stack so pathologically deep
/// trees cannot exhaust the call stack. A directory with no enumerable
/// children is simply a leaf. Order follows the snapshot (parents before
/// children, siblings by name); the caller imposes the final ordering.
pub fn expand(tree: &WorkTree, entry: EntryId, admin: &AdminMatcher) -> Vec<EntryId> {
    if admin.is_admin(tree, entry) {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut stack = vec![entry];
    while let Some(id) = stack.pop() {
        out.push(id);
        if tree.is_dir(id) {
            for &child in tree.children(id).iter().rev() {
                if !admin.matches_entry(tree, child) {
                    stack.push(child);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_expand_includes_entry_and_descendants() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir_all(root.join("src/nested")).expect("mkdirs");
        fs::write(root.join("src/a.rs"), "").expect("write");
        fs::write(root.join("src/nested/b.rs"), "").expect("write");

        let tree = WorkTree::load(root, false).expect("snapshot");
        let admin = AdminMatcher::new("CVS");
        let src = tree.find("src").expect("src");

        let expanded = expand(&tree, src, &admin);
        let paths: Vec<&str> = expanded.iter().map(|&id| tree.path(id)).collect();
        assert_eq!(paths, vec!["src", "src/a.rs", "src/nested", "src/nested/b.rs"]);
    }

    #[test]
    fn test_expand_skips_admin_directories() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir_all(root.join("src/CVS")).expect("mkdirs");
        fs::write(root.join("src/CVS/Entries"), "").expect("write");
        fs::write(root.join("src/a.txt"), "").expect("write");

        let tree = WorkTree::load(root, false).expect("snapshot");
        let admin = AdminMatcher::new("CVS");
        let src = tree.find("src").expect("src");

        let expanded = expand(&tree, src, &admin);
        let paths: Vec<&str> = expanded.iter().map(|&id| tree.path(id)).collect();
        assert_eq!(paths, vec!["src", "src/a.txt"]);
    }

    #[test]
    fn test_expand_of_admin_entry_contributes_nothing() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir(root.join("CVS")).expect("mkdir");
        fs::write(root.join("CVS/Entries"), "").expect("write");

        let tree = WorkTree::load(root, false).expect("snapshot");
        let admin = AdminMatcher::new("CVS");

        assert!(expand(&tree, tree.find("CVS").expect("CVS"), &admin).is_empty());
        assert!(expand(&tree, tree.find("CVS/Entries").expect("Entries"), &admin).is_empty());
    }

    #[test]
    fn test_expand_of_file_is_just_the_file() {
        let tmp = TempDir::new().expect("tmp dir");
        fs::write(tmp.path().join("f.txt"), "x").expect("write");

        let tree = WorkTree::load(tmp.path(), false).expect("snapshot");
        let admin = AdminMatcher::new("CVS");
        let f = tree.find("f.txt").expect("f.txt");
        assert_eq!(expand(&tree, f, &admin), vec![f]);
    }

    #[test]
    fn test_expand_handles_deep_nesting() {
        let tmp = TempDir::new().expect("tmp dir");
        let mut path = tmp.path().to_path_buf();
        for _ in 0..300 {
            path.push("d");
        }
        fs::create_dir_all(&path).expect("deep mkdirs");

        let tree = WorkTree::load(tmp.path(), false).expect("snapshot");
        let admin = AdminMatcher::new("CVS");
        let top = tree.find("d").expect("top of chain");
        assert_eq!(expand(&tree, top, &admin).len(), 300);
    }
}
