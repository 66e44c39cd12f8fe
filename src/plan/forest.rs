//! Forest assembly from the flat candidate collection.

use crate::oracle::IgnoreOracle;
use crate::worktree::{EntryId, WorkTree};
use std::collections::HashMap;

/// Index of a node in a [`Forest`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One candidate in the assembled forest.
///
/// `children` owns the subtree; `parent` is a plain index back-reference
/// used for root pruning and chain tests, never for ownership.
#[derive(Debug)]
pub struct TreeNode {
    pub entry: EntryId,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// False when ignore rules exclude this entry from the add command.
    /// The node stays in the tree either way: ignored items are shown,
    /// not silently dropped.
    pub included: bool,
}

/// The assembled forest: one arena of nodes plus the top-level roots.
#[derive(Debug, Default)]
pub struct Forest {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
}

impl Forest {
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Total node count.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in arena order (one per candidate).
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Depth-first list of included entry paths, the list an add-command
    /// dispatcher consumes. Traversal prunes at excluded nodes: an
    /// ignored directory's contents are not emitted behind its back.
    pub fn included_paths(&self, tree: &WorkTree) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if !node.included {
                continue;
            }
            out.push(tree.path(node.entry).to_string());
            for &child in node.children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }
}

/// Assemble the candidate collection into a forest.
///
/// Each candidate becomes one node; a node is linked under its parent
/// exactly when the parent entry is itself a candidate; roots are the
/// unlinked remainder. Roots and every sibling list are sorted
/// lexicographically by path, once, after linking.
pub fn assemble(tree: &WorkTree, candidates: &[EntryId], ignored: &dyn IgnoreOracle) -> Forest {
    let mut nodes: Vec<TreeNode> = Vec::with_capacity(candidates.len());
    let mut by_entry: HashMap<EntryId, NodeId> = HashMap::with_capacity(candidates.len());

    for (i, &entry) in candidates.iter().enumerate() {
        let id = NodeId(i as u32);
        nodes.push(TreeNode {
            entry,
            parent: None,
            children: Vec::new(),
            included: !ignored.is_ignored(tree, entry),
        });
        by_entry.insert(entry, id);
    }

    for (i, &entry) in candidates.iter().enumerate() {
        let id = NodeId(i as u32);
        let Some(parent_entry) = tree.parent(entry) else {
            continue;
        };
        if let Some(&parent_id) = by_entry.get(&parent_entry) {
            nodes[id.index()].parent = Some(parent_id);
            nodes[parent_id.index()].children.push(id);
        }
    }

    let mut roots: Vec<NodeId> = (0..nodes.len() as u32)
        .map(NodeId)
        .filter(|id| nodes[id.index()].parent.is_none())
        .collect();

    roots.sort_by(|a, b| tree.path(nodes[a.index()].entry).cmp(tree.path(nodes[b.index()].entry)));
    for i in 0..nodes.len() {
        let mut children = std::mem::take(&mut nodes[i].children);
        children
            .sort_by(|a, b| tree.path(nodes[a.index()].entry).cmp(tree.path(nodes[b.index()].entry)));
        nodes[i].children = children;
    }

    Forest { nodes, roots }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worktree::WorkTree;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    struct FakeIgnore(HashSet<EntryId>);

    impl IgnoreOracle for FakeIgnore {
        fn is_ignored(&self, _tree: &WorkTree, id: EntryId) -> bool {
            self.0.contains(&id)
        }
    }

    fn node_paths<'t>(tree: &'t WorkTree, forest: &Forest, ids: &[NodeId]) -> Vec<&'t str> {
        ids.iter().map(|&id| tree.path(forest.node(id).entry)).collect()
    }

    #[test]
    fn test_child_of_candidate_parent_is_not_a_root() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir(root.join("x")).expect("mkdir");
        fs::write(root.join("x/y"), "").expect("write");

        let tree = WorkTree::load(root, false).expect("snapshot");
        let x = tree.find("x").expect("x");
        let y = tree.find("x/y").expect("y");

        let forest = assemble(&tree, &[x, y], &FakeIgnore(HashSet::new()));
        assert_eq!(node_paths(&tree, &forest, forest.roots()), vec!["x"]);
        let x_node = forest.node(forest.roots()[0]);
        assert_eq!(node_paths(&tree, &forest, &x_node.children), vec!["x/y"]);
        let y_node = forest.node(x_node.children[0]);
        assert_eq!(y_node.parent, Some(forest.roots()[0]));
    }

    #[test]
    fn test_unrelated_candidates_are_separate_roots_in_path_order() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::write(root.join("zeta.txt"), "").expect("write");
        fs::write(root.join("alpha.txt"), "").expect("write");

        let tree = WorkTree::load(root, false).expect("snapshot");
        let zeta = tree.find("zeta.txt").expect("zeta");
        let alpha = tree.find("alpha.txt").expect("alpha");

        // Candidate order deliberately unsorted; assembly sorts the roots.
        let forest = assemble(&tree, &[zeta, alpha], &FakeIgnore(HashSet::new()));
        assert_eq!(node_paths(&tree, &forest, forest.roots()), vec!["alpha.txt", "zeta.txt"]);
    }

    #[test]
    fn test_ignored_node_stays_in_parent_children() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir(root.join("d")).expect("mkdir");
        fs::write(root.join("d/keep.txt"), "").expect("write");
        fs::write(root.join("d/skip.log"), "").expect("write");

        let tree = WorkTree::load(root, false).expect("snapshot");
        let d = tree.find("d").expect("d");
        let keep = tree.find("d/keep.txt").expect("keep");
        let skip = tree.find("d/skip.log").expect("skip");

        let forest = assemble(&tree, &[d, keep, skip], &FakeIgnore(HashSet::from([skip])));
        let d_node = forest.node(forest.roots()[0]);
        assert_eq!(node_paths(&tree, &forest, &d_node.children), vec!["d/keep.txt", "d/skip.log"]);

        let skip_node = forest.node(d_node.children[1]);
        assert!(!skip_node.included, "ignored entry is flagged, not removed");
        assert!(forest.node(d_node.children[0]).included);
    }

    #[test]
    fn test_included_paths_prunes_at_excluded_nodes() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir(root.join("gen")).expect("mkdir");
        fs::write(root.join("gen/out.rs"), "").expect("write");
        fs::write(root.join("main.rs"), "").expect("write");

        let tree = WorkTree::load(root, false).expect("snapshot");
        let gen = tree.find("gen").expect("gen");
        let out = tree.find("gen/out.rs").expect("out");
        let main = tree.find("main.rs").expect("main");

        let forest = assemble(&tree, &[gen, out, main], &FakeIgnore(HashSet::from([gen])));
        assert_eq!(forest.included_paths(&tree), vec!["main.rs"]);
    }

    #[test]
    fn test_empty_candidates_assemble_to_empty_forest() {
        let tmp = TempDir::new().expect("tmp dir");
        let tree = WorkTree::load(tmp.path(), false).expect("snapshot");
        let forest = assemble(&tree, &[], &FakeIgnore(HashSet::new()));
        assert!(forest.is_empty());
        assert!(forest.roots().is_empty());
    }
}
