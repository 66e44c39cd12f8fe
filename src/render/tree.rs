//! Text rendering of the planned forest.

use crate::plan::{Forest, NodeId};
use crate::worktree::WorkTree;

const IGNORED_MARKER: &str = " (ignored)";

/// Render the forest as an indented tree, one block per root.
///
/// Roots print their full relative path; descendants print their names.
/// Directories carry a `/` suffix; entries excluded by ignore rules are
/// marked, never hidden.
pub fn render_forest(tree: &WorkTree, forest: &Forest) -> String {
    let mut lines = Vec::new();
    for &root in forest.roots() {
        lines.push(format!("{}{}", tree.path(forest.node(root).entry), decorations(tree, forest, root)));
        render_children(tree, forest, root, "", &mut lines);
    }
    lines.join("\n")
}

fn decorations(tree: &WorkTree, forest: &Forest, id: NodeId) -> String {
    let node = forest.node(id);
    let mut out = String::new();
    if tree.is_dir(node.entry) {
        out.push('/');
    }
    if !node.included {
        out.push_str(IGNORED_MARKER);
    }
    out
}

fn render_children(
    tree: &WorkTree,
    forest: &Forest,
    parent: NodeId,
    prefix: &str,
    lines: &mut Vec<String>,
) {
    let children = &forest.node(parent).children;
    let total = children.len();
    for (idx, &child) in children.iter().enumerate() {
        let is_last = idx == total - 1;
        let connector = if is_last { "└── " } else { "├── " };
        let name = tree.name(forest.node(child).entry);
        lines.push(format!("{}{}{}{}", prefix, connector, name, decorations(tree, forest, child)));

        let extension = if is_last { "    " } else { "│   " };
        render_children(tree, forest, child, &format!("{}{}", prefix, extension), lines);
    }
}
