//! JSON report rendering.

use crate::domain::PlanStats;
use crate::plan::{Forest, NodeId};
use crate::worktree::WorkTree;
use anyhow::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};

const SCHEMA_VERSION: &str = "1.0.0";

/// Report rendering options.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Suppress the `generated_at` timestamp (for reproducible output).
    pub no_timestamp: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    schema_version: &'static str,
    root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    stats: &'a PlanStats,
    roots: Vec<ReportNode>,
}

#[derive(Serialize)]
struct ReportNode {
    id: String,
    path: String,
    kind: &'static str,
    included: bool,
    children: Vec<ReportNode>,
}

/// Render the planned forest as a pretty-printed JSON report.
pub fn render_report(
    tree: &WorkTree,
    forest: &Forest,
    stats: &PlanStats,
    options: &ReportOptions,
) -> Result<String> {
    let report = Report {
        schema_version: SCHEMA_VERSION,
        root: tree.root_path().display().to_string(),
        generated_at: if options.no_timestamp {
            None
        } else {
            Some(chrono::Utc::now().to_rfc3339())
        },
        stats,
        roots: forest.roots().iter().map(|&id| build_node(tree, forest, id)).collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn build_node(tree: &WorkTree, forest: &Forest, id: NodeId) -> ReportNode {
    let node = forest.node(id);
    let path = tree.path(node.entry).to_string();
    ReportNode {
        id: stable_id(&path),
        kind: if tree.is_dir(node.entry) { "directory" } else { "file" },
        included: node.included,
        children: node.children.iter().map(|&c| build_node(tree, forest, c)).collect(),
        path,
    }
}

/// Stable id for a relative path: sha256, first 16 hex chars.
fn stable_id(rel_path: &str) -> String {
    let hash = Sha256::digest(rel_path.as_bytes());
    format!("{:x}", hash)[..16].to_string()
}
