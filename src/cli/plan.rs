//! Plan command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::utils::parse_csv;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::oracle::{AdminMatcher, EntriesOracle, IgnoreRules};
use crate::plan::plan_additions;
use crate::render::{render_forest, render_report, ReportOptions};
use crate::utils::normalize_path;
use crate::worktree::{EntryId, WorkTree};

#[derive(Args)]
pub struct PlanArgs {
    /// Paths to add (files or directories inside the working copy)
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Working-copy root directory
    #[arg(short = 'r', long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text",
          value_parser = ["text", "json", "list"])]
    pub format: String,

    /// Config file path (default: auto-discovered at the root)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name of the VCS metadata directory
    #[arg(long, value_name = "NAME")]
    pub admin_dir: Option<String>,

    /// Ignore per-directory .cvsignore files
    #[arg(long)]
    pub no_cvsignore: bool,

    /// Disable the built-in file-type ignore patterns
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Additional ignore patterns (comma-separated, gitignore syntax)
    #[arg(short = 'i', long, value_name = "GLOBS")]
    pub ignore_pattern: Option<String>,

    /// Follow symbolic links when snapshotting
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Omit the timestamp from JSON output
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: PlanArgs) -> Result<()> {
    let root = args
        .root
        .canonicalize()
        .with_context(|| format!("Failed to resolve root: {}", args.root.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Root is not a directory: {}", root.display());
    }

    let config = load_config(&root, args.config.as_deref())?;
    let overrides = CliOverrides {
        admin_dir: args.admin_dir.clone(),
        use_cvsignore: args.no_cvsignore.then_some(false),
        use_default_ignores: args.no_default_ignores.then_some(false),
        ignore_patterns: parse_csv(&args.ignore_pattern),
        follow_symlinks: args.follow_symlinks.then_some(true),
    };
    let config = merge_cli_with_config(config, overrides);

    let tree = WorkTree::load(&root, config.follow_symlinks)?;

    let mut selection = Vec::with_capacity(args.paths.len());
    for path in &args.paths {
        selection.push(resolve_selection(&tree, &root, path)?);
    }

    let admin = AdminMatcher::new(config.admin_dir.clone());
    let tracked = EntriesOracle::load(&tree, &admin);
    let ignored = IgnoreRules::load(&tree, &config)?;

    let plan = plan_additions(&tree, &selection, &tracked, &ignored, &admin)
        .context("Planner invariant violated")?;

    if plan.is_noop() {
        println!("Nothing to add.");
        return Ok(());
    }

    match args.format.as_str() {
        "json" => {
            let options = ReportOptions { no_timestamp: args.no_timestamp };
            println!("{}", render_report(&tree, &plan.forest, &plan.stats, &options)?);
        }
        "list" => {
            for path in plan.forest.included_paths(&tree) {
                println!("{}", path);
            }
        }
        _ => {
            println!("{}", render_forest(&tree, &plan.forest));
            let included = plan.stats.candidates - plan.stats.ignored_flagged;
            println!();
            println!(
                "{} entries to add ({} ignored)",
                included, plan.stats.ignored_flagged
            );
        }
    }

    Ok(())
}

/// Map a user-supplied path onto its snapshot entry.
fn resolve_selection(tree: &WorkTree, root: &Path, raw: &Path) -> Result<EntryId> {
    let absolute = if raw.is_absolute() { raw.to_path_buf() } else { root.join(raw) };
    let absolute = absolute
        .canonicalize()
        .with_context(|| format!("No such path: {}", raw.display()))?;
    let rel = absolute
        .strip_prefix(root)
        .map_err(|_| anyhow::anyhow!("Path is outside the working copy: {}", raw.display()))?;
    let key = normalize_path(&rel.to_string_lossy());
    tree.find(&key)
        .ok_or_else(|| anyhow::anyhow!("Path not present in the snapshot: {}", raw.display()))
}
