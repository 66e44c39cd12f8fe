//! Info command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::oracle::{AdminMatcher, EntriesOracle, IgnoreOracle, IgnoreRules, TrackedOracle};
use crate::utils::format_with_commas;
use crate::worktree::WorkTree;

#[derive(Args)]
pub struct InfoArgs {
    /// Working-copy root directory to inspect
    #[arg(value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Config file path (default: auto-discovered at the root)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name of the VCS metadata directory
    #[arg(long, value_name = "NAME")]
    pub admin_dir: Option<String>,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let root = args.root.canonicalize()?;
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let config = load_config(&root, args.config.as_deref())?;
    let overrides = CliOverrides { admin_dir: args.admin_dir.clone(), ..CliOverrides::default() };
    let config = merge_cli_with_config(config, overrides);

    let tree = WorkTree::load(&root, config.follow_symlinks)?;
    let admin = AdminMatcher::new(config.admin_dir.clone());
    let tracked = EntriesOracle::load(&tree, &admin);
    let ignored = IgnoreRules::load(&tree, &config)?;

    let name = root.file_name().and_then(|n| n.to_str()).unwrap_or("");
    println!("Working copy: {}", name);
    println!("Metadata directory: {}", admin.dir_name());
    println!(
        "Root tracked: {}",
        if tracked.is_tracked(&tree, tree.root()) { "yes" } else { "no" }
    );

    let mut files = 0usize;
    let mut dirs = 0usize;
    let mut admin_entries = 0usize;
    let mut ignored_count = 0usize;
    for id in tree.iter() {
        if admin.is_admin(&tree, id) {
            admin_entries += 1;
            continue;
        }
        if tree.is_dir(id) {
            dirs += 1;
        } else {
            files += 1;
        }
        if ignored.is_ignored(&tree, id) {
            ignored_count += 1;
        }
    }

    println!("Statistics:");
    println!("  Files: {}", format_with_commas(files as u64));
    println!("  Directories: {}", format_with_commas(dirs as u64));
    println!("  Metadata entries: {}", format_with_commas(admin_entries as u64));
    println!("  Tracked entries: {}", format_with_commas(tracked.tracked_count() as u64));
    println!("  Registries read: {}", tracked.registry_count());
    println!("  Ignore files in effect: {}", ignored.cvsignore_count());
    println!("  Entries matched by ignore rules: {}", format_with_commas(ignored_count as u64));

    // Untracked top-level entries are the usual candidates for `plan`.
    let mut untracked_top: Vec<&str> = tree
        .children(tree.root())
        .iter()
        .copied()
        .filter(|&id| !admin.is_admin(&tree, id) && !tracked.is_tracked(&tree, id))
        .map(|id| tree.path(id))
        .collect();
    untracked_top.sort_unstable();
    if !untracked_top.is_empty() {
        println!("Untracked top-level entries:");
        for path in untracked_top {
            println!("  {}", path);
        }
    }

    Ok(())
}
