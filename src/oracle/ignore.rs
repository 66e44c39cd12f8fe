//! Ignore-status oracle.
//!
//! Two pattern sources are combined:
//! 1. File-type rules: the built-in pattern table plus any configured
//!    extras, in gitignore syntax, matched against the relative path.
//! 2. Per-directory `.cvsignore` files: whitespace-separated basename
//!    globs scoped to their own directory. A lone `!` token resets the
//!    list for that directory, built-in rules included.

use crate::domain::{default_ignore_patterns, Config};
use crate::oracle::IgnoreOracle;
use crate::worktree::{EntryId, WorkTree};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

const CVSIGNORE_FILE: &str = ".cvsignore";

static DEFAULT_RULES: Lazy<Gitignore> = Lazy::new(|| {
    let mut builder = GitignoreBuilder::new("");
    for pattern in default_ignore_patterns() {
        builder
            .add_line(None, pattern)
            .expect("built-in ignore patterns are valid");
    }
    builder.build().expect("built-in ignore patterns compile")
});

/// Basename globs collected from one `.cvsignore` file.
struct DirRules {
    globs: GlobSet,
    /// The `!` token appeared: suppress built-in rules in this directory.
    reset: bool,
}

/// Compiled ignore rules over one snapshot.
pub struct IgnoreRules {
    use_defaults: bool,
    extra: Option<Gitignore>,
    per_dir: HashMap<EntryId, DirRules>,
}

impl IgnoreRules {
    /// Compile rules for the snapshot according to `config`.
    pub fn load(tree: &WorkTree, config: &Config) -> Result<Self> {
        let extra = if config.ignore_patterns.is_empty() {
            None
        } else {
            let mut builder = GitignoreBuilder::new("");
            for pattern in &config.ignore_patterns {
                builder
                    .add_line(None, pattern)
                    .with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
            }
            Some(builder.build().context("Failed to compile ignore patterns")?)
        };

        let mut per_dir = HashMap::new();
        if config.use_cvsignore {
            let dirs = std::iter::once(tree.root()).chain(tree.iter().filter(|&id| tree.is_dir(id)));
            for dir in dirs {
                let Some(ignore_file) = tree.child_named(dir, CVSIGNORE_FILE) else {
                    continue;
                };
                match parse_cvsignore(&tree.abs_path(ignore_file)) {
                    Ok(rules) => {
                        per_dir.insert(dir, rules);
                    }
                    Err(err) => warn!("Skipping unreadable {}: {}", CVSIGNORE_FILE, err),
                }
            }
        }

        Ok(Self { use_defaults: config.use_default_ignores, extra, per_dir })
    }

    /// Number of `.cvsignore` files in effect.
    pub fn cvsignore_count(&self) -> usize {
        self.per_dir.len()
    }
}

impl IgnoreOracle for IgnoreRules {
    fn is_ignored(&self, tree: &WorkTree, id: EntryId) -> bool {
        let is_dir = tree.is_dir(id);
        let dir_rules = tree.parent(id).and_then(|p| self.per_dir.get(&p));

        if let Some(rules) = dir_rules {
            if rules.globs.is_match(tree.name(id)) {
                return true;
            }
            if rules.reset {
                // `!` wiped the slate for this directory.
                return false;
            }
        }

        if self.use_defaults && DEFAULT_RULES.matched(tree.path(id), is_dir).is_ignore() {
            return true;
        }
        if let Some(ref extra) = self.extra {
            if extra.matched(tree.path(id), is_dir).is_ignore() {
                return true;
            }
        }
        false
    }
}

fn parse_cvsignore(path: &Path) -> Result<DirRules> {
    let content = fs::read_to_string(path)?;
    let mut builder = GlobSetBuilder::new();
    let mut reset = false;

    for token in content.split_whitespace() {
        if token == "!" {
            builder = GlobSetBuilder::new();
            reset = true;
            continue;
        }
        match Glob::new(token) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(err) => warn!("Skipping bad pattern {:?} in {}: {}", token, path.display(), err),
        }
    }

    Ok(DirRules { globs: builder.build()?, reset })
}
