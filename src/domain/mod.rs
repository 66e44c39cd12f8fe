//! Core domain types: configuration and planning statistics.

use serde::{Deserialize, Serialize};

/// Default file-type ignore patterns, in gitignore syntax.
///
/// These cover editor backups, merge leftovers, OS litter, and bytecode,
/// independent of any per-directory ignore file.
pub fn default_ignore_patterns() -> &'static [&'static str] {
    &[
        "*.bak", "*.BAK", "*.old", "*.orig", "*.rej", "*~", "#*#", ".#*", ",*", "*.a", "*.o",
        "*.obj", "*.so", "*.Z", "*.elc", "*.ln", "*.pyc", "*.pyo", ".DS_Store", "Thumbs.db",
        "desktop.ini", "core", "*.swp", "*.swo",
    ]
}

/// Planner configuration.
///
/// Loaded from `addset.toml`/`.addset.toml` (or the `.yml`/`.yaml`
/// variants) at the working-copy root, then overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the VCS metadata directory (never a candidate).
    pub admin_dir: String,

    /// Honor per-directory `.cvsignore` files.
    pub use_cvsignore: bool,

    /// Honor the built-in file-type ignore patterns.
    pub use_default_ignores: bool,

    /// Additional ignore patterns (gitignore syntax).
    pub ignore_patterns: Vec<String>,

    /// Follow symbolic links when snapshotting the working copy.
    pub follow_symlinks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_dir: "CVS".to_string(),
            use_cvsignore: true,
            use_default_ignores: true,
            ignore_patterns: Vec::new(),
            follow_symlinks: false,
        }
    }
}

/// Counters produced by one planning run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanStats {
    /// Entries in the input selection.
    pub selections: usize,

    /// Selected entries discarded because they are VCS metadata.
    pub admin_skipped: usize,

    /// Selected entries discarded because the VCS already knows them.
    pub tracked_skipped: usize,

    /// Untracked ancestors pulled in to reach a boundary.
    pub ancestors_added: usize,

    /// Final deduplicated candidate count.
    pub candidates: usize,

    /// Candidates flagged as excluded by ignore rules.
    pub ignored_flagged: usize,
}
