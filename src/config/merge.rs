//! CLI override merging

use crate::domain::Config;

/// Values the CLI may override; `None` means "not given, keep the file/default value".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub admin_dir: Option<String>,
    pub use_cvsignore: Option<bool>,
    pub use_default_ignores: Option<bool>,
    /// Appended to the configured patterns, not a replacement.
    pub ignore_patterns: Option<Vec<String>>,
    pub follow_symlinks: Option<bool>,
}

pub fn merge_cli_with_config(mut config: Config, overrides: CliOverrides) -> Config {
    if let Some(admin_dir) = overrides.admin_dir {
        config.admin_dir = admin_dir;
    }
    if let Some(use_cvsignore) = overrides.use_cvsignore {
        config.use_cvsignore = use_cvsignore;
    }
    if let Some(use_default_ignores) = overrides.use_default_ignores {
        config.use_default_ignores = use_default_ignores;
    }
    if let Some(patterns) = overrides.ignore_patterns {
        config.ignore_patterns.extend(patterns);
    }
    if let Some(follow_symlinks) = overrides.follow_symlinks {
        config.follow_symlinks = follow_symlinks;
    }
    config
}
