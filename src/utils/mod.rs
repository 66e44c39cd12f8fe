//! Shared helpers

pub mod format;
pub mod paths;

pub use format::format_with_commas;
pub use paths::normalize_path;
