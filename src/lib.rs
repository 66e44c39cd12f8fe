//! addset: plan version-control add operations
//!
//! Given a selection of entries inside a CVS-style working copy, addset
//! computes the minimal, correctly-ordered set of paths that must be
//! registered with the VCS and arranges them into a forest of top-level
//! roots. It performs no VCS commands and no filesystem mutation; the
//! output is a plan for an external dispatcher.

pub mod cli;
pub mod config;
pub mod domain;
pub mod oracle;
pub mod plan;
pub mod render;
pub mod utils;
pub mod worktree;
