//! addset: plan version-control add operations
//!
//! Thin binary wrapper; all behavior lives in the library crate.

use anyhow::Result;

fn main() -> Result<()> {
    addset::cli::run()
}
