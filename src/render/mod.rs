//! Output rendering (text tree, JSON report)

pub mod report;
pub mod tree;

pub use report::{render_report, ReportOptions};
pub use tree::render_forest;
