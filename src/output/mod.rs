//! Output writers for analysis reports.
//!
//! This module handles:
//! - The versioned report schema
//! - JSON reports (pretty-printed)
//! - Text summaries

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_path, write_report};
pub use report::{to_report, AnalysisReport};
pub use text::render_text_summary;
