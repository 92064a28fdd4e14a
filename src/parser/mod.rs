//! Capture parsing and series construction.
//!
//! This module handles:
//! - Validating the PresentMon header
//! - Parsing data rows into frame records
//! - Building the synchronized frame timing series

pub mod row;
pub mod schema;
pub mod series;

// Re-export main types
pub use row::{capture_reader, parse_record, parse_row, FrameRecord};
pub use schema::validate_header;
pub use series::{
    build_series, build_series_from_reader, FrameTimingSeries, SeriesBuilder, SessionInfo,
};
