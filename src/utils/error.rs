//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while turning a capture file into a series
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Header does not match the PresentMon schema (found {found:?})")]
    SchemaMismatch { found: String },

    #[error("Capture contains a valid header but no usable frame rows")]
    EmptySeries,

    #[error("Malformed row at line {line}: column {column} = {value:?} ({reason})")]
    MalformedRow {
        line: usize,
        column: &'static str,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that can occur while deriving statistics from a series
#[derive(Error, Debug, PartialEq)]
pub enum AnalysisError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Frame time at index {index} is {value} ms, framerate is undefined")]
    DivisionFault { index: usize, value: f64 },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
