//! Input schema of a PresentMon capture.
//!
//! Column positions are fixed; every downstream index into a row
//! depends on the header matching exactly.

use crate::utils::config::EXPECTED_HEADER;
use crate::utils::error::IngestError;
use log::debug;

/// Column names in file order
pub const COLUMNS: [&str; 15] = [
    "Application",
    "ProcessID",
    "SwapChainAddress",
    "Runtime",
    "SyncInterval",
    "PresentFlags",
    "AllowsTearing",
    "PresentMode",
    "Dropped",
    "TimeInSeconds",
    "MsBetweenPresents",
    "MsBetweenDisplayChange",
    "MsInPresentAPI",
    "MsUntilRenderComplete",
    "MsUntilDisplayed",
];

pub const COL_APPLICATION: usize = 0;
pub const COL_PROCESS_ID: usize = 1;
pub const COL_SWAP_CHAIN: usize = 2;
pub const COL_RUNTIME: usize = 3;
pub const COL_SYNC_INTERVAL: usize = 4;
pub const COL_PRESENT_FLAGS: usize = 5;
pub const COL_ALLOWS_TEARING: usize = 6;
pub const COL_PRESENT_MODE: usize = 7;
pub const COL_DROPPED: usize = 8;
pub const COL_TIME_IN_SECONDS: usize = 9;
pub const COL_MS_BETWEEN_PRESENTS: usize = 10;
pub const COL_MS_BETWEEN_DISPLAY_CHANGE: usize = 11;
pub const COL_MS_IN_PRESENT_API: usize = 12;
pub const COL_MS_UNTIL_RENDER_COMPLETE: usize = 13;
pub const COL_MS_UNTIL_DISPLAYED: usize = 14;

/// Check a header line against the expected schema
///
/// **Public** - first step of ingestion
///
/// Surrounding whitespace (including a stray `\r`) is ignored; anything
/// else, casing included, must match exactly.
///
/// # Errors
/// * `IngestError::SchemaMismatch` - header differs from `EXPECTED_HEADER`
pub fn validate_header(line: &str) -> Result<(), IngestError> {
    let header = line.trim();

    if header != EXPECTED_HEADER {
        return Err(IngestError::SchemaMismatch {
            found: header.to_string(),
        });
    }

    debug!("Header matches schema ({} columns)", COLUMNS.len());
    Ok(())
}
