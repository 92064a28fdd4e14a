//! Row parser for PresentMon capture lines.
//!
//! A row with the wrong field count is transient log corruption and is
//! skipped. A row with the right field count but an unparseable value
//! (including bytes that aren't UTF-8) is reported as `MalformedRow` so
//! the caller can pick a policy.

use super::schema::*;
use crate::utils::config::{FIELD_COUNT, FIELD_DELIMITER};
use crate::utils::error::IngestError;
use csv::{ByteRecord, StringRecord};
use log::debug;
use std::io::Read;
use std::str::FromStr;

/// One presented frame, as logged
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub process_name: String,
    pub process_id: String,
    pub swap_chain_address: String,
    pub runtime: String,
    pub sync_interval: i32,
    pub present_flags: u32,
    pub allows_tearing: bool,
    pub present_mode: String,
    pub dropped: bool,
    pub time_in_seconds: f64,
    pub ms_between_presents: f64,
    pub ms_between_display_change: f64,
    pub ms_in_present_api: f64,
    pub ms_until_render_complete: f64,
    pub ms_until_displayed: f64,
}

impl FrameRecord {
    /// Largest latency component of this frame, in milliseconds
    ///
    /// Used to backdate the first timestamp to when the frame's
    /// processing began.
    pub fn max_latency_ms(&self) -> f64 {
        [
            self.ms_between_presents,
            self.ms_between_display_change,
            self.ms_in_present_api,
            self.ms_until_render_complete,
            self.ms_until_displayed,
        ]
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// CSV reader configured for PresentMon captures
///
/// **Public** - shared by the series builder and `parse_row`
///
/// No header handling (the header is validated separately), no quoting,
/// and rows of any length so short rows can be skipped instead of
/// failing the read.
pub fn capture_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(FIELD_DELIMITER as u8)
        .from_reader(reader)
}

/// Parse one data line
///
/// **Public** - convenience wrapper over `parse_record` for a single line
///
/// # Returns
/// `Ok(None)` when the line is blank or doesn't have exactly 15 fields
///
/// # Errors
/// * `IngestError::MalformedRow` - a numeric or flag field failed to parse
pub fn parse_row(line: &str, line_number: usize) -> Result<Option<FrameRecord>, IngestError> {
    let mut reader = capture_reader(line.trim().as_bytes());
    match reader.byte_records().next() {
        Some(record) => parse_record(&record?, line_number),
        None => Ok(None),
    }
}

/// Parse one raw CSV record
///
/// **Public** - called by the series builder for every record after the header
///
/// # Arguments
/// * `record` - Raw fields of one line
/// * `line_number` - 1-based line number, used in error messages
///
/// # Returns
/// `Ok(None)` when the record doesn't have exactly 15 fields
///
/// # Errors
/// * `IngestError::MalformedRow` - a field is not UTF-8, or a numeric or
///   flag field failed to parse
pub fn parse_record(
    record: &ByteRecord,
    line_number: usize,
) -> Result<Option<FrameRecord>, IngestError> {
    if record.len() != FIELD_COUNT {
        debug!(
            "Skipping line {}: expected {} fields, found {}",
            line_number,
            FIELD_COUNT,
            record.len()
        );
        return Ok(None);
    }

    let fields = StringRecord::from_byte_record(record.clone()).map_err(|e| {
        let col = e.utf8_error().field();
        IngestError::MalformedRow {
            line: line_number,
            column: COLUMNS[col],
            value: String::from_utf8_lossy(&record[col]).into_owned(),
            reason: "invalid UTF-8".to_string(),
        }
    })?;

    let row = Row {
        fields: &fields,
        line_number,
    };

    Ok(Some(FrameRecord {
        process_name: row.text(COL_APPLICATION),
        process_id: row.text(COL_PROCESS_ID),
        swap_chain_address: row.text(COL_SWAP_CHAIN),
        runtime: row.text(COL_RUNTIME),
        sync_interval: row.number(COL_SYNC_INTERVAL)?,
        present_flags: row.number(COL_PRESENT_FLAGS)?,
        allows_tearing: row.flag(COL_ALLOWS_TEARING)?,
        present_mode: row.text(COL_PRESENT_MODE),
        dropped: row.flag(COL_DROPPED)?,
        time_in_seconds: row.float(COL_TIME_IN_SECONDS)?,
        ms_between_presents: row.float(COL_MS_BETWEEN_PRESENTS)?,
        ms_between_display_change: row.float(COL_MS_BETWEEN_DISPLAY_CHANGE)?,
        ms_in_present_api: row.float(COL_MS_IN_PRESENT_API)?,
        ms_until_render_complete: row.float(COL_MS_UNTIL_RENDER_COMPLETE)?,
        ms_until_displayed: row.float(COL_MS_UNTIL_DISPLAYED)?,
    }))
}

/// Decoded fields of one line plus the context needed for error reporting
///
/// **Private** - internal helper for parse_record
struct Row<'a> {
    fields: &'a StringRecord,
    line_number: usize,
}

impl Row<'_> {
    fn raw(&self, col: usize) -> &str {
        self.fields[col].trim()
    }

    fn text(&self, col: usize) -> String {
        self.raw(col).to_string()
    }

    fn malformed(&self, col: usize, reason: impl ToString) -> IngestError {
        IngestError::MalformedRow {
            line: self.line_number,
            column: COLUMNS[col],
            value: self.raw(col).to_string(),
            reason: reason.to_string(),
        }
    }

    fn number<T>(&self, col: usize) -> Result<T, IngestError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.raw(col).parse::<T>().map_err(|e| self.malformed(col, e))
    }

    // Flags are logged as integers; only 1 means set
    fn flag(&self, col: usize) -> Result<bool, IngestError> {
        self.number::<i64>(col).map(|v| v == 1)
    }

    fn float(&self, col: usize) -> Result<f64, IngestError> {
        let value = self.number::<f64>(col)?;
        if !value.is_finite() {
            return Err(self.malformed(col, "value is not finite"));
        }
        Ok(value)
    }
}
