//! Frame timing series construction.
//!
//! Reads a capture once, validates the header, accumulates rows into
//! column-oriented sequences and applies the first-timestamp
//! synchronization correction.

use super::row::{capture_reader, parse_record, FrameRecord};
use super::schema::validate_header;
use crate::utils::config::{IngestConfig, RowPolicy};
use crate::utils::error::IngestError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Session metadata, taken from the first valid row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub application: String,
    pub process_id: String,
    pub swap_chain_address: String,
    pub runtime: String,
    pub sync_interval: i32,
    pub present_flags: u32,
    pub allows_tearing: bool,
    pub present_mode: String,
}

impl From<&FrameRecord> for SessionInfo {
    fn from(record: &FrameRecord) -> Self {
        Self {
            application: record.process_name.clone(),
            process_id: record.process_id.clone(),
            swap_chain_address: record.swap_chain_address.clone(),
            runtime: record.runtime.clone(),
            sync_interval: record.sync_interval,
            present_flags: record.present_flags,
            allows_tearing: record.allows_tearing,
            present_mode: record.present_mode.clone(),
        }
    }
}

/// Validated, synchronized frame timings of one capture session
///
/// All sequences have the same length and index `i` refers to the
/// same frame in each. The series is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTimingSeries {
    session: SessionInfo,
    timestamps: Vec<f64>,
    dropped: Vec<bool>,
    ms_between_presents: Vec<f64>,
    ms_between_display_change: Vec<f64>,
    ms_in_present_api: Vec<f64>,
    ms_until_render_complete: Vec<f64>,
    ms_until_displayed: Vec<f64>,
}

impl FrameTimingSeries {
    pub fn session(&self) -> &SessionInfo {
        &self.session
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Frame timestamps in seconds; the first one is backdated to the
    /// start of that frame's processing
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn dropped(&self) -> &[bool] {
        &self.dropped
    }

    /// Frame times in milliseconds
    pub fn ms_between_presents(&self) -> &[f64] {
        &self.ms_between_presents
    }

    pub fn ms_between_display_change(&self) -> &[f64] {
        &self.ms_between_display_change
    }

    pub fn ms_in_present_api(&self) -> &[f64] {
        &self.ms_in_present_api
    }

    pub fn ms_until_render_complete(&self) -> &[f64] {
        &self.ms_until_render_complete
    }

    pub fn ms_until_displayed(&self) -> &[f64] {
        &self.ms_until_displayed
    }

    /// Elapsed session time in seconds (last timestamp minus first)
    pub fn duration_secs(&self) -> f64 {
        match (self.timestamps.first(), self.timestamps.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped.iter().filter(|d| **d).count()
    }
}

/// Accumulates frame records into a `FrameTimingSeries`
///
/// **Public** - also usable directly for in-memory captures
#[derive(Debug, Default)]
pub struct SeriesBuilder {
    session: Option<SessionInfo>,
    first_max_latency_ms: f64,
    timestamps: Vec<f64>,
    dropped: Vec<bool>,
    ms_between_presents: Vec<f64>,
    ms_between_display_change: Vec<f64>,
    ms_in_present_api: Vec<f64>,
    ms_until_render_complete: Vec<f64>,
    ms_until_displayed: Vec<f64>,
}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one frame; the first frame also supplies session metadata
    pub fn push(&mut self, record: FrameRecord) {
        if self.session.is_none() {
            self.session = Some(SessionInfo::from(&record));
            self.first_max_latency_ms = record.max_latency_ms();
        }

        self.timestamps.push(record.time_in_seconds);
        self.dropped.push(record.dropped);
        self.ms_between_presents.push(record.ms_between_presents);
        self.ms_between_display_change
            .push(record.ms_between_display_change);
        self.ms_in_present_api.push(record.ms_in_present_api);
        self.ms_until_render_complete
            .push(record.ms_until_render_complete);
        self.ms_until_displayed.push(record.ms_until_displayed);
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Freeze the accumulated frames into a series
    ///
    /// The raw first timestamp marks when frame 0 was presented. It is
    /// moved back by that frame's largest latency component so elapsed
    /// time starts where its processing began. Later timestamps are kept
    /// as logged.
    ///
    /// # Errors
    /// * `IngestError::EmptySeries` - no frame was pushed
    pub fn finish(mut self) -> Result<FrameTimingSeries, IngestError> {
        let session = self.session.take().ok_or(IngestError::EmptySeries)?;

        if let Some(first) = self.timestamps.first_mut() {
            let raw = *first;
            *first = raw - self.first_max_latency_ms / 1000.0;
            debug!(
                "Synchronized first timestamp: {:.6}s -> {:.6}s",
                raw, *first
            );
        }

        Ok(FrameTimingSeries {
            session,
            timestamps: self.timestamps,
            dropped: self.dropped,
            ms_between_presents: self.ms_between_presents,
            ms_between_display_change: self.ms_between_display_change,
            ms_in_present_api: self.ms_in_present_api,
            ms_until_render_complete: self.ms_until_render_complete,
            ms_until_displayed: self.ms_until_displayed,
        })
    }
}

/// Build a series from a capture file on disk
///
/// **Public** - main entry point for ingestion
///
/// # Arguments
/// * `path` - Path to a PresentMon CSV capture
/// * `config` - Row policy and other ingestion settings
///
/// # Errors
/// * `IngestError::Io` - file cannot be opened or read
/// * `IngestError::SchemaMismatch` - header is not the PresentMon header
/// * `IngestError::EmptySeries` - no usable rows after the header
/// * `IngestError::MalformedRow` - only under `RowPolicy::Strict`
pub fn build_series(
    path: impl AsRef<Path>,
    config: &IngestConfig,
) -> Result<FrameTimingSeries, IngestError> {
    let path = path.as_ref();
    info!("Reading capture: {}", path.display());

    let file = File::open(path)?;
    build_series_from_reader(file, config)
}

/// Build a series from any reader
///
/// **Public** - stream-based variant of `build_series`
///
/// Rows are read as raw bytes, so a corrupt row only affects itself and
/// falls under the row policy like any other malformed row.
pub fn build_series_from_reader<R: Read>(
    reader: R,
    config: &IngestConfig,
) -> Result<FrameTimingSeries, IngestError> {
    let mut csv_reader = capture_reader(reader);
    let mut records = csv_reader.byte_records();

    let header = match records.next() {
        Some(record) => {
            let record = record?;
            String::from_utf8_lossy(&record.iter().collect::<Vec<_>>().join(&b","[..]))
                .into_owned()
        }
        None => String::new(),
    };
    validate_header(&header)?;

    let mut builder = SeriesBuilder::new();
    let mut skipped = 0usize;

    for (index, record) in records.enumerate() {
        let record = record?;
        // Header is line 1
        let line_number = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 2);

        match parse_record(&record, line_number) {
            Ok(Some(frame)) => builder.push(frame),
            Ok(None) => skipped += 1,
            Err(e) => match config.row_policy {
                RowPolicy::Strict => return Err(e),
                RowPolicy::Lenient => {
                    warn!("{}; skipping", e);
                    skipped += 1;
                }
            },
        }
    }

    info!(
        "Ingested {} frames ({} lines skipped)",
        builder.len(),
        skipped
    );

    builder.finish()
}
