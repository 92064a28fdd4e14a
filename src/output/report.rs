//! Analysis report schema.
//!
//! This is the structure written to JSON and rendered as text.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{
    frame_time_summary, framerate_distribution, jitter_summary, threshold_fractions,
    FramerateDistribution, JitterSummary, SummaryStatistics, ThresholdFraction,
};
use crate::parser::{FrameTimingSeries, SessionInfo};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::AnalysisError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Capture the report was computed from
    pub source: String,

    pub session: SessionInfo,

    pub frame_count: usize,

    pub dropped_frames: usize,

    /// Dropped frames over total frames
    pub dropped_fraction: f64,

    /// Corrected first timestamp to last timestamp
    pub duration_secs: f64,

    pub frame_time: SummaryStatistics,

    /// Per-frame framerates, averaged frame by frame
    pub framerate: FramerateDistribution,

    pub jitter: JitterSummary,

    pub thresholds: Vec<ThresholdFraction>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Run every analysis over a series and collect the results
///
/// **Public** - used by commands to create final output
///
/// # Errors
/// Any `AnalysisError` raised by the individual analyses
pub fn to_report(
    series: &FrameTimingSeries,
    source: &str,
    thresholds: &[f64],
) -> Result<AnalysisReport, AnalysisError> {
    use chrono::Utc;

    let frame_time = frame_time_summary(series)?;
    let framerate = framerate_distribution(series)?;

    let jitter = jitter_summary(series)?;
    let thresholds = threshold_fractions(series, thresholds)?;

    debug!(
        "Report covers {} frames, {} thresholds",
        series.len(),
        thresholds.len()
    );

    let dropped_frames = series.dropped_count();

    Ok(AnalysisReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        session: series.session().clone(),
        frame_count: series.len(),
        dropped_frames,
        dropped_fraction: dropped_frames as f64 / series.len() as f64,
        duration_secs: series.duration_secs(),
        frame_time,
        framerate,
        jitter,
        thresholds,
        generated_at: Utc::now().to_rfc3339(),
    })
}
