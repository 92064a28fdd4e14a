//! Successive differences and frame-to-frame jitter.

use crate::parser::FrameTimingSeries;
use crate::utils::error::AnalysisError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Successive differences of a sequence
///
/// **Public** - `diffs[i] = samples[i + 1] - samples[i]`
///
/// One sample yields an empty result. No aggregation happens here.
///
/// # Errors
/// * `AnalysisError::InsufficientData` - empty input
pub fn diff(samples: &[f64]) -> Result<Vec<f64>, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "cannot difference an empty sequence".to_string(),
        ));
    }

    Ok(samples.windows(2).map(|w| w[1] - w[0]).collect())
}

/// Magnitude of frame-to-frame frame time changes, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JitterSummary {
    pub min_ms: f64,
    pub max_ms: f64,
    pub mean_ms: f64,
}

/// Aggregate absolute frame time differences of a series
///
/// **Public** - used by the report builder
///
/// # Errors
/// * `AnalysisError::InsufficientData` - fewer than two frames
pub fn jitter_summary(series: &FrameTimingSeries) -> Result<JitterSummary, AnalysisError> {
    let magnitudes: Vec<f64> = diff(series.ms_between_presents())?
        .into_iter()
        .map(f64::abs)
        .collect();

    if magnitudes.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "jitter needs at least two frames".to_string(),
        ));
    }

    let min_ms = magnitudes.iter().copied().fold(f64::INFINITY, f64::min);
    let max_ms = magnitudes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean_ms = magnitudes.iter().sum::<f64>() / magnitudes.len() as f64;

    debug!(
        "Jitter over {} transitions: min {:.3} ms, max {:.3} ms, mean {:.3} ms",
        magnitudes.len(),
        min_ms,
        max_ms,
        mean_ms
    );

    Ok(JitterSummary {
        min_ms,
        max_ms,
        mean_ms,
    })
}
