//! Time spent above framerate thresholds.
//!
//! Each frame contributes its own duration to every threshold its
//! instantaneous rate strictly exceeds. Totals are divided by session
//! time, so the result is a share of time, not of frames.
//!
//! Session time is the shorter of the timestamp span and the summed frame
//! durations. The span includes the first frame's backdating, which can be
//! longer than the frame itself, so using it alone would keep a 0 fps
//! threshold below 1.

use super::summary::{check_frame_times, to_rate};
use crate::parser::FrameTimingSeries;
use crate::utils::error::AnalysisError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Share of session time spent above one framerate threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdFraction {
    pub threshold_fps: f64,

    /// Seconds of frames faster than the threshold
    pub seconds_above: f64,

    /// `seconds_above / session time`, in [0, 1]
    pub fraction: f64,
}

/// Running total for one threshold
#[derive(Debug, Clone, Copy)]
struct ThresholdAccumulator {
    threshold_fps: f64,
    accumulated_secs: f64,
}

impl ThresholdAccumulator {
    fn new(threshold_fps: f64) -> Self {
        Self {
            threshold_fps,
            accumulated_secs: 0.0,
        }
    }

    fn observe(&mut self, frame_ms: f64) {
        if to_rate(frame_ms) > self.threshold_fps {
            self.accumulated_secs += frame_ms / 1000.0;
        }
    }

    fn finish(self, session_secs: f64) -> ThresholdFraction {
        ThresholdFraction {
            threshold_fps: self.threshold_fps,
            seconds_above: self.accumulated_secs,
            fraction: (self.accumulated_secs / session_secs).clamp(0.0, 1.0),
        }
    }
}

/// Threshold fractions for a raw frame-time sequence
///
/// **Public** - core of threshold accounting
///
/// # Arguments
/// * `frame_times` - Frame times in milliseconds
/// * `elapsed_secs` - Timestamp span of the session in seconds
/// * `thresholds` - Framerates to test, reported in the given order
///
/// # Errors
/// * `AnalysisError::InsufficientData` - no frames, or zero elapsed time
/// * `AnalysisError::DivisionFault` - a frame time is zero or negative
pub fn threshold_fractions_for(
    frame_times: &[f64],
    elapsed_secs: f64,
    thresholds: &[f64],
) -> Result<Vec<ThresholdFraction>, AnalysisError> {
    if frame_times.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "threshold accounting needs at least one frame".to_string(),
        ));
    }
    if !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
        return Err(AnalysisError::InsufficientData(format!(
            "session duration is {} s",
            elapsed_secs
        )));
    }
    check_frame_times(frame_times)?;

    let mut accumulators: Vec<ThresholdAccumulator> = thresholds
        .iter()
        .copied()
        .map(ThresholdAccumulator::new)
        .collect();

    // Summed in the same order as the accumulators so a threshold every
    // frame exceeds divides to exactly 1
    let mut frame_secs = 0.0;
    for &frame_ms in frame_times {
        frame_secs += frame_ms / 1000.0;
        for acc in accumulators.iter_mut() {
            acc.observe(frame_ms);
        }
    }
    let session_secs = elapsed_secs.min(frame_secs);

    let fractions: Vec<ThresholdFraction> = accumulators
        .into_iter()
        .map(|acc| acc.finish(session_secs))
        .collect();

    for f in &fractions {
        debug!(
            "> {} fps: {:.3}s of {:.3}s ({:.1}%)",
            f.threshold_fps,
            f.seconds_above,
            session_secs,
            f.fraction * 100.0
        );
    }

    Ok(fractions)
}

/// Threshold fractions for a series, over its full duration
///
/// **Public** - main entry point for threshold accounting
pub fn threshold_fractions(
    series: &FrameTimingSeries,
    thresholds: &[f64],
) -> Result<Vec<ThresholdFraction>, AnalysisError> {
    threshold_fractions_for(
        series.ms_between_presents(),
        series.duration_secs(),
        thresholds,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_weighted_not_counted() {
        // One long frame (20 fps) and four short ones (200 fps)
        let frames = [50.0, 5.0, 5.0, 5.0, 5.0];
        let result = threshold_fractions_for(&frames, 0.07, &[60.0]).unwrap();

        assert!((result[0].seconds_above - 0.02).abs() < 1e-12);
        assert!((result[0].fraction - 0.02 / 0.07).abs() < 1e-12);
    }

    #[test]
    fn test_frame_counts_toward_every_exceeded_threshold() {
        let frames = [5.0]; // 200 fps
        let result = threshold_fractions_for(&frames, 0.005, &[60.0, 144.0, 240.0]).unwrap();

        assert_eq!(result[0].fraction, 1.0);
        assert_eq!(result[1].fraction, 1.0);
        assert_eq!(result[2].fraction, 0.0);
    }

    #[test]
    fn test_strictly_exceeds() {
        // Exactly 100 fps does not exceed 100
        let result = threshold_fractions_for(&[10.0], 0.01, &[100.0]).unwrap();
        assert_eq!(result[0].seconds_above, 0.0);
    }

    #[test]
    fn test_zero_elapsed_time() {
        assert!(matches!(
            threshold_fractions_for(&[10.0], 0.0, &[60.0]),
            Err(AnalysisError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_no_frames() {
        assert!(matches!(
            threshold_fractions_for(&[], 1.0, &[60.0]),
            Err(AnalysisError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_negative_frame_time() {
        assert!(matches!(
            threshold_fractions_for(&[10.0, -1.0], 1.0, &[60.0]),
            Err(AnalysisError::DivisionFault { index: 1, .. })
        ));
    }

    #[test]
    fn test_zero_threshold_when_span_exceeds_frame_time() {
        // Span is 10 ms longer than the three frames
        let result = threshold_fractions_for(&[10.0, 10.0, 10.0], 0.04, &[0.0, 60.0]).unwrap();

        assert_eq!(result[0].fraction, 1.0);
        assert_eq!(result[1].fraction, 1.0);
    }

    #[test]
    fn test_span_shorter_than_frame_time() {
        let result = threshold_fractions_for(&[10.0, 30.0], 0.02, &[60.0]).unwrap();

        // Only the 10 ms frame is above 60 fps
        assert!((result[0].fraction - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_fraction_is_clamped() {
        let result = threshold_fractions_for(&[10.0, 20.0], 0.02, &[0.0]).unwrap();
        assert_eq!(result[0].fraction, 1.0);
    }
}
