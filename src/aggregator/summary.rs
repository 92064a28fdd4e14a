//! Central tendency and dispersion of frame times.
//!
//! Every frame-time statistic comes with its framerate dual
//! (`1000 / value`). Frame times of zero or less make that dual
//! undefined and are reported as `DivisionFault`.

use crate::parser::FrameTimingSeries;
use crate::utils::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Frame time statistics in milliseconds plus their framerate duals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub mean_ms: f64,
    pub median_ms: f64,

    /// Population standard deviation
    pub stddev_ms: f64,

    pub mean_rate: f64,
    pub median_rate: f64,

    /// `None` when every sample is identical
    pub stddev_rate: Option<f64>,
}

/// Distribution of per-frame framerates
///
/// Averages instantaneous rates, so it weights every frame equally. The
/// `mean_rate` of `SummaryStatistics` is the rate of the mean frame time
/// and is lower whenever frame times vary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramerateDistribution {
    pub mean_fps: f64,

    /// Population standard deviation
    pub stddev_fps: f64,

    pub min_fps: f64,
    pub max_fps: f64,
}

/// Convert a frame time in milliseconds to frames per second
pub fn to_rate(ms: f64) -> f64 {
    1000.0 / ms
}

/// Reject frame times that can't be turned into a framerate
///
/// **Public** - shared by every rate-deriving analysis
///
/// # Errors
/// * `AnalysisError::DivisionFault` - first non-positive or non-finite value
pub fn check_frame_times(frame_times: &[f64]) -> Result<(), AnalysisError> {
    match frame_times
        .iter()
        .position(|ms| !ms.is_finite() || *ms <= 0.0)
    {
        Some(index) => Err(AnalysisError::DivisionFault {
            index,
            value: frame_times[index],
        }),
        None => Ok(()),
    }
}

/// Instantaneous framerate of every frame
///
/// # Errors
/// * `AnalysisError::DivisionFault` - a frame time is zero or negative
pub fn framerates(series: &FrameTimingSeries) -> Result<Vec<f64>, AnalysisError> {
    let frame_times = series.ms_between_presents();
    check_frame_times(frame_times)?;
    Ok(frame_times.iter().copied().map(to_rate).collect())
}

/// Mean, spread and range of a series' per-frame framerates
///
/// **Public** - used by the report alongside `frame_time_summary`
///
/// # Errors
/// * `AnalysisError::InsufficientData` - empty series
/// * `AnalysisError::DivisionFault` - a frame time is zero or negative
pub fn framerate_distribution(
    series: &FrameTimingSeries,
) -> Result<FramerateDistribution, AnalysisError> {
    let rates = framerates(series)?;
    if rates.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "no frames to derive framerates from".to_string(),
        ));
    }

    let (mean_fps, stddev_fps) = mean_and_stddev(&rates);
    let min_fps = rates.iter().copied().fold(f64::INFINITY, f64::min);
    let max_fps = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(FramerateDistribution {
        mean_fps,
        stddev_fps,
        min_fps,
        max_fps,
    })
}

/// Mean, median and standard deviation of a frame-time sequence
///
/// **Public** - main entry point for summary statistics
///
/// # Errors
/// * `AnalysisError::InsufficientData` - empty input
/// * `AnalysisError::DivisionFault` - a frame time is zero or negative
pub fn summary(frame_times: &[f64]) -> Result<SummaryStatistics, AnalysisError> {
    if frame_times.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "cannot summarize an empty sequence".to_string(),
        ));
    }
    check_frame_times(frame_times)?;

    let (mean_ms, stddev_ms) = mean_and_stddev(frame_times);
    let median_ms = median(frame_times);

    Ok(SummaryStatistics {
        mean_ms,
        median_ms,
        stddev_ms,
        mean_rate: to_rate(mean_ms),
        median_rate: to_rate(median_ms),
        stddev_rate: (stddev_ms > 0.0).then(|| to_rate(stddev_ms)),
    })
}

/// Summary of a series' frame times
pub fn frame_time_summary(series: &FrameTimingSeries) -> Result<SummaryStatistics, AnalysisError> {
    summary(series.ms_between_presents())
}

/// Mean and population standard deviation of a non-empty slice
///
/// **Private** - two passes, squared deviations from the final mean
fn mean_and_stddev(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    (mean, variance.sqrt())
}

/// Median of a non-empty slice (mean of the middle pair for even lengths)
///
/// **Private** - internal helper for summary
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_even_length() {
        let stats = summary(&[10.0, 20.0, 5.0, 25.0]).unwrap();

        assert_eq!(stats.mean_ms, 15.0);
        assert_eq!(stats.median_ms, 15.0);
        assert_eq!(stats.mean_rate, 1000.0 / 15.0);
        // deviations: -5, 5, -10, 10 -> variance 62.5
        assert!((stats.stddev_ms - 62.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_summary_odd_length_median() {
        let stats = summary(&[4.0, 1.0, 10.0]).unwrap();
        assert_eq!(stats.median_ms, 4.0);
        assert_eq!(stats.median_rate, 250.0);
    }

    #[test]
    fn test_summary_single_sample() {
        let stats = summary(&[16.0]).unwrap();

        assert_eq!(stats.mean_ms, 16.0);
        assert_eq!(stats.stddev_ms, 0.0);
        assert_eq!(stats.stddev_rate, None);
    }

    #[test]
    fn test_summary_empty() {
        assert!(matches!(
            summary(&[]),
            Err(AnalysisError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_summary_zero_frame_time() {
        assert_eq!(
            summary(&[16.0, 0.0, 16.0]),
            Err(AnalysisError::DivisionFault {
                index: 1,
                value: 0.0
            })
        );
    }

    #[test]
    fn test_mean_and_stddev() {
        let (mean, stddev) = mean_and_stddev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(mean, 5.0);
        assert_eq!(stddev, 2.0);
    }

    #[test]
    fn test_check_frame_times_negative() {
        assert!(check_frame_times(&[1.0, -2.0]).is_err());
        assert!(check_frame_times(&[1.0, 2.0]).is_ok());
    }
}
