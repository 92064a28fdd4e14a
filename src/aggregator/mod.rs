//! Derived statistics over a frame timing series.
//!
//! This module turns a validated series into:
//! - Successive differences and jitter magnitude
//! - Time fractions above framerate thresholds
//! - Frame time / framerate summary statistics
//! - The distribution of per-frame framerates
//!
//! Every function takes the series by shared reference and returns a
//! fresh value; nothing is cached on the series.

pub mod diff;
pub mod summary;
pub mod threshold;

// Re-export main types and functions
pub use diff::{diff, jitter_summary, JitterSummary};
pub use summary::{
    check_frame_times, frame_time_summary, framerate_distribution, framerates, summary, to_rate,
    FramerateDistribution, SummaryStatistics,
};
pub use threshold::{threshold_fractions, threshold_fractions_for, ThresholdFraction};
