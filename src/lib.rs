//! PresentMon Analyzer
//!
//! Frame pacing statistics from PresentMon frame-presentation captures.
//!
//! The pipeline reads one capture into a validated
//! [`FrameTimingSeries`](parser::FrameTimingSeries), then derives
//! frame time / framerate summaries, frame-to-frame jitter and the share
//! of session time spent above framerate thresholds.
//!
//! ## Getting Started
//!
//! ```ignore
//! use presentmon_analyzer::aggregator::{summary, threshold_fractions};
//! use presentmon_analyzer::parser::build_series;
//! use presentmon_analyzer::utils::IngestConfig;
//!
//! let series = build_series("capture.csv", &IngestConfig::default())?;
//! let stats = summary(series.ms_between_presents())?;
//! let above = threshold_fractions(&series, &[60.0, 144.0])?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
