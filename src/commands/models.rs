use crate::utils::config::{
    IngestConfig, TextReportConfig, DEFAULT_REPORT_PATH, DEFAULT_THRESHOLDS,
};
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// PresentMon CSV capture to read
    pub input: PathBuf,

    /// Output path for JSON report; `None` skips writing it
    pub output_json: Option<PathBuf>,

    /// Framerate thresholds for time-above accounting
    pub thresholds: Vec<f64>,

    pub ingest: IngestConfig,

    /// Print text summary to stdout
    pub print_summary: bool,

    pub text: TextReportConfig,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_json: Some(PathBuf::from(DEFAULT_REPORT_PATH)),
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            ingest: IngestConfig::default(),
            print_summary: false,
            text: TextReportConfig::default(),
        }
    }
}
