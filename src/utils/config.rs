//! Configuration and constants for ingestion and reporting.

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Header line every PresentMon capture must start with
pub const EXPECTED_HEADER: &str = "Application,ProcessID,SwapChainAddress,Runtime,SyncInterval,PresentFlags,AllowsTearing,PresentMode,Dropped,TimeInSeconds,MsBetweenPresents,MsBetweenDisplayChange,MsInPresentAPI,MsUntilRenderComplete,MsUntilDisplayed";

/// Number of comma-separated fields in a well-formed row
pub const FIELD_COUNT: usize = 15;

/// Field delimiter of the capture format
pub const FIELD_DELIMITER: char = ',';

/// Framerate thresholds reported when the caller supplies none
pub const DEFAULT_THRESHOLDS: &[f64] = &[60.0, 90.0, 120.0, 144.0];

/// JSON report written when no output path is given
pub const DEFAULT_REPORT_PATH: &str = "report.json";

/// Width of the plain-text summary, in columns
pub const DEFAULT_REPORT_WIDTH: usize = 80;

// Narrower than this and the summary tables wrap
pub const MIN_REPORT_WIDTH: usize = 40;

/// What to do with a row that has 15 fields but a value that won't parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Log the row and keep going
    #[default]
    Lenient,
    /// Abort ingestion with `MalformedRow`
    Strict,
}

/// Ingestion settings passed into `build_series`
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestConfig {
    pub row_policy: RowPolicy,
}

impl IngestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            row_policy: RowPolicy::Strict,
        }
    }
}

/// Plain-text summary settings
#[derive(Debug, Clone, Copy)]
pub struct TextReportConfig {
    pub width: usize,
}

impl Default for TextReportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_REPORT_WIDTH,
        }
    }
}

impl TextReportConfig {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_REPORT_WIDTH);
        self
    }
}
