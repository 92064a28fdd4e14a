use crate::output::read_report;
use crate::utils::config::{EXPECTED_HEADER, REPORT_SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Application: {}", report.session.application);
    println!("  Frames: {}", report.frame_count);
    println!("  Mean Frame Time: {:.3} ms", report.frame_time.mean_ms);
    println!("  Mean Framerate: {:.1} fps", report.framerate.mean_fps);
    println!("  Thresholds: {}", report.thresholds.len());

    Ok(())
}

/// Display input and report schema information
pub fn display_schema(show_details: bool) {
    println!("PresentMon Analyzer Schemas");
    println!("Report Version: {}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Expected capture header:");
    println!("  {}", EXPECTED_HEADER);
    println!();

    if show_details {
        println!("Report Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Capture file path");
        println!("  session: object          - Application, process, swap chain, runtime, mode");
        println!("  frame_count: number      - Frames ingested");
        println!("  dropped_frames: number   - Frames flagged as dropped");
        println!("  dropped_fraction: number - dropped_frames / frame_count");
        println!("  duration_secs: number    - Session duration in seconds");
        println!("  frame_time: object       - Mean/median/stddev in ms and fps");
        println!("  framerate: object        - Mean/stddev/min/max of per-frame fps");
        println!("  jitter: object           - Min/max/mean frame-to-frame change in ms");
        println!("  thresholds: array        - Time share above each framerate");
        println!("    threshold_fps: number  - Framerate threshold");
        println!("    seconds_above: number  - Seconds of frames faster than threshold");
        println!("    fraction: number       - Share of session time, 0..1");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("PresentMon Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Frame pacing statistics from PresentMon captures.");
}
