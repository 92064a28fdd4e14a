//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads and validates the capture
//! 2. Computes summary, jitter and threshold statistics
//! 3. Writes the JSON report and/or prints the text summary

use super::models::AnalyzeArgs;
use crate::output::{render_text_summary, to_report, write_report};
use crate::parser::build_series;
use crate::utils::config::MIN_REPORT_WIDTH;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Ingestion failures (bad header, empty capture, strict-mode bad row)
/// * Analysis failures (zero frame times, zero-length session)
/// * File write errors
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Analyzing capture: {}", args.input.display());

    // Step 1: Ingest
    info!("Step 1/3: Reading capture...");
    let series = build_series(&args.input, &args.ingest)
        .with_context(|| format!("Failed to ingest capture {}", args.input.display()))?;

    debug!(
        "Series: {} frames over {:.3}s, {} dropped",
        series.len(),
        series.duration_secs(),
        series.dropped_count()
    );

    // Step 2: Analyze
    info!("Step 2/3: Computing statistics...");
    let source = args.input.display().to_string();
    let report = to_report(&series, &source, &args.thresholds)
        .context("Failed to analyze frame timings")?;

    info!(
        "Mean frame time {:.3} ms ({:.1} fps)",
        report.frame_time.mean_ms, report.frame_time.mean_rate
    );

    // Step 3: Output
    info!("Step 3/3: Writing output...");
    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!("\n{}", render_text_summary(&report, &args.text));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.thresholds.is_empty() {
        anyhow::bail!("At least one threshold is required");
    }

    if let Some(bad) = args
        .thresholds
        .iter()
        .find(|t| !t.is_finite() || **t < 0.0)
    {
        anyhow::bail!("Threshold must be a non-negative framerate, got {}", bad);
    }

    if args.text.width < MIN_REPORT_WIDTH {
        anyhow::bail!("Summary width must be at least {}", MIN_REPORT_WIDTH);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            input: PathBuf::from("capture.csv"),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        assert!(validate_args(&AnalyzeArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_no_thresholds() {
        let a = AnalyzeArgs {
            thresholds: vec![],
            ..args()
        };
        assert!(validate_args(&a).is_err());
    }

    #[test]
    fn test_validate_args_negative_threshold() {
        let a = AnalyzeArgs {
            thresholds: vec![60.0, -1.0],
            ..args()
        };
        assert!(validate_args(&a).is_err());
    }
}
