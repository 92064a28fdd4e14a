//! Plain-text report summary for terminals.

use super::report::AnalysisReport;
use crate::utils::config::{TextReportConfig, MIN_REPORT_WIDTH};

// "  > 144 fps " + " 100.0%"
const THRESHOLD_LABEL_WIDTH: usize = 12;
const THRESHOLD_PERCENT_WIDTH: usize = 8;
const MIN_BAR_WIDTH: usize = 10;

/// Render a report as fixed-width text
///
/// **Public** - used by the analyze command's `--summary` flag
pub fn render_text_summary(report: &AnalysisReport, config: &TextReportConfig) -> String {
    let width = config.width.max(MIN_REPORT_WIDTH);
    let heavy = "=".repeat(width);
    let light = "-".repeat(width);
    let mut lines = Vec::new();

    lines.push(heavy.clone());
    lines.push("FRAME PACING SUMMARY".to_string());
    lines.push(heavy.clone());

    let session = &report.session;
    lines.push(format!(
        "Application:  {} (pid {})",
        session.application, session.process_id
    ));
    lines.push(format!(
        "Runtime:      {}, {}, sync interval {}",
        session.runtime, session.present_mode, session.sync_interval
    ));
    lines.push(format!(
        "Frames:       {} ({} dropped, {:.1}%)",
        report.frame_count,
        report.dropped_frames,
        report.dropped_fraction * 100.0
    ));
    lines.push(format!("Duration:     {:.3} s", report.duration_secs));
    lines.push(light.clone());

    let ft = &report.frame_time;
    lines.push(format!(
        "Frame time:   mean {:.3} ms | median {:.3} ms | stddev {:.3} ms",
        ft.mean_ms, ft.median_ms, ft.stddev_ms
    ));
    let stddev_rate = ft
        .stddev_rate
        .map(|r| format!("{:.1} fps", r))
        .unwrap_or_else(|| "n/a".to_string());
    lines.push(format!(
        "Framerate:    mean {:.1} fps | median {:.1} fps | stddev {}",
        ft.mean_rate, ft.median_rate, stddev_rate
    ));

    let fr = &report.framerate;
    lines.push(format!(
        "Per frame:    mean {:.1} fps | stddev {:.1} fps | range {:.1}-{:.1} fps",
        fr.mean_fps, fr.stddev_fps, fr.min_fps, fr.max_fps
    ));

    let jitter = &report.jitter;
    lines.push(format!(
        "Jitter:       min {:.3} ms | max {:.3} ms | mean {:.3} ms",
        jitter.min_ms, jitter.max_ms, jitter.mean_ms
    ));

    if !report.thresholds.is_empty() {
        lines.push(light);
        lines.push("Time above threshold".to_string());

        let labels: Vec<String> = report
            .thresholds
            .iter()
            .map(|t| format!("  > {} fps", t.threshold_fps))
            .collect();

        // Label column fits the longest label but always leaves room for a bar
        let longest = labels.iter().map(|l| l.chars().count() + 1).max().unwrap_or(0);
        let label_width = longest
            .max(THRESHOLD_LABEL_WIDTH)
            .min(width - THRESHOLD_PERCENT_WIDTH - MIN_BAR_WIDTH);
        let bar_width = width - label_width - THRESHOLD_PERCENT_WIDTH;

        for (label, t) in labels.iter().zip(&report.thresholds) {
            lines.push(format!(
                "{}{} {:>6.1}%",
                fit(label, label_width),
                bar(t.fraction, bar_width),
                t.fraction * 100.0
            ));
        }
    }

    lines.push(heavy);
    lines.join("\n")
}

/// Pad or cut `text` to exactly `width` characters
///
/// **Private** - internal helper for render_text_summary
fn fit(text: &str, width: usize) -> String {
    let cut: String = text.chars().take(width).collect();
    format!("{:<width$}", cut, width = width)
}

/// Horizontal bar of `width` cells, `fraction` of them filled
///
/// **Private** - internal helper for render_text_summary
fn bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
