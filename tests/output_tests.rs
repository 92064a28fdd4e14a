use pretty_assertions::assert_eq;
use presentmon_analyzer::output::{
    read_report, render_text_summary, to_report, validate_path, write_report, AnalysisReport,
};
use presentmon_analyzer::parser::{build_series_from_reader, FrameTimingSeries};
use presentmon_analyzer::utils::config::{EXPECTED_HEADER, TextReportConfig};
use presentmon_analyzer::utils::{AnalysisError, IngestConfig};
use std::io::Cursor;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_series() -> FrameTimingSeries {
    let rows = [
        "demo.exe,900,0xBEEF,DXGI,0,0,1,Hardware: Independent Flip,0,2.0,10,10,0.5,1.0,1.5",
        "demo.exe,900,0xBEEF,DXGI,0,0,1,Hardware: Independent Flip,1,2.02,20,20,0.5,1.0,1.5",
        "demo.exe,900,0xBEEF,DXGI,0,0,1,Hardware: Independent Flip,0,2.025,5,5,0.5,1.0,1.5",
        "demo.exe,900,0xBEEF,DXGI,0,0,1,Hardware: Independent Flip,0,2.05,25,25,0.5,1.0,1.5",
    ];
    let text = format!("{}\n{}\n", EXPECTED_HEADER, rows.join("\n"));
    build_series_from_reader(Cursor::new(text), &IngestConfig::default()).unwrap()
}

fn create_test_report() -> AnalysisReport {
    to_report(&create_test_series(), "capture.csv", &[60.0, 144.0]).unwrap()
}

#[test]
fn test_to_report() {
    let report = create_test_report();

    assert_eq!(report.version, "1.0.0");
    assert_eq!(report.source, "capture.csv");
    assert_eq!(report.session.application, "demo.exe");
    assert_eq!(report.frame_count, 4);
    assert_eq!(report.dropped_frames, 1);
    assert_eq!(report.dropped_fraction, 0.25);
    assert_eq!(report.frame_time.mean_ms, 15.0);
    assert_eq!(report.jitter.max_ms, 20.0);
    assert_eq!(report.thresholds.len(), 2);
    assert!((report.duration_secs - 0.06).abs() < 1e-9);
}

#[test]
fn test_report_framerate_distribution() {
    let report = create_test_report();

    // Frame times 10, 20, 5, 25 ms -> 100, 50, 200, 40 fps
    assert_eq!(report.framerate.mean_fps, 97.5);
    assert!((report.framerate.stddev_fps - 4018.75_f64.sqrt()).abs() < 1e-9);
    assert_eq!(report.framerate.min_fps, 40.0);
    assert_eq!(report.framerate.max_fps, 200.0);

    // Rate of the mean frame time is lower than the mean rate
    assert!(report.frame_time.mean_rate < report.framerate.mean_fps);
}

#[test]
fn test_to_report_propagates_analysis_errors() {
    let text = format!(
        "{}\nsolo.exe,1,0x1,DXGI,0,0,0,Composed: Flip,0,3.0,16,16,0.1,0.1,0.1\n",
        EXPECTED_HEADER
    );
    let series = build_series_from_reader(Cursor::new(text), &IngestConfig::default()).unwrap();

    assert!(matches!(
        to_report(&series, "solo.csv", &[60.0]),
        Err(AnalysisError::InsufficientData(_))
    ));
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded.version, report.version);
    assert_eq!(loaded.session, report.session);
    assert_eq!(loaded.frame_count, report.frame_count);
    assert_eq!(loaded.frame_time.mean_ms, 15.0);
    assert_eq!(loaded.framerate.max_fps, 200.0);
    assert_eq!(loaded.thresholds.len(), report.thresholds.len());
    assert_eq!(loaded.thresholds[1].threshold_fps, 144.0);
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/report.json");

    write_report(&create_test_report(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_text_summary_respects_width() {
    let report = create_test_report();
    let text = render_text_summary(&report, &TextReportConfig::default().with_width(60));

    let first = text.lines().next().unwrap();
    assert_eq!(first, "=".repeat(60));
    assert!(text.contains("demo.exe"));
    assert!(text.contains("> 60 fps"));

    let bar_lines: Vec<&str> = text.lines().filter(|l| l.contains("fps") && l.ends_with('%')).collect();
    assert_eq!(bar_lines.len(), 2);
    for line in bar_lines {
        assert_eq!(line.chars().count(), 60);
    }
}

#[test]
fn test_text_summary_shows_framerate_distribution() {
    let report = create_test_report();
    let text = render_text_summary(&report, &TextReportConfig::default());

    assert!(text.contains("Per frame:    mean 97.5 fps | stddev 63.4 fps | range 40.0-200.0 fps"));
}

#[test]
fn test_text_summary_long_threshold_labels() {
    let series = create_test_series();
    let report = to_report(&series, "capture.csv", &[59.94, 144.0, 1e15]).unwrap();

    for width in [40, 60, 80] {
        let text = render_text_summary(&report, &TextReportConfig::default().with_width(width));
        let bar_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("  >")).collect();

        assert_eq!(bar_lines.len(), 3);
        for line in bar_lines {
            assert_eq!(line.chars().count(), width, "line {:?}", line);
            assert!(line.ends_with('%'));
        }
    }
}

#[test]
fn test_text_summary_minimum_width() {
    let report = create_test_report();
    let text = render_text_summary(&report, &TextReportConfig { width: 10 });
    assert_eq!(text.lines().next().unwrap().len(), 40);
}
