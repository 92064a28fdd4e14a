//! PresentMon Analyzer CLI
//!
//! Reads a PresentMon capture and reports frame pacing statistics.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use presentmon_analyzer::commands::{
    display_schema, display_version, execute_analyze, validate_args, validate_report_file,
    AnalyzeArgs,
};
use presentmon_analyzer::utils::config::{
    IngestConfig, RowPolicy, TextReportConfig, DEFAULT_REPORT_PATH, DEFAULT_REPORT_WIDTH,
    DEFAULT_THRESHOLDS,
};

/// PresentMon Analyzer - frame pacing statistics
#[derive(Parser, Debug)]
#[command(name = "presentmon-analyzer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a PresentMon capture
    Analyze(AnalyzeOpts),

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display capture and report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

/// Options of the analyze command
#[derive(Args, Debug)]
struct AnalyzeOpts {
    /// PresentMon CSV capture
    #[arg(short, long)]
    input: PathBuf,

    /// Output path for JSON report
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Framerate thresholds, comma separated [default: 60,90,120,144]
    #[arg(short, long, value_delimiter = ',')]
    thresholds: Option<Vec<f64>>,

    /// Abort on the first malformed row instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Text summary width in columns
    #[arg(long, default_value_t = DEFAULT_REPORT_WIDTH)]
    width: usize,
}

impl From<AnalyzeOpts> for AnalyzeArgs {
    fn from(opts: AnalyzeOpts) -> Self {
        let row_policy = if opts.strict {
            RowPolicy::Strict
        } else {
            RowPolicy::Lenient
        };

        AnalyzeArgs {
            input: opts.input,
            output_json: Some(opts.output),
            thresholds: opts
                .thresholds
                .unwrap_or_else(|| DEFAULT_THRESHOLDS.to_vec()),
            ingest: IngestConfig { row_policy },
            print_summary: opts.summary,
            text: TextReportConfig { width: opts.width },
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze(opts) => {
            let args = AnalyzeArgs::from(opts);

            // Validate args first
            validate_args(&args)?;

            execute_analyze(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_analyze(argv: &[&str]) -> AnalyzeArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Analyze(opts) => AnalyzeArgs::from(opts),
            other => panic!("expected analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_analyze_defaults_match_library_defaults() {
        let args = parse_analyze(&["presentmon-analyzer", "analyze", "-i", "capture.csv"]);
        let defaults = AnalyzeArgs::default();

        assert_eq!(args.input, PathBuf::from("capture.csv"));
        assert_eq!(args.output_json, defaults.output_json);
        assert_eq!(args.thresholds, defaults.thresholds);
        assert_eq!(args.thresholds, DEFAULT_THRESHOLDS);
        assert_eq!(args.ingest.row_policy, RowPolicy::Lenient);
        assert_eq!(args.text.width, defaults.text.width);
        assert!(!args.print_summary);
    }

    #[test]
    fn test_analyze_explicit_options() {
        let args = parse_analyze(&[
            "presentmon-analyzer",
            "analyze",
            "-i",
            "capture.csv",
            "-o",
            "out/run.json",
            "-t",
            "30,59.94",
            "--strict",
            "--width",
            "100",
        ]);

        assert_eq!(args.output_json, Some(PathBuf::from("out/run.json")));
        assert_eq!(args.thresholds, vec![30.0, 59.94]);
        assert_eq!(args.ingest.row_policy, RowPolicy::Strict);
        assert_eq!(args.text.width, 100);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
