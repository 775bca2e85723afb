//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "attn",
    version,
    about = "Attendance Studio - merge biometric device exports into monthly metrics",
    long_about = "Merge a biometric attendance device's per-sheet exports into a\n\
                  normalized per-employee dataset and compute monthly metrics:\n\
                  full/half days, lateness, absences, punch anomalies, and overtime."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge a directory of per-sheet CSV exports and print monthly metrics.
    Merge(MergeArgs),

    /// Print the attendance policy thresholds in effect.
    Policy,
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Directory holding one CSV file per workbook sheet.
    #[arg(value_name = "SHEET_DIR")]
    pub sheet_dir: PathBuf,

    /// Holiday days of the month, comma separated (e.g. 5,17).
    #[arg(long = "holidays", value_delimiter = ',', value_name = "DAYS")]
    pub holidays: Vec<u32>,

    /// Reporting year; requires --month and skips in-sheet detection.
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i32>,

    /// Reporting month (1-12); requires --year.
    #[arg(long = "month", value_name = "MONTH")]
    pub month: Option<u32>,

    /// Day count override; defaults to the calendar length of the month.
    #[arg(long = "day-count", value_name = "DAYS")]
    pub day_count: Option<u32>,

    /// Also print the per-employee rows as JSON on stdout.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
