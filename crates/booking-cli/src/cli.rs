//! CLI argument definitions for the booking exporter.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "booking-export",
    version,
    about = "Normalize travel bookings and export them to CSV",
    long_about = "Normalize loosely formatted travel bookings (free-text dates, prices and \
                  addresses) into typed records and export them.\n\n\
                  Input is a CSV or JSON file of raw bookings; bookings that fail to \
                  normalize are reported and skipped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include raw booking values (hotel names, addresses, prices) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a file of raw bookings and export the result.
    Convert(ConvertArgs),

    /// Run one parser over ad-hoc values and show how each is read.
    Check(CheckArgs),

    /// List recognized currency symbols in matching order.
    Currencies,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// CSV or JSON file of raw bookings.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (default: ./bookings.csv or ./bookings.json).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Input format (auto picks by file extension).
    #[arg(long = "input-format", value_enum, default_value = "auto")]
    pub input_format: InputFormatArg,

    /// Keep bookings with check-in on or after this date.
    #[arg(long = "from", value_name = "YYYY-MM-DD", value_parser = parse_date_bound)]
    pub from: Option<NaiveDate>,

    /// Keep bookings with check-in on or before this date.
    #[arg(long = "to", value_name = "YYYY-MM-DD", value_parser = parse_date_bound)]
    pub to: Option<NaiveDate>,

    /// Normalize and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with an error status when any booking was skipped.
    #[arg(long = "fail-on-skipped")]
    pub fail_on_skipped: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Which parser to run.
    #[arg(long = "kind", value_enum)]
    pub kind: CheckKind,

    /// Values to parse.
    #[arg(value_name = "TEXT", required = true)]
    pub values: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CheckKind {
    Date,
    Price,
    Address,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Auto,
    Csv,
    Json,
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

fn parse_date_bound(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|error| format!("expected YYYY-MM-DD ({error})"))
}
