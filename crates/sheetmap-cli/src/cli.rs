//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sheetmap",
    version,
    about = "Resolve labeled tabular records against a field schema",
    long_about = "Resolve flat label/value records (e.g. spreadsheet rows) into \
                  nested field assignments for a declared schema, then report \
                  missing required fields."
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

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve CSV records against a schema and validate required fields.
    Resolve(ResolveArgs),

    /// Print a summary of a schema file.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Path to the schema definition (JSON).
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Path to the CSV file to resolve.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Write resolved assignments as JSON to this file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the schema definition (JSON).
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
}
