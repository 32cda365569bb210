//! sheetmap CLI entry point.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_check, run_resolve};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let exit_code = match cli.command {
        Command::Resolve(args) => match run_resolve(&args) {
            Ok(outcome) => {
                eprintln!(
                    "{} record(s) resolved, {} failed validation",
                    outcome.records, outcome.failed
                );
                if outcome.failed > 0 { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Check(args) => match run_check(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
