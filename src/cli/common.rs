//! Shared helpers for the command entry points.

use std::process::ExitCode;

use clap::{ColorChoice, error::ErrorKind};

use super::CommonArgs;
use crate::logger;

/// Apply output options before any logging happens.
pub fn init_output(args: &CommonArgs) {
    match args.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(args.verbose);
}

/// Print a clap error (usage, help or version) and pick the exit status.
///
/// Help and version requests succeed; every other parse error exits with 1.
pub fn parse_error_exit(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    ExitCode::from(parse_error_code(err.kind()))
}

fn parse_error_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Report a failed run with its full cause chain.
pub fn failure_exit(summary: &str, err: &anyhow::Error) -> ExitCode {
    logger::status_error(summary, &format!("{err:#}"));
    ExitCode::FAILURE
}
