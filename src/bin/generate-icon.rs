//! Render the app icon from a short text.

use std::process::ExitCode;

use clap::Parser;
use pwa_tools::cli::common::{failure_exit, init_output, parse_error_exit};
use pwa_tools::cli::{IconCli, icon};

fn main() -> ExitCode {
    let cli = match IconCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_error_exit(&err),
    };
    init_output(&cli.common);

    match icon::generate_icons(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => failure_exit("icon generation failed", &err),
    }
}
