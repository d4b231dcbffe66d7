//! Refresh cache-busting markers in the HTML entry page.

use std::process::ExitCode;

use clap::Parser;
use pwa_tools::cli::common::{failure_exit, init_output, parse_error_exit};
use pwa_tools::cli::{VersionCli, version};

fn main() -> ExitCode {
    let cli = match VersionCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_error_exit(&err),
    };
    init_output(&cli.common);

    // A missing HTML file has already been reported and is not fatal.
    match version::update_version(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => failure_exit("version update failed", &err),
    }
}
