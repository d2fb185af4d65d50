//! hello-md CLI
//!
//! Writes `hello_world_<YYYYMMDD>_<HHMMSS>.md` into the current directory
//! and reports its name.

mod cli_types;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::cli_types::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run() {
        Ok(filename) => {
            println!("Created file: {filename}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                "Error:".if_supports_color(Stderr, |t| t.red()),
                e
            );
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, CliError> {
    let filename = hello_md_lib::create_hello_world_file()?;
    log::debug!("Created {filename}");
    Ok(filename)
}
