//! CLI entry point for library building and mosaic composition

use clap::Parser;
use photomosaic::io::cli::{Cli, CommandRunner};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match CommandRunner::new(cli).run() {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported by the runner
        Err(_) => ExitCode::FAILURE,
    }
}
