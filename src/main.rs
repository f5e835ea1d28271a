// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use batch_files::app;
use batch_files::cli::Args;
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();

    match app::run(args) {
        Ok(true) => ExitCode::SUCCESS,
        // Keep-going run with recorded failures: report emitted, exit non-zero.
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
