//! Inlay - asset inliner for HTML print templates.
//!
//! Rewrites every `.html` template under a directory so images and the
//! shared stylesheet are embedded in the document text. The output is
//! self-contained HTML ready for a headless-browser PDF step.

mod asset;
mod cli;
mod config;
mod error;
mod logger;
mod report;
mod rewrite;
mod scan;
mod utils;

use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use cli::Cli;
use config::BuildConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = match BuildConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            log!("error"; "{e:#}");
            return ExitCode::FAILURE;
        }
    };

    match cli::build::build_templates(&config) {
        Ok(report) if report.error_count() == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            log!("error"; "{e:#}");
            ExitCode::FAILURE
        }
    }
}
