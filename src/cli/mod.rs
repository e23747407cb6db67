//! Command-line interface.

pub mod args;
pub mod build;

pub use args::Cli;
