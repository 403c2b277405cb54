//! CLI module for catalogd
//!
//! Provides the command-line interface:
//! - init: Write a default configuration file
//! - start: Boot the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start, Config};
pub use errors::{CliError, CliResult};
