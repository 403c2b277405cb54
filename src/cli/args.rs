//! CLI argument definitions using clap
//!
//! Commands:
//! - catalogd init --config <path>
//! - catalogd start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// catalogd - read-only product catalog API with library record management
#[derive(Parser, Debug)]
#[command(name = "catalogd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./catalogd.json")]
        config: PathBuf,
    },

    /// Start the catalogd server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./catalogd.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
