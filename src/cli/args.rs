//! CLI argument definitions using clap
//!
//! Commands:
//! - expensedb serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// expensedb - An in-memory expense record server with a grid-style query engine
#[derive(Parser, Debug)]
#[command(name = "expensedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed the store and start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./expensedb.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
