//! CLI command implementations
//!
//! `serve` loads configuration, seeds the store with synthetic records, and
//! blocks on the HTTP server.

use std::path::Path;

use crate::api::ApiServer;
use crate::config::ServerConfig;
use crate::observability::{Logger, Severity};
use crate::store::{generate_expenses, ExpenseStore};

use super::args::Command;
use super::errors::CliResult;

/// Dispatches a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => serve(&config, port),
    }
}

fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = ServerConfig::load(config_path)?;
    if let Some(port) = port_override {
        config.port = port;
    }

    let store = ExpenseStore::with_records(generate_expenses(config.seed_count));
    Logger::log(
        Severity::Info,
        "store_seeded",
        &[("records", &store.len().to_string())],
    );

    let server = ApiServer::with_config(config, store);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}
