//! CLI command implementations
//!
//! `init` seeds the collection document so a fresh deployment does not fail
//! its first read; `serve` boots the tokio runtime and the HTTP server.

use std::path::PathBuf;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store::JsonFileStore;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { store } => init(store),
        Command::Serve { host, port, store } => serve(host, port, store),
    }
}

/// Seed an empty collection document at the given path
pub fn init(store: PathBuf) -> CliResult<()> {
    let file_store = JsonFileStore::new(store);
    file_store.init()?;
    Logger::info(
        "STORE_INIT",
        &[("path", &file_store.path().display().to_string())],
    );
    Ok(())
}

/// Start the HTTP server and block until it exits
pub fn serve(host: String, port: u16, store: PathBuf) -> CliResult<()> {
    let config = HttpServerConfig {
        host,
        port,
        store_path: store,
    };
    let server = HttpServer::with_config(config);

    let runtime = tokio::runtime::Runtime::new().map_err(|e| CliError::Server(e.to_string()))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::Server(e.to_string()))
}
