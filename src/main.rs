//! account-gate - Entry Point
//!
//! Serves the email and password checks over a line protocol.

use log::info;
use std::path::PathBuf;
use std::process;

use account_gate::error::handlers::handle_error;
use account_gate::error::ServerError;
use account_gate::{AppConfig, Server};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    // Optional explicit config path, otherwise ./config.toml if present
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    if let Err(e) = run(config_path).await {
        handle_error(&e);
        process::exit(1);
    }
}

async fn run(config_path: Option<PathBuf>) -> Result<(), ServerError> {
    let config = AppConfig::load(config_path.as_deref())?;

    info!("Launching account-gate...");

    let server = Server::bind(config).await?;
    server.run().await
}
