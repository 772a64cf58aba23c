//! Logging middleware
//!
//! One line per connection event and one per command, with the reply code
//! and how long the command took. Commands are logged through their
//! `Display` impl, which masks passwords.

use log::{info, warn};
use std::net::SocketAddr;
use std::time::Duration;

use crate::protocol::{Command, CommandResult, CommandStatus};

/// Log a client connection
pub fn log_connection(client_addr: &SocketAddr) {
    info!("Client connected: {}", client_addr);
}

/// Log a client disconnect
pub fn log_disconnect(client_addr: &SocketAddr, reason: &str) {
    info!("Client {} disconnected: {}", client_addr, reason);
}

/// Log a connection refused because the server is full
pub fn log_rejected_connection(client_addr: &SocketAddr, max_clients: usize) {
    warn!(
        "Refusing client {}: limit of {} clients reached",
        client_addr, max_clients
    );
}

/// Log a handled command with its outcome
pub fn log_command(
    client_addr: &SocketAddr,
    command: &Command,
    result: &CommandResult,
    latency: Duration,
) {
    let outcome = match result.status {
        CommandStatus::Failure => "rejected",
        CommandStatus::Success | CommandStatus::CloseConnection => "ok",
    };
    info!(
        "client={} command=\"{}\" code={} outcome={} latency={:?}",
        client_addr, command, result.code, outcome, latency
    );
}
