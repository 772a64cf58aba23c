//! Validation line protocol
//!
//! Handles command parsing, dispatch to the validators, and reply formatting.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::{Command, parse_command};
pub use handlers::{CommandResult, CommandStatus, handle_command, handle_protocol_error};
