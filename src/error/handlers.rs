//! Error handlers
//!
//! Maps errors onto reply codes and logs them.

use crate::error::types::{ProtocolError, ServerError};
use crate::protocol::responses;
use log::{error, warn};
use std::net::SocketAddr;

/// Log a fatal server error
pub fn handle_error(err: &ServerError) {
    error!("Server error: {}", err);
}

/// Log a protocol error for a client
pub fn log_protocol_error(client_addr: &SocketAddr, err: &ProtocolError) {
    warn!("Client {} sent a bad line: {}", client_addr, err);
}

/// Convert a protocol error to a reply code
pub fn error_to_reply_code(err: &ProtocolError) -> u16 {
    match err {
        ProtocolError::UnknownCommand(_) => responses::SYNTAX_ERROR,
        ProtocolError::MissingArgument(_) => responses::ARGUMENT_ERROR,
        ProtocolError::LineTooLong(_) => responses::SYNTAX_ERROR,
        ProtocolError::InvalidEncoding => responses::SYNTAX_ERROR,
    }
}

/// Reply text sent back for a protocol error
pub fn error_to_reply_text(err: &ProtocolError) -> &'static str {
    match err {
        ProtocolError::UnknownCommand(_) => "Unknown command",
        ProtocolError::MissingArgument(_) => "Syntax error in arguments",
        ProtocolError::LineTooLong(_) => "Line too long",
        ProtocolError::InvalidEncoding => "Line is not valid UTF-8",
    }
}
