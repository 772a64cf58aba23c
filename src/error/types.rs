//! Error types
//!
//! Infrastructure errors for the service and protocol errors for a single
//! command line. Validation rejections are not errors here; they live in
//! `validate::results`.

use std::fmt;
use std::io;

/// Errors that stop the server from starting or serving.
#[derive(Debug)]
pub enum ServerError {
    Config(config::ConfigError),
    Bind(String, io::Error),
    Io(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::Bind(addr, e) => write!(f, "Failed to bind to {}: {}", addr, e),
            ServerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::Io(error)
    }
}

/// Errors raised while turning a client line into a command.
#[derive(Debug, PartialEq, Eq)]
pub enum ProtocolError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    LineTooLong(usize),
    InvalidEncoding,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnknownCommand(c) => write!(f, "Unknown command: {}", c),
            ProtocolError::MissingArgument(c) => write!(f, "Missing argument for {}", c),
            ProtocolError::LineTooLong(len) => write!(f, "Line too long: {} bytes", len),
            ProtocolError::InvalidEncoding => write!(f, "Line is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ProtocolError {}
