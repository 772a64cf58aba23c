//! Reply handling
//!
//! Defines reply codes and formatting.

pub const OK: u16 = 200;
pub const GOODBYE: u16 = 221;
pub const READY: u16 = 220;
pub const ACCEPTED: u16 = 250;
pub const SERVICE_UNAVAILABLE: u16 = 421;
pub const SYNTAX_ERROR: u16 = 500;
pub const ARGUMENT_ERROR: u16 = 501;
pub const EMAIL_REJECTED: u16 = 550;
pub const PASSWORD_REJECTED: u16 = 552;

/// Format a reply line
pub fn format_response(code: u16, message: &str) -> String {
    format!("{} {}\r\n", code, message)
}
