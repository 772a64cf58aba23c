//! Command handlers
//!
//! Each command runs exactly one check and turns the verdict into a reply.
//! Handlers never see the connection; they only produce a [`CommandResult`].

use crate::config::AppConfig;
use crate::error::ProtocolError;
use crate::error::handlers::{error_to_reply_code, error_to_reply_text};
use crate::protocol::Command;
use crate::protocol::responses::{self, format_response};
use crate::validate::{SignupRejection, check_signup};

/// Outcome status of a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
    CloseConnection,
}

/// Status plus the reply to send back.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub code: u16,
    pub message: String,
}

impl CommandResult {
    fn new(status: CommandStatus, code: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Reply line including the terminator
    pub fn reply(&self) -> String {
        format_response(self.code, &self.message)
    }
}

/// Dispatches a parsed command to its handler.
pub fn handle_command(command: &Command, config: &AppConfig) -> CommandResult {
    match command {
        Command::Email(email) => handle_cmd_email(email, config),
        Command::Password(password) => handle_cmd_password(password, config),
        Command::Signup { email, password } => handle_cmd_signup(email, password, config),
        Command::Noop => CommandResult::new(CommandStatus::Success, responses::OK, "OK"),
        Command::Quit => {
            CommandResult::new(CommandStatus::CloseConnection, responses::GOODBYE, "Goodbye")
        }
    }
}

/// Builds the reply for a line that never became a command.
pub fn handle_protocol_error(err: &ProtocolError) -> CommandResult {
    CommandResult::new(
        CommandStatus::Failure,
        error_to_reply_code(err),
        error_to_reply_text(err),
    )
}

fn handle_cmd_email(email: &str, config: &AppConfig) -> CommandResult {
    if config.email.is_structurally_valid(email) {
        CommandResult::new(CommandStatus::Success, responses::ACCEPTED, "Email accepted")
    } else {
        email_rejected()
    }
}

fn handle_cmd_password(password: &str, config: &AppConfig) -> CommandResult {
    match config.password.check(password) {
        Ok(()) => CommandResult::new(
            CommandStatus::Success,
            responses::ACCEPTED,
            "Password accepted",
        ),
        Err(violation) => CommandResult::new(
            CommandStatus::Failure,
            responses::PASSWORD_REJECTED,
            violation.to_string(),
        ),
    }
}

fn handle_cmd_signup(email: &str, password: &str, config: &AppConfig) -> CommandResult {
    match check_signup(&config.email, &config.password, email, password) {
        Ok(()) => CommandResult::new(CommandStatus::Success, responses::ACCEPTED, "Signup accepted"),
        Err(SignupRejection::Email) => email_rejected(),
        Err(SignupRejection::Password(violation)) => CommandResult::new(
            CommandStatus::Failure,
            responses::PASSWORD_REJECTED,
            violation.to_string(),
        ),
    }
}

fn email_rejected() -> CommandResult {
    CommandResult::new(
        CommandStatus::Failure,
        responses::EMAIL_REJECTED,
        "Email rejected",
    )
}
