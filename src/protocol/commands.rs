//! Module `commands`
//!
//! Turns one client line into a [`Command`]. Arguments are handed to the
//! validators exactly as received, so nothing after the command word is
//! trimmed.

use std::fmt;

use crate::error::ProtocolError;

/// A command parsed from one client line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Email(String),
    Password(String),
    Signup { email: String, password: String },
    Noop,
    Quit,
}

impl Command {
    /// Command keyword as sent on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Command::Email(_) => "EMAIL",
            Command::Password(_) => "PASSWORD",
            Command::Signup { .. } => "SIGNUP",
            Command::Noop => "NOOP",
            Command::Quit => "QUIT",
        }
    }
}

/// Log-safe rendering: passwords never appear.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Email(email) => write!(f, "EMAIL {}", email),
            Command::Password(_) => write!(f, "PASSWORD ****"),
            Command::Signup { email, .. } => write!(f, "SIGNUP {} ****", email),
            Command::Noop | Command::Quit => write!(f, "{}", self.name()),
        }
    }
}

/// Parses a line (terminator already removed) into a `Command`.
///
/// The command word is case-insensitive and separated from its argument by
/// the first space.
pub fn parse_command(raw: &str) -> Result<Command, ProtocolError> {
    let line = raw.trim_start();
    let (word, arg) = match line.split_once(' ') {
        Some((word, arg)) => (word, arg),
        None => (line, ""),
    };

    match word.to_ascii_uppercase().as_str() {
        "EMAIL" if !arg.is_empty() => Ok(Command::Email(arg.to_string())),
        "EMAIL" => Err(ProtocolError::MissingArgument("EMAIL")),
        "PASSWORD" if !arg.is_empty() => Ok(Command::Password(arg.to_string())),
        "PASSWORD" => Err(ProtocolError::MissingArgument("PASSWORD")),
        "SIGNUP" => parse_signup(arg),
        "NOOP" => Ok(Command::Noop),
        "QUIT" => Ok(Command::Quit),
        _ => Err(ProtocolError::UnknownCommand(word.to_string())),
    }
}

/// `SIGNUP <email> <password>`, split at the last space.
fn parse_signup(arg: &str) -> Result<Command, ProtocolError> {
    match arg.rsplit_once(' ') {
        Some((email, password)) if !email.is_empty() && !password.is_empty() => {
            Ok(Command::Signup {
                email: email.to_string(),
                password: password.to_string(),
            })
        }
        _ => Err(ProtocolError::MissingArgument("SIGNUP")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("NOOP"), Ok(Command::Noop));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("  Noop"), Ok(Command::Noop));
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(
            parse_command("EMAIL a@b.co"),
            Ok(Command::Email("a@b.co".to_string()))
        );
        assert_eq!(
            parse_command("password ValidPass1!"),
            Ok(Command::Password("ValidPass1!".to_string()))
        );
        assert_eq!(
            parse_command("SIGNUP a@b.co ValidPass1!"),
            Ok(Command::Signup {
                email: "a@b.co".to_string(),
                password: "ValidPass1!".to_string(),
            })
        );
    }

    #[test]
    fn test_arguments_are_not_trimmed() {
        assert_eq!(
            parse_command("PASSWORD  Pass word1! "),
            Ok(Command::Password(" Pass word1! ".to_string()))
        );
        assert_eq!(
            parse_command("EMAIL \"john doe@example.com"),
            Ok(Command::Email("\"john doe@example.com".to_string()))
        );
    }

    #[test]
    fn test_signup_splits_on_last_space() {
        assert_eq!(
            parse_command("SIGNUP \"john doe@example.com Secret1!"),
            Ok(Command::Signup {
                email: "\"john doe@example.com".to_string(),
                password: "Secret1!".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(
            parse_command("EMAIL"),
            Err(ProtocolError::MissingArgument("EMAIL"))
        );
        assert_eq!(
            parse_command("PASSWORD "),
            Err(ProtocolError::MissingArgument("PASSWORD"))
        );
        assert_eq!(
            parse_command("SIGNUP a@b.co"),
            Err(ProtocolError::MissingArgument("SIGNUP"))
        );
        assert_eq!(
            parse_command("SIGNUP a@b.co "),
            Err(ProtocolError::MissingArgument("SIGNUP"))
        );
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(
            parse_command("USER bob"),
            Err(ProtocolError::UnknownCommand("USER".to_string()))
        );
        assert_eq!(
            parse_command(""),
            Err(ProtocolError::UnknownCommand("".to_string()))
        );
    }

    #[test]
    fn test_display_masks_passwords() {
        let cmd = parse_command("SIGNUP a@b.co Secret1!").unwrap();
        assert_eq!(cmd.to_string(), "SIGNUP a@b.co ****");
        let cmd = parse_command("PASSWORD Secret1!").unwrap();
        assert!(!cmd.to_string().contains("Secret1!"));
    }
}
