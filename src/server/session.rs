//! Client session
//!
//! Reads one command per line, replies with one line, and closes on QUIT,
//! on idle timeout, or when the client hangs up.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::AppConfig;
use crate::error::ProtocolError;
use crate::error::handlers::log_protocol_error;
use crate::middleware::logging::{log_command, log_disconnect};
use crate::protocol::responses::{self, format_response};
use crate::protocol::{Command, CommandStatus, handle_command, handle_protocol_error, parse_command};

const GREETING: &str = "account-gate ready";

/// Serves one client until it quits, idles out, or disconnects.
pub async fn handle_session(
    stream: TcpStream,
    client_addr: SocketAddr,
    config: Arc<AppConfig>,
) -> Result<(), io::Error> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut buf = Vec::new();
    let idle = config.server.idle_timeout();
    // room for the longest accepted line plus "\r\n"
    let read_limit = config.server.max_line_length as u64 + 2;

    write_half
        .write_all(format_response(responses::READY, GREETING).as_bytes())
        .await?;
    write_half.flush().await?;

    loop {
        buf.clear();
        let mut bounded = (&mut reader).take(read_limit);
        let n = match timeout(idle, bounded.read_until(b'\n', &mut buf)).await {
            Ok(read) => read?,
            Err(_) => {
                let reply = format_response(responses::SERVICE_UNAVAILABLE, "Idle timeout");
                write_half.write_all(reply.as_bytes()).await?;
                log_disconnect(&client_addr, "idle timeout");
                return Ok(());
            }
        };

        if n == 0 {
            log_disconnect(&client_addr, "closed by client");
            return Ok(());
        }

        if n as u64 == read_limit && !buf.ends_with(b"\n") {
            // no terminator within the limit: refuse and close
            let err = ProtocolError::LineTooLong(n);
            log_protocol_error(&client_addr, &err);
            write_half
                .write_all(handle_protocol_error(&err).reply().as_bytes())
                .await?;
            log_disconnect(&client_addr, "unterminated line");
            return Ok(());
        }

        let started = Instant::now();
        let result = match read_command(&buf, config.server.max_line_length) {
            Ok(command) => {
                let result = handle_command(&command, &config);
                log_command(&client_addr, &command, &result, started.elapsed());
                result
            }
            Err(e) => {
                log_protocol_error(&client_addr, &e);
                handle_protocol_error(&e)
            }
        };

        write_half.write_all(result.reply().as_bytes()).await?;

        if result.status == CommandStatus::CloseConnection {
            log_disconnect(&client_addr, "quit");
            return Ok(());
        }
    }
}

/// Strips the line terminator, enforces the length limit and decodes the line.
fn read_command(raw: &[u8], max_line_length: usize) -> Result<Command, ProtocolError> {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    if line.len() > max_line_length {
        return Err(ProtocolError::LineTooLong(line.len()));
    }

    let text = std::str::from_utf8(line).map_err(|_| ProtocolError::InvalidEncoding)?;
    parse_command(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminators_stripped() {
        assert_eq!(read_command(b"NOOP\r\n", 64), Ok(Command::Noop));
        assert_eq!(read_command(b"NOOP\n", 64), Ok(Command::Noop));
        assert_eq!(read_command(b"NOOP", 64), Ok(Command::Noop));
    }

    #[test]
    fn test_trailing_spaces_kept() {
        assert_eq!(
            read_command(b"PASSWORD Secret1! \r\n", 64),
            Ok(Command::Password("Secret1! ".to_string()))
        );
    }

    #[test]
    fn test_line_length_limit() {
        let line = format!("EMAIL {}\r\n", "a".repeat(20));
        assert_eq!(
            read_command(line.as_bytes(), 10),
            Err(ProtocolError::LineTooLong(26))
        );
        assert!(read_command(line.as_bytes(), 26).is_ok());
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(
            read_command(b"EMAIL \xff\xfe@b.co\r\n", 64),
            Err(ProtocolError::InvalidEncoding)
        );
    }
}
