//! Configuration management for account-gate
//!
//! Server settings plus one rules record per validator. Values come from an
//! optional `config.toml` layered under `ACCOUNT_GATE_*` environment variables;
//! every field has a default.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::validate::{EmailRules, PasswordPolicy};

const DEFAULT_CONFIG_NAME: &str = "config";
const ENV_PREFIX: &str = "ACCOUNT_GATE";

/// Complete service configuration
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub email: EmailRules,
    pub password: PasswordPolicy,
}

/// Listener and connection settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Environment: ACCOUNT_GATE_SERVER__BIND_ADDRESS
    pub bind_address: String,

    /// Environment: ACCOUNT_GATE_SERVER__PORT
    pub port: u16,

    /// Maximum concurrent connections
    pub max_clients: usize,

    /// Longest accepted command line in bytes, terminator excluded
    pub max_line_length: usize,

    pub idle_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 2626,
            max_clients: 64,
            max_line_length: 1024,
            idle_timeout_secs: 300,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path` (or `./config.toml` if present) with
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = Config::builder().add_source(file).add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Parse configuration from TOML text alone, without environment overrides.
    pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        Self::finish(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        let settings = builder.build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.server.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.server.max_clients == 0 {
            return Err(config::ConfigError::Message(
                "max_clients must be greater than 0".into(),
            ));
        }

        if self.server.max_line_length == 0 {
            return Err(config::ConfigError::Message(
                "max_line_length must be greater than 0".into(),
            ));
        }

        if self.server.idle_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "idle_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.password.min_length > self.password.max_length {
            return Err(config::ConfigError::Message(
                "password.min_length must not exceed password.max_length".into(),
            ));
        }

        if self.password.specials.is_empty() || self.email.local_specials.is_empty() {
            return Err(config::ConfigError::Message(
                "special character sets cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl ServerConfig {
    /// Bind address and port as a socket address string
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::password::PASSWORD_SPECIALS;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.server.port, 2626);
        assert_eq!(config.server.max_line_length, 1024);
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.password.max_length, 64);
        assert_eq!(config.password.specials.as_str(), PASSWORD_SPECIALS);
        assert_eq!(config.email.max_length, 254);
    }

    #[test]
    fn test_sections_override_defaults() {
        let toml = r#"
            [server]
            bind_address = "0.0.0.0"
            port = 4000

            [password]
            min_length = 12
            specials = "!?"
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.server.listen_socket(), "0.0.0.0:4000");
        assert_eq!(config.server.max_clients, 64);
        assert_eq!(config.password.min_length, 12);
        assert_eq!(config.password.max_length, 64);
        assert!(config.password.specials.contains('?'));
        assert!(!config.password.specials.contains('@'));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(AppConfig::from_toml("[server]\nport = 0").is_err());
        assert!(AppConfig::from_toml("[server]\nmax_clients = 0").is_err());
        assert!(AppConfig::from_toml("[password]\nmin_length = 65").is_err());
        assert!(AppConfig::from_toml("[email]\nlocal_specials = \"\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = Path::new("definitely/not/here/config.toml");
        assert!(AppConfig::load(Some(path)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "account_gate_config_{}_{}.toml",
            std::process::id(),
            nanos
        ));
        std::fs::write(&path, "[server]\nidle_timeout_secs = 5\n").unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.server.idle_timeout(), Duration::from_secs(5));

        std::fs::remove_file(&path).unwrap();
    }
}
