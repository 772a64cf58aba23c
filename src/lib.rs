//! account-gate
//!
//! Structural email and password-policy validation used to gate account
//! creation, plus a small line-protocol service exposing the checks.

pub mod config;
pub mod error;
pub mod middleware;
pub mod protocol;
pub mod server;
pub mod validate;

pub use config::AppConfig;
pub use server::Server;
pub use validate::{check_policy, check_signup, is_structurally_valid};
