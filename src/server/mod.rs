//! Server core functionality
//!
//! The listener, its accept loop, and the per-connection session.

pub mod core;
pub mod session;

pub use core::Server;
