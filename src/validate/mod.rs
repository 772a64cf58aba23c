//! Input validation engine
//!
//! Structural email syntax checks and password policy checks used to gate
//! account creation. Everything here is pure: no I/O, no shared state.

pub mod classifier;
pub mod email;
pub mod password;
pub mod results;
pub mod signup;

pub use classifier::{CharKind, SpecialSet, classify};
pub use email::{EmailRules, is_structurally_valid};
pub use password::{PasswordPolicy, check_policy};
pub use results::{PasswordViolation, SignupRejection};
pub use signup::check_signup;
