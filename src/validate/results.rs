//! Validation result types
//!
//! Rejection reasons returned by the password validator and the signup gate.

use std::fmt;

/// The first password rule that was not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordViolation {
    Length { min: usize, max: usize },
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

impl fmt::Display for PasswordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordViolation::Length { min, max } => {
                write!(f, "Need Min {} & Max {} Character length", min, max)
            }
            PasswordViolation::MissingUppercase => write!(f, "Need At least One Upper Character"),
            PasswordViolation::MissingLowercase => write!(f, "Need At least One Lower Character"),
            PasswordViolation::MissingDigit => write!(f, "Need At least One Numeric"),
            PasswordViolation::MissingSpecial => write!(f, "Need At least One Special Character"),
        }
    }
}

impl std::error::Error for PasswordViolation {}

/// Why a signup attempt was turned away before reaching any backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupRejection {
    Email,
    Password(PasswordViolation),
}

impl fmt::Display for SignupRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignupRejection::Email => write!(f, "Email address is not well-formed"),
            SignupRejection::Password(v) => write!(f, "{}", v),
        }
    }
}

impl std::error::Error for SignupRejection {}

impl From<PasswordViolation> for SignupRejection {
    fn from(violation: PasswordViolation) -> Self {
        SignupRejection::Password(violation)
    }
}
