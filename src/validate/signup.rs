//! Signup gate
//!
//! Both validators must pass before an account request goes anywhere.

use super::email::EmailRules;
use super::password::PasswordPolicy;
use super::results::SignupRejection;

/// Checks the email, then the password, and reports the first rejection.
pub fn check_signup(
    rules: &EmailRules,
    policy: &PasswordPolicy,
    email: &str,
    password: &str,
) -> Result<(), SignupRejection> {
    if !rules.is_structurally_valid(email) {
        return Err(SignupRejection::Email);
    }

    policy.check(password)?;
    Ok(())
}
