//! Password policy validation
//!
//! One length check, then a single pass over the characters collecting which
//! classes are present. Only the first unmet rule is reported, in the order
//! uppercase, lowercase, digit, special.

use serde::Deserialize;
use std::sync::LazyLock;

use super::classifier::{CharKind, SpecialSet, classify, is_lower, is_upper};
use super::results::PasswordViolation;

/// Characters that satisfy the "special" requirement.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

static DEFAULT_POLICY: LazyLock<PasswordPolicy> = LazyLock::new(PasswordPolicy::default);

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub specials: SpecialSet,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 64,
            specials: SpecialSet::new(PASSWORD_SPECIALS),
        }
    }
}

/// Checks `password` against the default policy.
///
/// Returns `(true, "")` on success, otherwise `(false, reason)`.
pub fn check_policy(password: &str) -> (bool, String) {
    DEFAULT_POLICY.verdict(password)
}

impl PasswordPolicy {
    pub fn check(&self, password: &str) -> Result<(), PasswordViolation> {
        let len = password.len();
        if len < self.min_length || len > self.max_length {
            return Err(PasswordViolation::Length {
                min: self.min_length,
                max: self.max_length,
            });
        }

        let mut has_upper = false;
        let mut has_lower = false;
        let mut has_digit = false;
        let mut has_special = false;

        for c in password.chars() {
            if is_upper(c) {
                has_upper = true;
            } else if is_lower(c) {
                has_lower = true;
            } else {
                match classify(c, &self.specials) {
                    CharKind::Digit => has_digit = true,
                    CharKind::Special => has_special = true,
                    _ => {}
                }
            }
        }

        if !has_upper {
            return Err(PasswordViolation::MissingUppercase);
        }
        if !has_lower {
            return Err(PasswordViolation::MissingLowercase);
        }
        if !has_digit {
            return Err(PasswordViolation::MissingDigit);
        }
        if !has_special {
            return Err(PasswordViolation::MissingSpecial);
        }

        Ok(())
    }

    /// Flattens [`check`](Self::check) into a verdict and reason string.
    pub fn verdict(&self, password: &str) -> (bool, String) {
        match self.check(password) {
            Ok(()) => (true, String::new()),
            Err(violation) => (false, violation.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert_eq!(check_policy("ValidPass1!"), (true, String::new()));
        assert_eq!(check_policy("Passw0rd@home"), (true, String::new()));
        assert_eq!(check_policy("Pass word1!"), (true, String::new()));
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            check_policy("short1!"),
            (false, "Need Min 8 & Max 64 Character length".to_string())
        );
        assert_eq!(
            check_policy(""),
            (false, "Need Min 8 & Max 64 Character length".to_string())
        );

        let max = format!("Aa1!{}", "x".repeat(60));
        assert_eq!(max.len(), 64);
        assert!(check_policy(&max).0);

        let over = format!("Aa1!{}", "x".repeat(61));
        assert_eq!(
            PasswordPolicy::default().check(&over),
            Err(PasswordViolation::Length { min: 8, max: 64 })
        );
    }

    #[test]
    fn test_missing_classes() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.check("alllowercase1!"),
            Err(PasswordViolation::MissingUppercase)
        );
        assert_eq!(
            policy.check("ALLUPPERCASE1!"),
            Err(PasswordViolation::MissingLowercase)
        );
        assert_eq!(policy.check("NoDigitsHere!"), Err(PasswordViolation::MissingDigit));
        assert_eq!(policy.check("NoSpecial123"), Err(PasswordViolation::MissingSpecial));
    }

    #[test]
    fn test_only_decimal_digits_count() {
        assert_eq!(
            check_policy("Password!²"),
            (false, "Need At least One Numeric".to_string())
        );
        assert_eq!(
            check_policy("Password!½Ⅻ"),
            (false, "Need At least One Numeric".to_string())
        );
        // other decimal scripts still count
        assert_eq!(check_policy("Password!٣"), (true, String::new()));
    }

    #[test]
    fn test_first_violation_wins() {
        // missing upper, digit and special at once
        assert_eq!(
            check_policy("lowercaseonly"),
            (false, "Need At least One Upper Character".to_string())
        );
        // missing lower and special
        assert_eq!(
            check_policy("UPPER12345"),
            (false, "Need At least One Lower Character".to_string())
        );
    }

    #[test]
    fn test_special_set_differs_from_email() {
        let policy = PasswordPolicy::default();
        // '~' is special for email local parts but not here
        assert_eq!(policy.check("Password1~"), Err(PasswordViolation::MissingSpecial));
        // '@' is the reverse
        assert_eq!(policy.check("Password1@"), Ok(()));
    }

    #[test]
    fn test_custom_policy() {
        let policy = PasswordPolicy {
            min_length: 4,
            max_length: 10,
            specials: SpecialSet::new("~"),
        };
        assert_eq!(policy.check("Ab1~"), Ok(()));
        assert_eq!(policy.check("Ab1!"), Err(PasswordViolation::MissingSpecial));
        assert_eq!(
            policy.verdict("Ab1"),
            (false, "Need Min 4 & Max 10 Character length".to_string())
        );
    }

    #[test]
    fn test_deterministic() {
        for password in ["ValidPass1!", "short1!", "alllowercase1!"] {
            assert_eq!(check_policy(password), check_policy(password));
        }
    }
}
