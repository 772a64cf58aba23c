//! Character classification
//!
//! Shared by both validators. Each validator brings its own special set.

use serde::Deserialize;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Which class a single character falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    Letter,
    Digit,
    Special,
    Other,
}

/// Immutable set of characters a validator treats as "special".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SpecialSet(String);

impl SpecialSet {
    pub fn new(chars: impl Into<String>) -> Self {
        Self(chars.into())
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(c)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strips members of the set from both ends of `s`.
    pub fn trim<'a>(&self, s: &'a str) -> &'a str {
        s.trim_matches(|c: char| self.contains(c))
    }
}

/// Any character in a letter category (Lu, Ll, Lt, Lm, Lo).
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Decimal digits only (Nd). Fractions, superscripts and numerals are not digits.
pub fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

pub fn is_upper(c: char) -> bool {
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

pub fn is_lower(c: char) -> bool {
    get_general_category(c) == GeneralCategory::LowercaseLetter
}

pub fn is_alphanumeric(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// Classifies `c`, checking letter, then digit, then set membership.
pub fn classify(c: char, specials: &SpecialSet) -> CharKind {
    if is_letter(c) {
        CharKind::Letter
    } else if is_digit(c) {
        CharKind::Digit
    } else if specials.contains(c) {
        CharKind::Special
    } else {
        CharKind::Other
    }
}
