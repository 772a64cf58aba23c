//! Structural email syntax validation
//!
//! Splits a candidate at its last `@` and scans the local part and the domain
//! part independently. Only well-formedness is checked: no lookups, no
//! normalization. All lengths are byte lengths.

use serde::Deserialize;
use std::net::IpAddr;
use std::sync::LazyLock;

use super::classifier::{CharKind, SpecialSet, classify, is_alphanumeric};

/// Characters allowed unquoted in a local part besides letters and digits.
pub const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~.";

const IPV6_TAG: &str = "IPv6:";

static DEFAULT_RULES: LazyLock<EmailRules> = LazyLock::new(EmailRules::default);

/// Grammar bounds and the local-part special set used by the email validator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailRules {
    pub local_specials: SpecialSet,
    pub min_length: usize,
    pub max_length: usize,
    pub max_local_length: usize,
    pub max_domain_length: usize,
    pub max_label_length: usize,
    pub min_tld_length: usize,
}

impl Default for EmailRules {
    fn default() -> Self {
        Self {
            local_specials: SpecialSet::new(LOCAL_SPECIALS),
            min_length: 3,
            max_length: 254,
            max_local_length: 64,
            max_domain_length: 253,
            max_label_length: 63,
            min_tld_length: 2,
        }
    }
}

/// Checks `candidate` against the default rules.
pub fn is_structurally_valid(candidate: &str) -> bool {
    DEFAULT_RULES.is_structurally_valid(candidate)
}

impl EmailRules {
    /// Returns true when `candidate` is a well-formed address under these rules.
    pub fn is_structurally_valid(&self, candidate: &str) -> bool {
        if candidate.len() < self.min_length || candidate.len() > self.max_length {
            return false;
        }

        let Some(at) = candidate.rfind('@') else {
            return false;
        };
        if at == 0 || at == candidate.len() - 1 {
            return false;
        }

        let (local, domain) = (&candidate[..at], &candidate[at + 1..]);
        self.is_valid_local_part(local) && self.is_valid_domain_part(domain)
    }

    /// Scans the local part with an explicit cursor.
    ///
    /// Inside a quoted span a backslash consumes the following character
    /// without validating it, so the cursor has to be able to jump by two.
    fn is_valid_local_part(&self, local: &str) -> bool {
        if local.is_empty() || local.len() > self.max_local_length {
            return false;
        }

        let chars: Vec<char> = local.chars().collect();
        let mut in_quoted_span = false;
        let mut previous: Option<char> = None;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            match classify(c, &self.local_specials) {
                CharKind::Letter | CharKind::Digit | CharKind::Special => {}
                CharKind::Other if c == '\\' && in_quoted_span => {
                    let Some(&escaped) = chars.get(i + 1) else {
                        return false;
                    };
                    previous = Some(escaped);
                    i += 2;
                    continue;
                }
                CharKind::Other if c == '"' => {
                    if i == 0 || chars[i - 1] == '\\' {
                        in_quoted_span = !in_quoted_span;
                    } else {
                        return false;
                    }
                }
                CharKind::Other if !in_quoted_span => return false,
                CharKind::Other => {}
            }

            if c == '.' && previous == Some('.') {
                return false;
            }

            previous = Some(c);
            i += 1;
        }

        // A quoted span still open at this point is not an error.
        !self.local_specials.trim(local).is_empty()
    }

    fn is_valid_domain_part(&self, domain: &str) -> bool {
        if domain.is_empty() || domain.len() > self.max_domain_length {
            return false;
        }

        if let Some(literal) = domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
            return is_valid_ip_literal(literal);
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return false;
        }

        if !labels.iter().all(|label| self.is_valid_label(label)) {
            return false;
        }

        labels
            .last()
            .is_some_and(|tld| tld.len() >= self.min_tld_length)
    }

    /// Letters, digits and hyphens, with an alphanumeric first and last character.
    fn is_valid_label(&self, label: &str) -> bool {
        if label.is_empty() || label.len() > self.max_label_length {
            return false;
        }

        let starts_ok = label.chars().next().is_some_and(is_alphanumeric);
        let ends_ok = label.chars().next_back().is_some_and(is_alphanumeric);

        starts_ok && ends_ok && label.chars().all(|c| is_alphanumeric(c) || c == '-')
    }
}

fn is_valid_ip_literal(literal: &str) -> bool {
    let address = literal.strip_prefix(IPV6_TAG).unwrap_or(literal);
    address.parse::<IpAddr>().is_ok()
}
