//! String format checkers for form fields
//!
//! Formats give semantic meaning to string fields beyond plain required
//! checks. Syntax is checked with lazily compiled regular expressions.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// String format types validated by the form schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    /// Email address
    ///
    /// Standard `local@domain.tld` syntax; no quoting or comments.
    Email,
}

impl StringFormat {
    /// Get the string representation of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            StringFormat::Email => "email",
        }
    }

    /// Check whether a value satisfies this format
    ///
    /// Empty values are out of scope here; requiredness is a separate rule.
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            StringFormat::Email => email_regex().is_match(value),
        }
    }
}

impl std::fmt::Display for StringFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
            .expect("email regex is valid")
    })
}
