//! Declarative form validation
//!
//! A [`ValidationSchema`] is a rule set: per-field predicate rules plus
//! cross-field equality rules. Evaluation is eager — every rule is checked
//! and every violation is reported, so the UI can display all errors at
//! once rather than only the first.
//!
//! # Example
//!
//! ```rust
//! use app_core::validation::ValidationSchema;
//! use app_state::form::RegisterFormState;
//!
//! let schema = ValidationSchema::registration();
//! let form = RegisterFormState {
//!     email: "a@b.com".to_string(),
//!     password: "x".to_string(),
//!     confirm_password: "x".to_string(),
//!     ..Default::default()
//! };
//! assert!(schema.validate(&form).is_empty());
//! ```

use crate::formats::StringFormat;
use app_state::form::{RegisterField, RegisterFormState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A single rule violation, keyed by the offending field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// The field that violated a rule
    pub field: RegisterField,
    /// Human-readable violation message
    pub message: String,
}

impl ValidationError {
    /// Create a validation error
    pub fn new(field: RegisterField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Per-field rule: requiredness and optional format check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    field: RegisterField,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<StringFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format_message: Option<String>,
}

impl FieldRule {
    /// Create a rule for a field with no constraints
    pub fn new(field: RegisterField) -> Self {
        Self {
            field,
            required_message: None,
            format: None,
            format_message: None,
        }
    }

    /// Require the field to be non-empty
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    /// Require non-empty values to match a string format
    pub fn format(mut self, format: StringFormat, message: impl Into<String>) -> Self {
        self.format = Some(format);
        self.format_message = Some(message.into());
        self
    }
}

/// Cross-field rule: a field must equal another field
///
/// Only applies when the field is non-empty; emptiness is the field rule's
/// concern and reports the required message instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct MatchRule {
    field: RegisterField,
    other: RegisterField,
    message: String,
}

/// Declarative rule set classifying a form snapshot as valid or listing
/// its violations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSchema {
    fields: Vec<FieldRule>,
    matches: Vec<MatchRule>,
}

impl ValidationSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a per-field rule
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// Add a cross-field equality rule
    pub fn matches(
        mut self,
        field: RegisterField,
        other: RegisterField,
        message: impl Into<String>,
    ) -> Self {
        self.matches.push(MatchRule {
            field,
            other,
            message: message.into(),
        });
        self
    }

    /// The registration form schema
    pub fn registration() -> Self {
        Self::new()
            .rule(
                FieldRule::new(RegisterField::Email)
                    .required("email required")
                    .format(StringFormat::Email, "invalid email"),
            )
            .rule(FieldRule::new(RegisterField::Password).required("password required"))
            .rule(FieldRule::new(RegisterField::ConfirmPassword).required("confirm your password"))
            .matches(
                RegisterField::ConfirmPassword,
                RegisterField::Password,
                "passwords do not match",
            )
    }

    /// Validate a form snapshot against every rule
    ///
    /// Returns all violations in field declaration order; an empty vector
    /// means the snapshot is valid. Evaluation is deterministic: the same
    /// snapshot always yields the same sequence.
    pub fn validate(&self, state: &RegisterFormState) -> Vec<ValidationError> {
        let mut violations = Vec::new();

        for rule in &self.fields {
            let value = state.field(rule.field);

            if value.is_empty() {
                if let Some(message) = &rule.required_message {
                    violations.push(ValidationError::new(rule.field, message.clone()));
                }
            } else if let (Some(format), Some(message)) = (&rule.format, &rule.format_message) {
                if !format.is_valid(value) {
                    violations.push(ValidationError::new(rule.field, message.clone()));
                }
            }

            // Cross-field rules report after the field's own rules
            for m in self.matches.iter().filter(|m| m.field == rule.field) {
                let value = state.field(m.field);
                if !value.is_empty() && value != state.field(m.other) {
                    violations.push(ValidationError::new(m.field, m.message.clone()));
                }
            }
        }

        violations
    }

    /// Collapse an ordered violation sequence into a field-to-message map
    ///
    /// The last message per field wins, matching how the error mapping is
    /// displayed next to each input.
    pub fn collapse(violations: &[ValidationError]) -> HashMap<RegisterField, String> {
        let mut errors = HashMap::new();
        for violation in violations {
            errors.insert(violation.field, violation.message.clone());
        }
        errors
    }
}
