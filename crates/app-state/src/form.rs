//! Registration form state
//!
//! This module holds the state for the registration screen: the current
//! field values, the field-to-error mapping, and the password visibility
//! toggle. State is updated exclusively through [`FormAction`]s applied by
//! a pure reducer, with [`FormStore`] as the single owning writer.
//!
//! The state is created fresh when the screen mounts and dropped when the
//! user navigates away; nothing here outlives its screen.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fields of the registration form
///
/// The serialized names (`email`, `password`, `confirmPassword`) are the
/// canonical keys of the error mapping; display logic relies on them to
/// associate messages with inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegisterField {
    /// Email address
    Email,
    /// Password
    Password,
    /// Password confirmation
    ConfirmPassword,
}

impl RegisterField {
    /// Get the canonical field name used for error keying
    pub fn as_str(&self) -> &'static str {
        match self {
            RegisterField::Email => "email",
            RegisterField::Password => "password",
            RegisterField::ConfirmPassword => "confirmPassword",
        }
    }

    /// Parse a field from its canonical name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "email" => Some(RegisterField::Email),
            "password" => Some(RegisterField::Password),
            "confirmPassword" => Some(RegisterField::ConfirmPassword),
            _ => None,
        }
    }

    /// All fields in display order
    pub fn all() -> [RegisterField; 3] {
        [
            RegisterField::Email,
            RegisterField::Password,
            RegisterField::ConfirmPassword,
        ]
    }
}

impl std::fmt::Display for RegisterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Discrete actions that update the registration form state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormAction {
    /// Set a single field value
    SetField {
        /// The field to update
        field: RegisterField,
        /// The new value
        value: String,
    },
    /// Replace the error mapping wholesale
    SetErrors {
        /// New field-to-message mapping
        errors: HashMap<RegisterField, String>,
    },
    /// Toggle masking of the password fields
    TogglePasswordVisibility,
}

/// State of the registration form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFormState {
    /// Email address input
    pub email: String,
    /// Password input
    pub password: String,
    /// Password confirmation input
    pub confirm_password: String,
    /// Field-to-message error mapping from the last failed submit
    pub errors: HashMap<RegisterField, String>,
    /// Whether the password fields are currently unmasked
    pub show_password: bool,
}

impl RegisterFormState {
    /// Create an empty form state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action, producing the next state
    ///
    /// This is the reducer: a pure function with no hidden mutation. The
    /// visibility toggle only flips `show_password`; field values are never
    /// touched by it.
    pub fn apply(&self, action: FormAction) -> Self {
        let mut next = self.clone();
        match action {
            FormAction::SetField { field, value } => match field {
                RegisterField::Email => next.email = value,
                RegisterField::Password => next.password = value,
                RegisterField::ConfirmPassword => next.confirm_password = value,
            },
            FormAction::SetErrors { errors } => next.errors = errors,
            FormAction::TogglePasswordVisibility => next.show_password = !self.show_password,
        }
        next
    }

    /// Get the current value of a field
    pub fn field(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Get the error message for a field, if any
    pub fn error(&self, field: RegisterField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether any field currently has an error
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Owning store for the registration form state
///
/// The store is the single writer of the state; the view reads through
/// [`FormStore::state`]. All updates go through [`FormStore::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    state: RegisterFormState,
}

impl FormStore {
    /// Create a store with empty initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch an action through the reducer
    pub fn dispatch(&mut self, action: FormAction) {
        tracing::debug!(?action, "form action dispatched");
        self.state = self.state.apply(action);
    }

    /// Get the current state snapshot
    pub fn state(&self) -> &RegisterFormState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in RegisterField::all() {
            assert_eq!(RegisterField::from_str(field.as_str()), Some(field));
        }
        assert_eq!(RegisterField::from_str("unknown"), None);
    }

    #[test]
    fn test_set_field_updates_only_target() {
        let state = RegisterFormState::new();
        let next = state.apply(FormAction::SetField {
            field: RegisterField::Email,
            value: "a@b.com".to_string(),
        });
        assert_eq!(next.email, "a@b.com");
        assert_eq!(next.password, "");
        assert_eq!(next.confirm_password, "");
        // Reducer is pure; the original snapshot is untouched
        assert_eq!(state.email, "");
    }

    #[test]
    fn test_set_errors_replaces_wholesale() {
        let mut errors = HashMap::new();
        errors.insert(RegisterField::Email, "email required".to_string());
        let state = RegisterFormState::new().apply(FormAction::SetErrors { errors });
        assert_eq!(state.error(RegisterField::Email), Some("email required"));

        let mut replacement = HashMap::new();
        replacement.insert(RegisterField::Password, "password required".to_string());
        let state = state.apply(FormAction::SetErrors {
            errors: replacement,
        });
        assert_eq!(state.error(RegisterField::Email), None);
        assert_eq!(
            state.error(RegisterField::Password),
            Some("password required")
        );
    }

    #[test]
    fn test_toggle_visibility_is_involution() {
        let state = RegisterFormState {
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
            ..Default::default()
        };
        let once = state.apply(FormAction::TogglePasswordVisibility);
        assert!(once.show_password);
        let twice = once.apply(FormAction::TogglePasswordVisibility);
        assert!(!twice.show_password);
        // Toggling never mutates the password values
        assert_eq!(twice.password, "secret");
        assert_eq!(twice.confirm_password, "secret");
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = FormStore::new();
        store.dispatch(FormAction::SetField {
            field: RegisterField::Password,
            value: "x".to_string(),
        });
        assert_eq!(store.state().password, "x");
    }

    #[test]
    fn test_error_map_serializes_to_canonical_keys() {
        let mut errors = HashMap::new();
        errors.insert(
            RegisterField::ConfirmPassword,
            "passwords do not match".to_string(),
        );
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json.get("confirmPassword").and_then(|v| v.as_str()),
            Some("passwords do not match")
        );
    }

    #[test]
    fn test_form_action_serde() {
        let action = FormAction::SetField {
            field: RegisterField::Email,
            value: "a@b.com".to_string(),
        };
        let json = serde_json::to_string(&action).unwrap();
        let parsed: FormAction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, action);
    }
}
