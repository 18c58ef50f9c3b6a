//! UI component library for Quasar
//!
//! Components are defined as serializable props structs rendered by the
//! frontend. This is the subset the onboarding screens use: text, inputs
//! with inline validation errors, buttons, and navigation links.

use crate::navigation::Route;
use crate::theme::Color;
use serde::{Deserialize, Serialize};

/// Semantic text variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    /// Screen title
    Title,
    /// Screen subtitle
    Subtitle,
    /// Body copy
    #[default]
    Body,
    /// Fine print (terms, footers)
    Caption,
    /// Inline validation error
    Error,
}

/// Text component props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// The text content
    pub content: String,
    /// Semantic variant
    pub variant: TextVariant,
    /// Override color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Text {
    /// Create a text component
    pub fn new(content: impl Into<String>, variant: TextVariant) -> Self {
        Self {
            content: content.into(),
            variant,
            color: None,
        }
    }

    /// Set an override color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Text input component props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Placeholder shown when empty
    pub placeholder: String,
    /// Current value
    pub value: String,
    /// Whether the value is masked
    pub secure_text_entry: bool,
    /// Inline validation error, shown under the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Input {
    /// Create an input with a placeholder
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
            secure_text_entry: false,
            error: None,
        }
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Mask the value (password entry)
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure_text_entry = secure;
        self
    }

    /// Attach an inline error message
    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

/// Button variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled primary action
    #[default]
    Primary,
    /// Inline text action (visibility toggle)
    Ghost,
}

/// Button component props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    pub label: String,
    /// Visual variant
    pub variant: ButtonVariant,
}

impl Button {
    /// Create a primary button
    pub fn primary(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Primary,
        }
    }

    /// Create a ghost button
    pub fn ghost(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Ghost,
        }
    }
}

/// Navigation link component props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Link label
    pub label: String,
    /// Destination route
    pub route: Route,
}

impl Link {
    /// Create a link to a route
    pub fn new(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            route,
        }
    }
}
