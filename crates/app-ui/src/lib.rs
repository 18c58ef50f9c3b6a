//! User interface for Quasar
//!
//! This crate provides the UI layer for the onboarding flow: routes and
//! the stack navigator, screen view models, UI component props, and the
//! theme.
//!
//! # Modules
//!
//! - [`theme`] - Color palettes for the dark onboarding and light themes
//! - [`components`] - UI component props
//! - [`screens`] - Register, Login, and Welcome screens
//! - [`navigation`] - Routes, router, and navigation stack
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{NavigationState, Route};
//!
//! let mut nav = NavigationState::new();
//! assert_eq!(*nav.current_route(), Route::Register);
//! nav.navigate(Route::Login).unwrap();
//! assert!(nav.can_go_back());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;

// Re-export commonly used types
pub use components::{Button, ButtonVariant, Input, Link, Text, TextVariant};
pub use navigation::{
    NavigationError, NavigationStack, NavigationState, Route, RouteParams, Router, StackEntry,
};
pub use screens::{Alert, LoginScreen, RegisterScreen, Submission, WelcomeScreen};
pub use theme::{dark_theme, get_theme, light_theme, Color, Theme, ThemeColors, ThemeName};
