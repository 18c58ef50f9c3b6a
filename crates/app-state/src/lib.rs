//! Application state management for Quasar
//!
//! This crate provides screen-local state stores built around pure
//! reducer functions: discrete named actions in, next state out.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod form;

pub use form::{FormAction, FormStore, RegisterField, RegisterFormState};
