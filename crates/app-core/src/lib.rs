//! Core application logic for Quasar
//!
//! This crate contains the business logic behind the onboarding screens:
//! the declarative validation schema, string format checkers, and the
//! submission controller that orchestrates validate-then-navigate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod formats;
pub mod submission;
pub mod validation;

pub use formats::StringFormat;
pub use submission::{SubmissionController, SubmitOutcome, SubmitPhase};
pub use validation::{FieldRule, ValidationError, ValidationSchema};
