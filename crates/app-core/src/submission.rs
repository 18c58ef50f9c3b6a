//! Registration submission controller
//!
//! Orchestrates the validate-then-navigate flow: on submit, the current
//! form snapshot is run through the schema; a clean pass emits exactly one
//! acceptance carrying the validated email, a failed pass yields the
//! wholesale replacement error mapping. Either way the controller settles
//! back to [`SubmitPhase::Idle`], and a resubmission re-runs the full
//! schema from scratch.

use crate::validation::ValidationSchema;
use app_state::form::{RegisterField, RegisterFormState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Phases of the submission state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmitPhase {
    /// Waiting for a submit action
    #[default]
    Idle,
    /// Schema evaluation in progress
    Validating,
    /// Last submit was rejected; errors are visible
    Error,
    /// Last submit was accepted; navigation emitted
    Success,
}

/// Result of a submit: either an acceptance carrying the validated email,
/// or the replacement error mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Validation passed; navigate to the welcome screen with this email
    Accepted {
        /// The validated email address
        email: String,
    },
    /// Validation failed; replace the form's error mapping with these
    Rejected {
        /// Field-to-message error mapping
        errors: HashMap<RegisterField, String>,
    },
}

/// Controller for the registration submit flow
///
/// Single-threaded UI logic: submits are synchronous and never overlap,
/// so no re-entrancy guard is needed.
#[derive(Debug, Clone)]
pub struct SubmissionController {
    schema: ValidationSchema,
    phase: SubmitPhase,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionController {
    /// Create a controller with the registration schema
    pub fn new() -> Self {
        Self::with_schema(ValidationSchema::registration())
    }

    /// Create a controller with a custom schema
    pub fn with_schema(schema: ValidationSchema) -> Self {
        Self {
            schema,
            phase: SubmitPhase::Idle,
        }
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Run the full schema against the form snapshot
    ///
    /// Transitions Idle → Validating → Success or Error, then resets to
    /// Idle before returning. An acceptance is emitted at most once per
    /// submit.
    pub fn submit(&mut self, form: &RegisterFormState) -> SubmitOutcome {
        self.phase = SubmitPhase::Validating;
        tracing::debug!("validating registration form");

        let violations = self.schema.validate(form);
        let outcome = if violations.is_empty() {
            self.phase = SubmitPhase::Success;
            tracing::info!(email = %form.email, "registration accepted");
            SubmitOutcome::Accepted {
                email: form.email.clone(),
            }
        } else {
            self.phase = SubmitPhase::Error;
            tracing::debug!(violations = violations.len(), "registration rejected");
            SubmitOutcome::Rejected {
                errors: ValidationSchema::collapse(&violations),
            }
        };

        self.phase = SubmitPhase::Idle;
        outcome
    }
}
