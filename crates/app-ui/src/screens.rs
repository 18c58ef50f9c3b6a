//! Screens for the Quasar onboarding flow
//!
//! Each screen owns its state for exactly as long as it is mounted; the
//! app shell constructs a fresh screen on navigation and drops the old
//! one. `RegisterScreen` is the only stateful screen: it owns the form
//! store and the submission controller and wires submit to either an
//! error-map update or a navigation request.

use app_core::submission::{SubmissionController, SubmitOutcome};
use app_state::form::{FormAction, FormStore, RegisterField, RegisterFormState};
use serde::{Deserialize, Serialize};

use crate::components::{Button, Input, Link, Text, TextVariant};
use crate::navigation::Route;
use crate::theme::ThemeName;

// =============================================================================
// Alerts
// =============================================================================

/// A one-shot alert dialog view model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Dialog title
    pub title: String,
    /// Dialog message
    pub message: String,
    /// Confirm button label
    pub confirm_label: String,
}

// =============================================================================
// Register Screen
// =============================================================================

/// Result of a submit on the registration screen
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Validation passed: show the alert and navigate to the destination
    Accepted {
        /// Success alert shown before navigating
        alert: Alert,
        /// The welcome route carrying the validated email
        destination: Route,
    },
    /// Validation failed: the error mapping has been applied to the form
    Rejected,
}

/// The registration screen
///
/// Owns the form store (single writer) and the submission controller.
#[derive(Debug, Clone, Default)]
pub struct RegisterScreen {
    store: FormStore,
    controller: SubmissionController,
}

impl RegisterScreen {
    /// Create a freshly mounted registration screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current form state
    pub fn form(&self) -> &RegisterFormState {
        self.store.state()
    }

    /// Update a field value from user input
    pub fn set_field(&mut self, field: RegisterField, value: impl Into<String>) {
        self.store.dispatch(FormAction::SetField {
            field,
            value: value.into(),
        });
    }

    /// Toggle masking of the password fields
    pub fn toggle_password_visibility(&mut self) {
        self.store.dispatch(FormAction::TogglePasswordVisibility);
    }

    /// Handle a tap on the submit button
    ///
    /// Runs the schema over the current snapshot. A rejection replaces the
    /// form's error mapping wholesale; an acceptance yields the success
    /// alert and the welcome destination for the app shell to navigate to.
    pub fn submit(&mut self) -> Submission {
        match self.controller.submit(self.store.state()) {
            SubmitOutcome::Accepted { email } => Submission::Accepted {
                alert: Alert {
                    title: "Registration successful!".to_string(),
                    message: format!("User: {email}"),
                    confirm_label: "OK".to_string(),
                },
                destination: Route::Welcome { email },
            },
            SubmitOutcome::Rejected { errors } => {
                self.store.dispatch(FormAction::SetErrors { errors });
                Submission::Rejected
            }
        }
    }

    /// Build the themed view for the current state
    pub fn view(&self) -> RegisterView {
        let form = self.store.state();
        RegisterView {
            theme: ThemeName::Dark,
            title: Text::new("Sign Up", TextVariant::Title),
            subtitle: Text::new(
                "Create Your Account And Start Learning",
                TextVariant::Subtitle,
            ),
            email: Input::new("Enter your email")
                .with_value(&form.email)
                .with_error(form.error(RegisterField::Email).map(String::from)),
            password: Input::new("Enter your password")
                .with_value(&form.password)
                .secure(!form.show_password)
                .with_error(form.error(RegisterField::Password).map(String::from)),
            confirm_password: Input::new("Confirm your password")
                .with_value(&form.confirm_password)
                .secure(!form.show_password)
                .with_error(form.error(RegisterField::ConfirmPassword).map(String::from)),
            visibility_toggle: Button::ghost(if form.show_password { "Hide" } else { "Show" }),
            terms: Text::new(
                "By clicking 'Get Started', I accept the Terms of Use and \
                 acknowledge that my personal information will be used in \
                 accordance with Quasar's Privacy Policy.",
                TextVariant::Caption,
            ),
            footer: Text::new("Already have an account?", TextVariant::Caption),
            login_link: Link::new("Log In", Route::Login),
            submit: Button::primary("Sign Up"),
        }
    }
}

/// View model for the registration screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterView {
    /// Theme for this screen
    pub theme: ThemeName,
    /// Screen title
    pub title: Text,
    /// Screen subtitle
    pub subtitle: Text,
    /// Email input
    pub email: Input,
    /// Password input
    pub password: Input,
    /// Password confirmation input
    pub confirm_password: Input,
    /// Password visibility toggle
    pub visibility_toggle: Button,
    /// Terms of use fine print
    pub terms: Text,
    /// Footer prompt
    pub footer: Text,
    /// Link to the login screen
    pub login_link: Link,
    /// Submit button
    pub submit: Button,
}

// =============================================================================
// Login Screen
// =============================================================================

/// The login screen (static presentation)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginScreen;

impl LoginScreen {
    /// Create a freshly mounted login screen
    pub fn new() -> Self {
        Self
    }

    /// Build the view
    pub fn view(&self) -> LoginView {
        LoginView {
            theme: ThemeName::Light,
            title: Text::new("Log In", TextVariant::Title),
            register_link: Link::new("Sign Up", Route::Register),
        }
    }
}

/// View model for the login screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    /// Theme for this screen
    pub theme: ThemeName,
    /// Screen title
    pub title: Text,
    /// Link back to the registration screen
    pub register_link: Link,
}

// =============================================================================
// Welcome Screen
// =============================================================================

/// The welcome screen, shown after a successful registration
#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeScreen {
    email: String,
}

impl WelcomeScreen {
    /// Mount the welcome screen with the validated email parameter
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// The registered email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Build the view
    pub fn view(&self) -> WelcomeView {
        WelcomeView {
            theme: ThemeName::Light,
            title: Text::new("Welcome", TextVariant::Title),
            subtitle: Text::new("Thanks for signing up!", TextVariant::Subtitle),
            email: self.email.clone(),
        }
    }
}

/// View model for the welcome screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeView {
    /// Theme for this screen
    pub theme: ThemeName,
    /// Screen title
    pub title: Text,
    /// Screen subtitle
    pub subtitle: Text,
    /// The registered email address
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_screen(email: &str, password: &str, confirm: &str) -> RegisterScreen {
        let mut screen = RegisterScreen::new();
        screen.set_field(RegisterField::Email, email);
        screen.set_field(RegisterField::Password, password);
        screen.set_field(RegisterField::ConfirmPassword, confirm);
        screen
    }

    #[test]
    fn test_register_screen_starts_empty() {
        let screen = RegisterScreen::new();
        assert_eq!(screen.form().email, "");
        assert!(!screen.form().has_errors());
    }

    #[test]
    fn test_submit_accepted_carries_email() {
        let mut screen = filled_screen("a@b.com", "x", "x");
        match screen.submit() {
            Submission::Accepted { alert, destination } => {
                assert_eq!(alert.title, "Registration successful!");
                assert_eq!(alert.message, "User: a@b.com");
                assert_eq!(
                    destination,
                    Route::Welcome {
                        email: "a@b.com".to_string()
                    }
                );
            }
            Submission::Rejected => panic!("valid form should be accepted"),
        }
        // Errors remain clear after a successful submit
        assert!(!screen.form().has_errors());
    }

    #[test]
    fn test_submit_rejected_applies_errors_to_form() {
        let mut screen = filled_screen("not-an-email", "", "");
        assert_eq!(screen.submit(), Submission::Rejected);
        assert_eq!(screen.form().error(RegisterField::Email), Some("invalid email"));
        assert_eq!(
            screen.form().error(RegisterField::Password),
            Some("password required")
        );
        assert_eq!(
            screen.form().error(RegisterField::ConfirmPassword),
            Some("confirm your password")
        );
    }

    #[test]
    fn test_resubmit_replaces_stale_errors() {
        let mut screen = filled_screen("", "", "");
        assert_eq!(screen.submit(), Submission::Rejected);
        assert_eq!(
            screen.form().error(RegisterField::Email),
            Some("email required")
        );

        screen.set_field(RegisterField::Email, "a@b.com");
        screen.set_field(RegisterField::Password, "x");
        assert_eq!(screen.submit(), Submission::Rejected);
        // Email and password errors are gone; only confirm remains
        assert_eq!(screen.form().error(RegisterField::Email), None);
        assert_eq!(screen.form().error(RegisterField::Password), None);
        assert_eq!(
            screen.form().error(RegisterField::ConfirmPassword),
            Some("confirm your password")
        );
    }

    #[test]
    fn test_view_reflects_visibility_toggle() {
        let mut screen = filled_screen("a@b.com", "secret", "secret");
        assert!(screen.view().password.secure_text_entry);

        screen.toggle_password_visibility();
        let view = screen.view();
        assert!(!view.password.secure_text_entry);
        assert!(!view.confirm_password.secure_text_entry);
        assert_eq!(view.password.value, "secret");

        screen.toggle_password_visibility();
        assert!(screen.view().password.secure_text_entry);
    }

    #[test]
    fn test_view_shows_inline_errors() {
        let mut screen = filled_screen("not-an-email", "x", "y");
        screen.submit();
        let view = screen.view();
        assert_eq!(view.email.error.as_deref(), Some("invalid email"));
        assert_eq!(
            view.confirm_password.error.as_deref(),
            Some("passwords do not match")
        );
        assert_eq!(view.password.error, None);
    }

    #[test]
    fn test_static_screens() {
        let login = LoginScreen::new().view();
        assert_eq!(login.title.content, "Log In");
        assert_eq!(login.register_link.route, Route::Register);
        assert_eq!(login.theme, ThemeName::Light);

        let welcome = WelcomeScreen::new("a@b.com").view();
        assert_eq!(welcome.subtitle.content, "Thanks for signing up!");
        assert_eq!(welcome.email, "a@b.com");
    }

    #[test]
    fn test_register_view_serde() {
        let screen = RegisterScreen::new();
        let json = serde_json::to_string(&screen.view()).unwrap();
        let parsed: RegisterView = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, screen.view());
    }
}
