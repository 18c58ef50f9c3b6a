//! Quasar onboarding application shell
//!
//! Wires the screens, form state, validation, and navigation into a
//! single event-driven app: all state transitions happen synchronously in
//! response to discrete user-input events on one logical thread.
//!
//! # Example
//!
//! ```rust
//! use quasar::{AppEvent, OnboardingApp};
//! use app_state::form::RegisterField;
//! use app_ui::navigation::Route;
//!
//! let mut app = OnboardingApp::new();
//! app.handle(AppEvent::FieldChanged {
//!     field: RegisterField::Email,
//!     value: "a@b.com".to_string(),
//! })?;
//! app.handle(AppEvent::FieldChanged {
//!     field: RegisterField::Password,
//!     value: "x".to_string(),
//! })?;
//! app.handle(AppEvent::FieldChanged {
//!     field: RegisterField::ConfirmPassword,
//!     value: "x".to_string(),
//! })?;
//! app.handle(AppEvent::SubmitTapped)?;
//! assert_eq!(*app.current_route(), Route::Welcome { email: "a@b.com".to_string() });
//! # Ok::<(), app_ui::navigation::NavigationError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core;
pub use app_state;
pub use app_ui;

use app_state::form::RegisterField;
use app_ui::navigation::{NavigationError, NavigationState, Route};
use app_ui::screens::{Alert, LoginScreen, RegisterScreen, Submission, WelcomeScreen};

/// Discrete user-input events the app shell responds to
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A keystroke changed a registration form field
    FieldChanged {
        /// The field being edited
        field: RegisterField,
        /// The new value
        value: String,
    },
    /// The password visibility toggle was tapped
    ToggleVisibilityTapped,
    /// The registration submit button was tapped
    SubmitTapped,
    /// The "Log In" link was tapped on the registration screen
    LoginLinkTapped,
    /// The "Sign Up" link was tapped on the login screen
    RegisterLinkTapped,
    /// The platform back action
    BackPressed,
}

/// The screen currently mounted by the app shell
///
/// Exactly one screen is mounted at a time; its state is constructed on
/// entry and dropped on navigation away.
#[derive(Debug, Clone)]
pub enum MountedScreen {
    /// Registration screen
    Register(RegisterScreen),
    /// Login screen
    Login(LoginScreen),
    /// Welcome screen
    Welcome(WelcomeScreen),
    /// Router fallback
    NotFound,
}

/// The onboarding application shell
///
/// Owns the navigation state and the mounted screen, and forwards user
/// events to whichever screen they belong to. Events that do not apply to
/// the current screen are ignored.
#[derive(Debug)]
pub struct OnboardingApp {
    nav: NavigationState,
    screen: MountedScreen,
    alert: Option<Alert>,
}

impl Default for OnboardingApp {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingApp {
    /// Start the app on the registration screen
    pub fn new() -> Self {
        let nav = NavigationState::new();
        let screen = Self::mount(nav.current_route());
        Self {
            nav,
            screen,
            alert: None,
        }
    }

    /// Get the current route
    pub fn current_route(&self) -> &Route {
        self.nav.current_route()
    }

    /// Get the mounted screen
    pub fn screen(&self) -> &MountedScreen {
        &self.screen
    }

    /// Take the pending success alert, if one was raised
    pub fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    /// Handle a user-input event
    pub fn handle(&mut self, event: AppEvent) -> Result<(), NavigationError> {
        match (&mut self.screen, event) {
            (MountedScreen::Register(screen), AppEvent::FieldChanged { field, value }) => {
                screen.set_field(field, value);
            }
            (MountedScreen::Register(screen), AppEvent::ToggleVisibilityTapped) => {
                screen.toggle_password_visibility();
            }
            (MountedScreen::Register(screen), AppEvent::SubmitTapped) => {
                if let Submission::Accepted { alert, destination } = screen.submit() {
                    self.alert = Some(alert);
                    self.nav.navigate(destination)?;
                    self.remount();
                }
            }
            (MountedScreen::Register(_), AppEvent::LoginLinkTapped) => {
                self.nav.navigate(Route::Login)?;
                self.remount();
            }
            (MountedScreen::Login(_), AppEvent::RegisterLinkTapped) => {
                self.nav.navigate(Route::Register)?;
                self.remount();
            }
            (_, AppEvent::BackPressed) => {
                if self.nav.go_back() {
                    self.remount();
                }
            }
            (_, event) => {
                tracing::debug!(?event, route = ?self.nav.current_route(), "event ignored");
            }
        }
        Ok(())
    }

    /// Remount for the pending route, dropping the previous screen state
    fn remount(&mut self) {
        if let Some(route) = self.nav.take_pending() {
            self.screen = Self::mount(&route);
        }
    }

    fn mount(route: &Route) -> MountedScreen {
        match route {
            Route::Register => MountedScreen::Register(RegisterScreen::new()),
            Route::Login => MountedScreen::Login(LoginScreen::new()),
            Route::Welcome { email } => MountedScreen::Welcome(WelcomeScreen::new(email.clone())),
            Route::NotFound => MountedScreen::NotFound,
        }
    }
}
