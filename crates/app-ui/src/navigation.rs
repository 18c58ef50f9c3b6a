//! Navigation system for Quasar
//!
//! This module provides a type-safe stack navigator with:
//! - Route definitions with typed parameters
//! - A static transition graph between screens
//! - Navigation stack management
//! - URL path matching for deep links

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// =============================================================================
// Route Definitions
// =============================================================================

/// Parameters extracted while matching a route
pub type RouteParams = HashMap<String, String>;

/// All screens in the onboarding flow
///
/// `Welcome` carries its required parameter in the type: there is no way
/// to construct a transition to it without a validated email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Registration screen (initial route)
    #[default]
    Register,
    /// Login screen
    Login,
    /// Welcome screen, shown after a successful registration
    Welcome {
        /// The registered email address
        email: String,
    },
    /// Not found
    NotFound,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Register => "/register".to_string(),
            Route::Login => "/login".to_string(),
            Route::Welcome { email } => {
                format!("/welcome?email={}", urlencoding::encode(email))
            }
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Register => "Sign Up",
            Route::Login => "Log In",
            Route::Welcome { .. } => "Welcome",
            Route::NotFound => "Not Found",
        }
    }

    /// Whether this screen links or submits to `target`
    ///
    /// The transition graph is static: Register reaches Login (link tap)
    /// and Welcome (successful submit), Login reaches Register (link tap),
    /// and Welcome is terminal.
    pub fn can_navigate_to(&self, target: &Route) -> bool {
        matches!(
            (self, target),
            (Route::Register, Route::Login)
                | (Route::Register, Route::Welcome { .. })
                | (Route::Login, Route::Register)
        )
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack (bottom to top)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(route);
        }
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self
            .entries
            .last()
            .expect("Stack should never be empty")
            .route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.entries = vec![StackEntry::new(route)];
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Navigation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The transition graph has no edge between the two screens
    #[error("No transition from {from} to {to}")]
    TransitionNotAllowed {
        /// Source screen title
        from: &'static str,
        /// Target screen title
        to: &'static str,
    },
}

/// Complete navigation state for the onboarding stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// The screen stack
    pub stack: NavigationStack,
    /// One-shot pending transition, consumed by the app shell to remount
    #[serde(skip)]
    pending: Option<Route>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            stack: NavigationStack::new(Route::Register),
            pending: None,
        }
    }
}

impl NavigationState {
    /// Create a navigation state rooted at the registration screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current route
    pub fn current_route(&self) -> &Route {
        self.stack.current()
    }

    /// Navigate to a route
    ///
    /// Rejects transitions with no edge in the graph. On success the route
    /// is pushed and recorded as the pending transition.
    pub fn navigate(&mut self, route: Route) -> Result<(), NavigationError> {
        if !self.current_route().can_navigate_to(&route) {
            return Err(NavigationError::TransitionNotAllowed {
                from: self.current_route().title(),
                to: route.title(),
            });
        }
        self.pending = Some(route.clone());
        self.stack.push(route);
        Ok(())
    }

    /// Go back one entry (platform default back behavior)
    pub fn go_back(&mut self) -> bool {
        if self.stack.pop() {
            self.pending = Some(self.current_route().clone());
            true
        } else {
            false
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }

    /// Take the pending transition, if any
    ///
    /// Consuming the transition is what makes navigation one-shot: a
    /// single successful submit yields exactly one remount.
    pub fn take_pending(&mut self) -> Option<Route> {
        self.pending.take()
    }

    /// Reset to the initial route
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    segments: Vec<PatternSegment>,
    builder: fn(RouteParams) -> Option<Route>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// URL router for parsing paths to routes
pub struct Router {
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        router.add_route("/register", |_| Some(Route::Register));
        router.add_route("/login", |_| Some(Route::Login));
        // Welcome requires the email parameter; a bare /welcome is a
        // contract violation and falls through to NotFound.
        router.add_route("/welcome", |params| {
            Some(Route::Welcome {
                email: params.get("email")?.clone(),
            })
        });

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route
    pub fn match_path(&self, path: &str) -> Route {
        let (pathname, query) = if let Some(idx) = path.find('?') {
            (&path[..idx], Some(&path[idx + 1..]))
        } else {
            (path, None)
        };

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = self.match_pattern(&pattern.segments, &path_segments, query) {
                if let Some(route) = (pattern.builder)(params) {
                    return route;
                }
            }
        }

        Route::NotFound
    }

    /// Match a pattern against path segments
    fn match_pattern(
        &self,
        pattern: &[PatternSegment],
        path: &[&str],
        query: Option<&str>,
    ) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(name.clone(), urlencoding::decode(actual).ok()?.into_owned());
                }
            }
        }

        self.parse_query(query, &mut params);

        Some(params)
    }

    /// Parse query string into params
    fn parse_query(&self, query: Option<&str>, params: &mut RouteParams) {
        if let Some(query) = query {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    if let Ok(decoded) = urlencoding::decode(value) {
                        params.insert(key.to_string(), decoded.into_owned());
                    }
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::Register.to_path(), "/register");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(
            Route::Welcome {
                email: "a@b.com".to_string()
            }
            .to_path(),
            "/welcome?email=a%40b.com"
        );
    }

    #[test]
    fn test_route_titles() {
        assert_eq!(Route::Register.title(), "Sign Up");
        assert_eq!(Route::Login.title(), "Log In");
        assert_eq!(
            Route::Welcome {
                email: "a@b.com".to_string()
            }
            .title(),
            "Welcome"
        );
    }

    #[test]
    fn test_transition_graph() {
        let welcome = Route::Welcome {
            email: "a@b.com".to_string(),
        };
        assert!(Route::Register.can_navigate_to(&Route::Login));
        assert!(Route::Register.can_navigate_to(&welcome));
        assert!(Route::Login.can_navigate_to(&Route::Register));
        // Welcome is terminal, Login cannot skip ahead
        assert!(!welcome.can_navigate_to(&Route::Register));
        assert!(!welcome.can_navigate_to(&Route::Login));
        assert!(!Route::Login.can_navigate_to(&welcome));
    }

    #[test]
    fn test_router_matches_screens() {
        let router = Router::new();
        assert_eq!(router.match_path("/register"), Route::Register);
        assert_eq!(router.match_path("/login"), Route::Login);
        assert_eq!(
            router.match_path("/welcome?email=a%40b.com"),
            Route::Welcome {
                email: "a@b.com".to_string()
            }
        );
    }

    #[test]
    fn test_router_welcome_without_email_is_not_found() {
        let router = Router::new();
        assert_eq!(router.match_path("/welcome"), Route::NotFound);
    }

    #[test]
    fn test_router_not_found() {
        let router = Router::new();
        assert_eq!(router.match_path("/nonexistent/path"), Route::NotFound);
    }

    #[test]
    fn test_route_path_round_trip() {
        let router = Router::new();
        let route = Route::Welcome {
            email: "alice+tag@example.com".to_string(),
        };
        assert_eq!(router.match_path(&route.to_path()), route);
    }

    #[test]
    fn test_navigation_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::Register);
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());

        stack.push(Route::Login);
        assert_eq!(stack.depth(), 2);
        assert!(stack.can_go_back());
        assert_eq!(*stack.current(), Route::Login);

        assert!(stack.pop());
        assert_eq!(*stack.current(), Route::Register);

        // Can't pop past root
        assert!(!stack.pop());
    }

    #[test]
    fn test_navigation_state_starts_at_register() {
        let state = NavigationState::new();
        assert_eq!(*state.current_route(), Route::Register);
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_navigate_allowed_edge() {
        let mut state = NavigationState::new();
        state.navigate(Route::Login).unwrap();
        assert_eq!(*state.current_route(), Route::Login);
        assert_eq!(state.take_pending(), Some(Route::Login));
        // Pending is one-shot
        assert_eq!(state.take_pending(), None);
    }

    #[test]
    fn test_navigate_rejects_off_graph_transition() {
        let mut state = NavigationState::new();
        state.navigate(Route::Login).unwrap();
        let err = state
            .navigate(Route::Welcome {
                email: "a@b.com".to_string(),
            })
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::TransitionNotAllowed {
                from: "Log In",
                to: "Welcome"
            }
        );
        assert_eq!(*state.current_route(), Route::Login);
    }

    #[test]
    fn test_go_back() {
        let mut state = NavigationState::new();
        state.navigate(Route::Login).unwrap();
        state.take_pending();

        assert!(state.go_back());
        assert_eq!(*state.current_route(), Route::Register);
        assert_eq!(state.take_pending(), Some(Route::Register));
        assert!(!state.go_back());
    }

    #[test]
    fn test_route_serialization() {
        let route = Route::Welcome {
            email: "a@b.com".to_string(),
        };
        let json = serde_json::to_string(&route).unwrap();
        let parsed: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, route);
    }

    #[test]
    fn test_navigation_state_serialization() {
        let mut state = NavigationState::new();
        state.navigate(Route::Login).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let parsed: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.stack.depth(), 2);
        assert_eq!(*parsed.current_route(), Route::Login);
    }
}
