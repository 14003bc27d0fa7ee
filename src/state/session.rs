//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, auth pages and the header to coordinate login
//! redirects and identity-dependent rendering. The state is re-derived from
//! `GET /api/auth/me` on every page load; nothing is persisted.
//!
//! DESIGN
//! ======
//! Every mutation advances a shared [`RequestTracker`]. A session check that
//! was started before a login, register or logout therefore finds its ticket
//! stale and drops its result instead of overwriting newer state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{ApiError, BrowserTransport, Transport};
use crate::net::auth::AuthService;
use crate::net::types::{RegisterRequest, User};
use crate::util::request_tracker::RequestTracker;

/// Snapshot of what the client believes about the current user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True only until the initial session check resolves.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

impl SessionState {
    pub fn initial() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    /// Logged in exactly when a user is held.
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Session store provided to components via context.
#[derive(Clone, Debug)]
pub struct SessionStore<T = BrowserTransport> {
    state: RwSignal<SessionState>,
    service: AuthService<T>,
    epoch: RequestTracker,
}

/// The store type the application provides in the browser.
pub type AppSession = SessionStore<BrowserTransport>;

impl<T: Transport> SessionStore<T> {
    pub fn new(service: AuthService<T>) -> Self {
        Self { state: RwSignal::new(SessionState::initial()), service, epoch: RequestTracker::new() }
    }

    /// Reactive handle for components that render from the session.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Replace the user and mark the session resolved and logged in.
    pub fn set_user(&self, user: User) {
        self.epoch.cancel();
        self.state.set(SessionState::signed_in(user));
    }

    /// Forget the user and mark the session resolved and logged out.
    pub fn clear(&self) {
        self.epoch.cancel();
        self.state.set(SessionState::signed_out());
    }

    /// Ask the server who is logged in and adopt the answer.
    ///
    /// Any failure resolves the session as logged out. The result is dropped
    /// if another session change happened while the request was in flight.
    pub async fn check_auth_status(&self) {
        let ticket = self.epoch.begin();
        let result = self.service.current_user().await;
        if !self.epoch.is_current(ticket) {
            leptos::logging::log!("session check superseded; ignoring result");
            return;
        }
        match result {
            Ok(user) => self.state.set(SessionState::signed_in(user)),
            Err(e) => {
                leptos::logging::warn!("session check failed: {e}");
                self.state.set(SessionState::signed_out());
            }
        }
    }

    /// Log in and adopt the returned user.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; the session is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let user = self.service.login(email, password).await?;
        self.set_user(user.clone());
        Ok(user)
    }

    /// Register a new account and adopt the returned user.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; the session is left as it was.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let user = self.service.register(request).await?;
        self.set_user(user.clone());
        Ok(user)
    }

    /// Log out on the server, then clear local state whether or not that
    /// call succeeded.
    pub async fn logout(&self) {
        self.epoch.cancel();
        if let Err(e) = self.service.logout().await {
            leptos::logging::warn!("logout request failed; clearing local session anyway: {e}");
        }
        self.clear();
    }
}
