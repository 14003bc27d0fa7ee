//! Shared route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and auth pages apply identical redirect behavior. The
//! decision is a pure function of [`SessionState`]; the redirect itself runs
//! inside an `Effect`, after render, never while rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// What a protected route should show for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Initial session check still running.
    Loading,
    /// Resolved and unauthenticated; navigate to `/login`.
    Redirect,
    /// Resolved and authenticated; render the protected content.
    Render,
}

pub fn guard_view(state: &SessionState) -> GuardView {
    if state.loading {
        GuardView::Loading
    } else if state.is_logged_in() {
        GuardView::Render
    } else {
        GuardView::Redirect
    }
}

pub fn should_redirect_unauth(state: &SessionState) -> bool {
    guard_view(state) == GuardView::Redirect
}

/// Auth pages (login/signup) leave once the session resolves as logged in.
pub fn should_leave_auth_page(state: &SessionState) -> bool {
    guard_view(state) == GuardView::Render
}

/// Redirect to `/login` whenever the session has resolved without a user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` whenever the session resolves with a user.
pub fn install_authed_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_leave_auth_page(&session.get()) {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });
}
