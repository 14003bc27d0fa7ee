//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `ProtectedRoute`, so it only renders once the session has
//! resolved with a user.

use leptos::prelude::*;

use crate::state::session::AppSession;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>().state();

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(|| "Welcome to the dashboard!".to_owned(), |u| format!("Welcome, {}!", u.full_name))
    };

    view! {
        <div class="page page--centered">
            <h1 class="page__title">"Dashboard"</h1>
            <p class="page__lead">{greeting}</p>
        </div>
    }
}
