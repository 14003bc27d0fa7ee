//! Login page: email + password against `POST /api/auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::input::FormInput;
use crate::net::api::Transport;
use crate::net::types::User;
use crate::state::session::{AppSession, SessionStore};
use crate::util::auth::install_authed_redirect;
use crate::util::request_tracker::RequestTracker;

const MISSING_CREDENTIALS: &str = "Enter both email and password.";

/// Trim the email and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Validate locally, then log in through the session store.
async fn submit_login<T: Transport>(session: &SessionStore<T>, email: &str, password: &str) -> Result<User, String> {
    let (email, password) = validate_login_input(email, password).map_err(str::to_owned)?;
    session.login(&email, &password).await.map_err(|e| e.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    install_authed_redirect(session.state(), use_navigate());

    let tracker = RequestTracker::new();
    let cleanup_tracker = tracker.clone();
    on_cleanup(move || cleanup_tracker.cancel());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        busy.set(true);

        let ticket = tracker.begin();
        let tracker = tracker.clone();
        let session = session.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        leptos::task::spawn_local(async move {
            let result = submit_login(&session, &email_value, &password_value).await;
            if !tracker.is_current(ticket) {
                return;
            }
            busy.set(false);
            if let Err(message) = result {
                leptos::logging::warn!("login failed: {message}");
                error.set(Some(message));
            }
        });
    };

    view! {
        <div class="page page--centered">
            <h1 class="page__title">"Log In"</h1>
            <form class="auth-form" on:submit=on_submit>
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <FormInput id="email" label="Email" input_type="email" placeholder="Email" value=email/>
                <FormInput id="password" label="Password" input_type="password" placeholder="Password" value=password/>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-form__switch">
                "No account yet? "
                <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
