//! Sign-up page: account creation against `POST /api/auth/register`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::input::FormInput;
use crate::net::api::Transport;
use crate::net::types::{RegisterRequest, User};
use crate::state::session::{AppSession, SessionStore};
use crate::util::auth::install_authed_redirect;
use crate::util::request_tracker::RequestTracker;

const PASSWORD_MISMATCH: &str = "Passwords do not match";
const MISSING_FIELDS: &str = "All fields are required.";

/// Raw sign-up form contents, including the confirmation field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SignupForm {
    full_name: String,
    username: String,
    email: String,
    password: String,
    confirm_password: String,
}

/// Build a register request, rejecting mismatched or blank input.
fn validate_signup_input(form: &SignupForm) -> Result<RegisterRequest, &'static str> {
    if form.password != form.confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    let full_name = form.full_name.trim();
    let username = form.username.trim();
    let email = form.email.trim();
    if full_name.is_empty() || username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(RegisterRequest {
        full_name: full_name.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

/// Validate locally, then register through the session store.
async fn submit_signup<T: Transport>(session: &SessionStore<T>, form: &SignupForm) -> Result<User, String> {
    let request = validate_signup_input(form).map_err(str::to_owned)?;
    session.register(&request).await.map_err(|e| e.to_string())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
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
        let form = SignupForm {
            full_name: full_name.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(message) = validate_signup_input(&form) {
            error.set(Some(message.to_owned()));
            return;
        }
        busy.set(true);

        let ticket = tracker.begin();
        let tracker = tracker.clone();
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = submit_signup(&session, &form).await;
            if !tracker.is_current(ticket) {
                return;
            }
            busy.set(false);
            if let Err(message) = result {
                leptos::logging::warn!("sign up failed: {message}");
                error.set(Some(message));
            }
        });
    };

    view! {
        <div class="page page--centered">
            <h1 class="page__title">"Sign Up"</h1>
            <form class="auth-form" on:submit=on_submit>
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <FormInput id="fullName" label="Full Name" placeholder="Full name" value=full_name/>
                <FormInput id="username" label="Username" placeholder="Username" value=username/>
                <FormInput id="email" label="Email" input_type="email" placeholder="Email" value=email/>
                <FormInput id="password" label="Password" input_type="password" placeholder="Password" value=password/>
                <FormInput
                    id="confirmPassword"
                    label="Confirm Password"
                    input_type="password"
                    placeholder="Confirm Password"
                    value=confirm_password
                />
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing Up..." } else { "Sign Up" }}
                </button>
            </form>
            <p class="auth-form__switch">
                "Already have an account? "
                <a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
