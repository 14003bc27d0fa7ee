//! Route guard for views that need a logged-in user.
//!
//! The guard only shapes the UX; the API enforces authorization.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::AppSession;
use crate::util::auth::{GuardView, guard_view, install_unauth_redirect};

/// Render `children` once the session resolves with a user.
///
/// Shows a loading placeholder during the initial session check. When the
/// session resolves without a user, a post-render effect navigates to
/// `/login` and the children are never rendered.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>().state();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || guard_view(&session.get()) == GuardView::Render
            fallback=move || {
                view! {
                    <div class="guard">
                        <Show
                            when=move || guard_view(&session.get()) == GuardView::Loading
                            fallback=|| view! { <p class="guard__message">"Redirecting to login..."</p> }
                        >
                            <div class="guard__spinner" aria-hidden="true"></div>
                            <span class="guard__message">"Loading..."</span>
                        </Show>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
