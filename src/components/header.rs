//! Site header with brand link and session-aware auth actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::AppSession;
use crate::util::auth::LOGIN_PATH;

/// Header shown on every route.
///
/// Auth actions stay hidden until the initial session check resolves, so the
/// header never flashes "Login" for a user who is about to be recognized.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = session.state();
    let navigate = use_navigate();

    // Navigate from an effect once the logout request has settled.
    let logged_out = RwSignal::new(false);
    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_logout = Callback::new(move |()| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            logged_out.set(true);
        });
    });

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <h1 class="site-header__brand">
                    <a href="/">"Kira."</a>
                </h1>
                <nav class="site-header__nav">
                    <a href="/about">"About"</a>
                    <a href="/contact">"Contact"</a>
                </nav>
                <div class="site-header__actions">
                    <Show when=move || !state.get().loading>
                        <Show
                            when=move || state.get().is_logged_in()
                            fallback=|| {
                                view! {
                                    <a class="btn btn--primary" href="/login">"Login"</a>
                                    <a class="btn btn--primary" href="/signup">"Sign Up"</a>
                                }
                            }
                        >
                            <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                        </Show>
                    </Show>
                </div>
            </div>
        </header>
    }
}
