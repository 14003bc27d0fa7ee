//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::Header, protected_route::ProtectedRoute};
use crate::config;
use crate::net::api::{ApiClient, BrowserTransport};
use crate::net::auth::AuthService;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::session::{AppSession, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Build the browser session store against the configured API.
pub fn browser_session() -> AppSession {
    let client = ApiClient::new(config::api_base_url(), BrowserTransport);
    SessionStore::new(AuthService::new(client))
}

/// Root application component.
///
/// Provides the session context and runs the initial session check once the
/// app is live in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = browser_session();
    provide_context(session.clone());

    // Effects only run in the browser, so SSR renders the loading state.
    Effect::new(move || {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.check_auth_status().await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/kira.css"/>
        <Title text="Kira"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
