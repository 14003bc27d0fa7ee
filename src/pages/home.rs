//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1 class="page__title">"Home Page"</h1>
            <p class="page__lead">"Welcome to Kira, a project management tool."</p>
        </div>
    }
}
