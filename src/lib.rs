//! # kira
//!
//! Leptos + WASM frontend for the Kira project-management product: sign-up,
//! login, logout and session-gated navigation.
//!
//! This crate contains pages, components, the session store, and the typed
//! HTTP client for the remote authentication API. The `server` crate hosts it
//! with server-side rendering; the browser build hydrates through `hydrate()`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
