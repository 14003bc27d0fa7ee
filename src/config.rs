//! Build-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so the API base URL
//! is captured from `KIRA_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `KIRA_API_URL` is unset or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Base URL of the remote authentication API for this build.
pub fn api_base_url() -> String {
    resolve_api_base_url(option_env!("KIRA_API_URL"))
}

/// Normalize a configured base URL, falling back to [`DEFAULT_API_URL`].
pub fn resolve_api_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}
