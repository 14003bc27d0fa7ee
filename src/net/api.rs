//! Generic request path for the authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies
//! included on every request.
//! Server-side (SSR): the transport returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized into [`ApiError`], whose `Display` text is what
//! forms show inline. A non-OK status surfaces the server's `error` string when
//! present; an OK response that is not JSON is rejected before decoding.
//! There is no retry, timeout or backoff: one attempt per call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ErrorBody;

/// Message used when a failed response carries no usable `error` field.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Error surfaced to callers of the API client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-OK status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The server answered OK but not with a JSON body.
    #[error("Error: {status} {status_text} - {content_type}")]
    UnexpectedContentType { status: u16, status_text: String, content_type: String },
    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// The JSON body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// HTTP is not available in this build (server-side rendering).
    #[error("not available on server")]
    Unavailable,
}

/// HTTP methods used by the authentication API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A response as seen by the API client, before normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations send `Content-Type` and `Accept` as `application/json` and
/// include credentials. They report transport failures as
/// [`ApiError::Network`] and leave status handling to [`ApiClient`].
#[allow(async_fn_in_trait)]
pub trait Transport: Clone + Send + Sync + 'static {
    async fn send(&self, method: Method, url: &str, body: Option<&str>) -> Result<RawResponse, ApiError>;
}

/// Browser transport backed by `fetch` (via `gloo-net`).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, method: Method, url: &str, body: Option<&str>) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::RequestBuilder;
            use web_sys::RequestCredentials;

            let http_method = match method {
                Method::Get => gloo_net::http::Method::GET,
                Method::Post => gloo_net::http::Method::POST,
            };
            let builder = RequestBuilder::new(url)
                .method(http_method)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .credentials(RequestCredentials::Include);
            let request = match body {
                Some(raw) => builder.body(raw.to_owned()),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let status_text = resp.status_text();
            let content_type = resp.headers().get("Content-Type");
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(RawResponse { status, status_text, content_type, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, url, body);
            Err(ApiError::Unavailable)
        }
    }
}

/// Typed request helper shared by every API call.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    /// `GET` an endpoint and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-OK statuses,
    /// non-JSON responses, or bodies that do not decode as `R`.
    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(Method::Get, endpoint, None).await
    }

    /// `POST` a JSON body to an endpoint and decode its JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`], plus [`ApiError::Encode`] when `body`
    /// cannot be serialized.
    pub async fn post<R: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> Result<R, ApiError> {
        let raw = encode_body(body)?;
        self.request(Method::Post, endpoint, Some(raw)).await
    }

    /// `POST` without a body.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn post_empty<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(Method::Post, endpoint, None).await
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let url = endpoint_url(&self.base_url, endpoint);
        let resp = self.transport.send(method, &url, body.as_deref()).await?;
        interpret_response(resp)
    }
}

fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{base_url}{endpoint}")
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Normalize a raw response into a decoded value or an [`ApiError`].
///
/// # Errors
///
/// See [`ApiError`] for the failure cases.
pub fn interpret_response<R: DeserializeOwned>(resp: RawResponse) -> Result<R, ApiError> {
    if !resp.is_ok() {
        return Err(ApiError::Http { status: resp.status, message: error_message(&resp.body) });
    }
    if !is_json_content_type(resp.content_type.as_deref()) {
        return Err(ApiError::UnexpectedContentType {
            status: resp.status,
            status_text: resp.status_text,
            content_type: resp.content_type.unwrap_or_default(),
        });
    }
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extract the server-provided `error` message, or the generic fallback.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned())
}

/// Media type must be `application/json`; parameters such as `charset` are ignored.
fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|raw| raw.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}
