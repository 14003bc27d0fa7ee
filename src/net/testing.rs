//! In-memory [`Transport`] used by unit tests.
//!
//! Responses are scripted in order. A deferred response parks the request on
//! a oneshot channel so tests can interleave overlapping calls.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;

use super::api::{ApiError, Method, RawResponse, Transport};

#[derive(Debug)]
enum Scripted {
    Ready(Result<RawResponse, ApiError>),
    Deferred(oneshot::Receiver<RawResponse>),
}

/// A request observed by [`FakeTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Default)]
struct FakeInner {
    scripted: VecDeque<Scripted>,
    requests: Vec<RecordedRequest>,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct FakeTransport {
    inner: Arc<Mutex<FakeInner>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, resp: RawResponse) {
        self.inner.lock().unwrap().scripted.push_back(Scripted::Ready(Ok(resp)));
    }

    pub fn fail(&self, err: ApiError) {
        self.inner.lock().unwrap().scripted.push_back(Scripted::Ready(Err(err)));
    }

    pub fn respond_later(&self) -> oneshot::Sender<RawResponse> {
        let (tx, rx) = oneshot::channel();
        self.inner.lock().unwrap().scripted.push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, method: Method, url: &str, body: Option<&str>) -> Result<RawResponse, ApiError> {
        let next = {
            let mut inner = self.inner.lock().unwrap();
            inner.requests.push(RecordedRequest {
                method,
                url: url.to_owned(),
                body: body.map(|raw| serde_json::from_str(raw).unwrap()),
            });
            inner.scripted.pop_front()
        };
        match next {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Deferred(rx)) => rx.await.map_err(|_| ApiError::Network("response dropped".to_owned())),
            None => Err(ApiError::Network("no scripted response".to_owned())),
        }
    }
}

/// JSON response with the given status.
pub(crate) fn json_response(status: u16, body: &serde_json::Value) -> RawResponse {
    RawResponse {
        status,
        status_text: status_text(status).to_owned(),
        content_type: Some("application/json".to_owned()),
        body: body.to_string(),
    }
}

/// A canonical user body as the server encodes it.
pub(crate) fn user_json(username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("id-{username}"),
        "full_name": format!("{username} Example"),
        "email": format!("{username}@kira.test"),
        "username": username,
        "role": "user",
        "avatar_url": "",
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    })
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        500 => "Internal Server Error",
        _ => "",
    }
}
