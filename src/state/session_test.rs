use super::*;
use crate::net::api::{ApiClient, RawResponse};
use crate::net::testing::{FakeTransport, json_response, user_json};
use futures::executor::block_on;

// =============================================================
// Helpers
// =============================================================

fn store(transport: &FakeTransport) -> SessionStore<FakeTransport> {
    SessionStore::new(AuthService::new(ApiClient::new("http://localhost:8080", transport.clone())))
}

fn ok_user(username: &str) -> RawResponse {
    json_response(200, &serde_json::json!({ "user": user_json(username) }))
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_starts_loading_and_logged_out() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_logged_in());
}

#[test]
fn new_store_starts_in_initial_state() {
    let store = store(&FakeTransport::new());
    assert_eq!(store.snapshot(), SessionState::initial());
}

// =============================================================
// check_auth_status
// =============================================================

#[test]
fn check_auth_status_adopts_current_user() {
    let transport = FakeTransport::new();
    transport.respond(ok_user("ada"));
    let store = store(&transport);

    block_on(store.check_auth_status());

    let state = store.snapshot();
    assert!(!state.loading);
    assert!(state.is_logged_in());
    assert_eq!(state.user.unwrap().username, "ada");
    assert_eq!(transport.requests()[0].url, "http://localhost:8080/api/auth/me");
}

#[test]
fn check_auth_status_resolves_logged_out_on_401() {
    let transport = FakeTransport::new();
    transport.respond(json_response(401, &serde_json::json!({ "error": "unauthorized" })));
    let store = store(&transport);

    block_on(store.check_auth_status());

    assert_eq!(store.snapshot(), SessionState::signed_out());
}

#[test]
fn check_auth_status_resolves_logged_out_on_network_failure() {
    let transport = FakeTransport::new();
    transport.fail(ApiError::Network("offline".to_owned()));
    let store = store(&transport);

    block_on(store.check_auth_status());

    assert_eq!(store.snapshot(), SessionState::signed_out());
}

#[test]
fn stale_check_does_not_overwrite_login() {
    let transport = FakeTransport::new();
    let pending_check = transport.respond_later();
    transport.respond(ok_user("ada"));
    let store = store(&transport);

    block_on(async {
        let check = store.check_auth_status();
        let login_then_release = async {
            store.login("ada@kira.test", "hunter22").await.unwrap();
            let late = json_response(401, &serde_json::json!({ "error": "unauthorized" }));
            pending_check.send(late).unwrap();
        };
        futures::join!(check, login_then_release);
    });

    let state = store.snapshot();
    assert!(state.is_logged_in());
    assert_eq!(state.user.unwrap().username, "ada");
}

#[test]
fn later_check_supersedes_earlier_one() {
    let transport = FakeTransport::new();
    let first = transport.respond_later();
    transport.respond(ok_user("grace"));
    let store = store(&transport);

    block_on(async {
        let older = store.check_auth_status();
        let newer_then_release = async {
            store.check_auth_status().await;
            first.send(ok_user("ada")).unwrap();
        };
        futures::join!(older, newer_then_release);
    });

    assert_eq!(store.snapshot().user.unwrap().username, "grace");
}

// =============================================================
// login / register / set_user
// =============================================================

#[test]
fn login_success_holds_user_and_logged_in() {
    let transport = FakeTransport::new();
    transport.respond(json_response(201, &serde_json::json!({ "token": "t", "user": user_json("ada") })));
    let store = store(&transport);

    let user = block_on(store.login("ada@kira.test", "hunter22")).unwrap();

    let state = store.snapshot();
    assert_eq!(state.user.as_ref(), Some(&user));
    assert!(state.is_logged_in());
    assert!(!state.loading);
}

#[test]
fn login_failure_leaves_session_untouched() {
    let transport = FakeTransport::new();
    transport.respond(json_response(401, &serde_json::json!({ "error": "invalid credentials" })));
    let store = store(&transport);
    store.clear();

    let err = block_on(store.login("ada@kira.test", "wrong")).unwrap_err();

    assert_eq!(err.to_string(), "invalid credentials");
    assert_eq!(store.snapshot(), SessionState::signed_out());
}

#[test]
fn register_success_holds_user() {
    let transport = FakeTransport::new();
    transport.respond(json_response(201, &serde_json::json!({ "user": user_json("grace") })));
    let store = store(&transport);
    let request = RegisterRequest {
        full_name: "Grace Hopper".to_owned(),
        username: "grace".to_owned(),
        email: "grace@kira.test".to_owned(),
        password: "cobol1959".to_owned(),
    };

    block_on(store.register(&request)).unwrap();

    assert_eq!(store.snapshot().user.unwrap().username, "grace");
}

#[test]
fn set_user_marks_logged_in_and_resolved() {
    let store = store(&FakeTransport::new());
    let user: User = serde_json::from_value(user_json("ada")).unwrap();

    store.set_user(user.clone());

    assert_eq!(store.snapshot(), SessionState::signed_in(user));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_success_clears_session() {
    let transport = FakeTransport::new();
    transport.respond(json_response(200, &serde_json::json!("successfully logged out")));
    let store = store(&transport);
    store.set_user(serde_json::from_value(user_json("ada")).unwrap());

    block_on(store.logout());

    let state = store.snapshot();
    assert!(state.user.is_none());
    assert!(!state.is_logged_in());
    assert_eq!(transport.requests()[0].url, "http://localhost:8080/api/auth/logout");
}

#[test]
fn logout_failure_still_clears_session() {
    let transport = FakeTransport::new();
    transport.respond(json_response(500, &serde_json::json!({ "error": "db down" })));
    let store = store(&transport);
    store.set_user(serde_json::from_value(user_json("ada")).unwrap());

    block_on(store.logout());

    assert_eq!(store.snapshot(), SessionState::signed_out());
}

#[test]
fn logout_network_failure_still_clears_session() {
    let transport = FakeTransport::new();
    transport.fail(ApiError::Network("offline".to_owned()));
    let store = store(&transport);
    store.set_user(serde_json::from_value(user_json("ada")).unwrap());

    block_on(store.logout());

    assert_eq!(store.snapshot(), SessionState::signed_out());
}
