use super::*;
use crate::net::api::ApiClient;
use crate::net::auth::AuthService;
use crate::net::testing::{FakeTransport, json_response, user_json};
use futures::executor::block_on;

fn store(transport: &FakeTransport) -> SessionStore<FakeTransport> {
    SessionStore::new(AuthService::new(ApiClient::new("http://localhost:8080", transport.clone())))
}

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ada@kira.test ", "hunter22"),
        Ok(("ada@kira.test".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("ada@kira.test", " pass "),
        Ok(("ada@kira.test".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "hunter22"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("ada@kira.test", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn submit_login_with_blank_fields_skips_network() {
    let transport = FakeTransport::new();
    let store = store(&transport);

    let err = block_on(submit_login(&store, "", "")).unwrap_err();

    assert_eq!(err, MISSING_CREDENTIALS);
    assert!(transport.requests().is_empty());
}

#[test]
fn submit_login_success_logs_in() {
    let transport = FakeTransport::new();
    transport.respond(json_response(201, &serde_json::json!({ "user": user_json("ada") })));
    let store = store(&transport);

    let user = block_on(submit_login(&store, "ada@kira.test", "hunter22")).unwrap();

    assert_eq!(user.username, "ada");
    assert!(store.snapshot().is_logged_in());
}

#[test]
fn submit_login_surfaces_server_message() {
    let transport = FakeTransport::new();
    transport.respond(json_response(401, &serde_json::json!({ "error": "invalid credentials" })));
    let store = store(&transport);

    let err = block_on(submit_login(&store, "ada@kira.test", "wrong")).unwrap_err();

    assert_eq!(err, "invalid credentials");
    assert!(!store.snapshot().is_logged_in());
}
