//! Integration tests for `/api/generate` and `/health`.

mod common;

use axum::http::{Method, StatusCode};
use llmgate_axum::HttpSettings;
use llmgate_core::ApiKeyRecord;
use llmgate_core::testing::StubUpstream;

use common::{gateway_with, request, seeded_gateway, send};

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let gw = seeded_gateway();
    let response = send(&gw.app, request(Method::GET, "/health", None, None)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], b"OK");
}

#[tokio::test]
async fn valid_request_returns_upstream_text() {
    let gw = seeded_gateway();
    let response = send(
        &gw.app,
        request(Method::POST, "/api/generate?prompt=hello&model=m1&apikey=k1", None, None),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::json!({ "response": "stubbed text" }));
    assert_eq!(gw.upstream.calls(), 1);
}

#[tokio::test]
async fn get_is_accepted_and_metadata_is_ignored() {
    let gw = seeded_gateway();
    let response = send(
        &gw.app,
        request(
            Method::GET,
            "/api/generate?prompt=hello&apikey=k1&worktype=summary&from=web",
            None,
            None,
        ),
    )
    .await;

    // model falls back to the configured default ("m1")
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(gw.upstream.calls(), 1);
}

#[tokio::test]
async fn empty_prompt_is_bad_request() {
    let gw = seeded_gateway();
    for uri in [
        "/api/generate?prompt=&model=not-in-list&apikey=bad",
        "/api/generate?model=m1&apikey=k1",
        "/api/generate?prompt=%20%20&model=m1&apikey=k1",
    ] {
        let response = send(&gw.app, request(Method::POST, uri, None, None)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        let body = response.json();
        assert_eq!(body["status"], 400);
        assert_eq!(body["type"], "EMPTY_PROMPT");
        assert_eq!(body["error"], "Prompt cannot be empty");
    }
    assert_eq!(gw.upstream.calls(), 0);
}

#[tokio::test]
async fn unlisted_model_is_forbidden_with_choices() {
    let gw = seeded_gateway();
    let response = send(
        &gw.app,
        request(Method::POST, "/api/generate?prompt=hi&model=not-in-list&apikey=bad", None, None),
    )
    .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let body = response.json();
    assert_eq!(body["type"], "MODEL_NOT_ALLOWED");
    assert_eq!(body["metadata"]["allowed"], serde_json::json!(["m1"]));
    assert!(body["error"].as_str().unwrap().contains("not-in-list"));
}

#[tokio::test]
async fn redacted_allowlist_is_not_disclosed() {
    let gw = gateway_with(
        &["secret-model"],
        vec![],
        StubUpstream::replying("x"),
        HttpSettings {
            default_model: "secret-model".to_string(),
            redact_allowlist: true,
        },
    );
    let response = send(
        &gw.app,
        request(Method::POST, "/api/generate?prompt=hi&model=other&apikey=k", None, None),
    )
    .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let body = response.json();
    assert!(body.get("metadata").is_none());
    assert!(!body["error"].as_str().unwrap().contains("secret-model"));
}

#[tokio::test]
async fn unknown_or_inactive_key_is_unauthorized() {
    let gw = seeded_gateway();
    for key in ["bad", "k2", "K1"] {
        let uri = format!("/api/generate?prompt=hi&model=m1&apikey={key}");
        let response = send(&gw.app, request(Method::POST, &uri, None, None)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{key}");
        let body = response.json();
        assert_eq!(body["type"], "UNAUTHORIZED_KEY");
        assert_eq!(body["error"], "Invalid or inactive API key");
    }
    assert_eq!(gw.upstream.calls(), 0);
}

#[tokio::test]
async fn upstream_failure_is_internal_error_with_raw_message() {
    let gw = gateway_with(
        &["m1"],
        vec![ApiKeyRecord::new("k1", "", "")],
        StubUpstream::failing("Rate limit exceeded"),
        HttpSettings::default(),
    );
    let response = send(
        &gw.app,
        request(Method::POST, "/api/generate?prompt=hi&model=m1&apikey=k1", None, None),
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["error"], "Rate limit exceeded");
    assert_eq!(body["type"], "UPSTREAM_ERROR");
}
