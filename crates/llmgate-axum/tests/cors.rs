//! CORS behaviour for the default allow-all policy and an origin list.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};

use common::{gateway_with_cors, send};
use llmgate_axum::{CorsConfig, HttpSettings};
use llmgate_core::ApiKeyRecord;
use llmgate_core::testing::StubUpstream;

fn app(cors: &CorsConfig) -> axum::Router {
    gateway_with_cors(
        &["m1"],
        vec![ApiKeyRecord::new("k1", "alice", "")],
        StubUpstream::replying("stubbed text"),
        HttpSettings::default(),
        cors,
    )
    .app
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/generate")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_preflight_allows_any_origin_by_default() {
    let app = app(&CorsConfig::AllowAll);

    let response = send(&app, preflight("http://anywhere.test")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    assert!(
        response
            .headers
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
    );
}

#[tokio::test]
async fn test_preflight_echoes_listed_origin() {
    let app = app(&CorsConfig::AllowOrigins(vec![
        "http://a.test".to_string(),
        "http://b.test".to_string(),
    ]));

    let response = send(&app, preflight("http://b.test")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://b.test"
    );
}

#[tokio::test]
async fn test_unlisted_origin_gets_no_allow_header() {
    let app = app(&CorsConfig::AllowOrigins(vec!["http://a.test".to_string()]));

    let response = send(&app, preflight("http://evil.test")).await;

    assert!(
        !response
            .headers
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn test_simple_request_carries_allow_header() {
    let app = app(&CorsConfig::AllowOrigins(vec!["http://a.test".to_string()]));

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://a.test")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://a.test"
    );
}
