//! Shared helpers for router integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use llmgate_axum::{AdminSessions, AxumContext, CorsConfig, HttpSettings, create_router};
use llmgate_core::testing::{MemoryRegistryStore, StubUpstream};
use llmgate_core::{ApiKeyRecord, GatewayCore};

pub const ADMIN_PASSWORD: &str = "hunter2";

/// A router over in-memory registries and a stub upstream.
pub struct TestGateway {
    pub app: Router,
    pub store: Arc<MemoryRegistryStore>,
    pub upstream: Arc<StubUpstream>,
}

pub fn gateway_with(
    models: &[&str],
    keys: Vec<ApiKeyRecord>,
    upstream: StubUpstream,
    settings: HttpSettings,
) -> TestGateway {
    gateway_with_cors(models, keys, upstream, settings, &CorsConfig::AllowAll)
}

pub fn gateway_with_cors(
    models: &[&str],
    keys: Vec<ApiKeyRecord>,
    upstream: StubUpstream,
    settings: HttpSettings,
    cors: &CorsConfig,
) -> TestGateway {
    let store = Arc::new(MemoryRegistryStore::with_contents(
        models.iter().map(ToString::to_string).collect(),
        keys,
    ));
    let upstream = Arc::new(upstream);
    let core = Arc::new(GatewayCore::new(store.clone(), upstream.clone()));
    let ctx = AxumContext::new(
        core,
        AdminSessions::new(Some(ADMIN_PASSWORD.to_string())),
        settings,
    );

    TestGateway {
        app: create_router(ctx, cors),
        store,
        upstream,
    }
}

/// Allowlist `["m1"]`, active key `k1`, inactive key `k2`, replying stub.
pub fn seeded_gateway() -> TestGateway {
    let mut inactive = ApiKeyRecord::new("k2", "bob", "");
    inactive.active = false;
    gateway_with(
        &["m1"],
        vec![ApiKeyRecord::new("k1", "alice", "first"), inactive],
        StubUpstream::replying("stubbed text"),
        HttpSettings {
            default_model: "m1".to_string(),
            redact_allowlist: false,
        },
    )
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Log in and return the session token.
pub async fn login(app: &Router) -> String {
    let response = send(
        app,
        request(
            Method::POST,
            "/admin/login",
            None,
            Some(serde_json::json!({ "password": ADMIN_PASSWORD })),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()["token"].as_str().unwrap().to_string()
}
