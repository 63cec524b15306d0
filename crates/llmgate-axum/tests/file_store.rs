//! End-to-end bootstrap over real JSON documents.

mod common;

use axum::http::{Method, StatusCode};
use llmgate_axum::{CorsConfig, HttpSettings, ServerConfig, bootstrap, create_router};
use llmgate_core::UpstreamSettings;
use std::time::Duration;

use common::{ADMIN_PASSWORD, login, request, send};

fn config_in(dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        port: 0,
        models_file: dir.join("allowed_models.json"),
        keys_file: dir.join("api_keys.json"),
        init_missing_documents: true,
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        upstream: UpstreamSettings {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: None,
            timeout: Duration::from_secs(1),
        },
        http: HttpSettings::default(),
        cors: CorsConfig::AllowAll,
    }
}

#[tokio::test]
async fn bootstrap_creates_documents_and_persists_admin_changes() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let ctx = bootstrap(&config).await.unwrap();
    let app = create_router(ctx, &config.cors);

    assert_eq!(
        std::fs::read_to_string(&config.models_file).unwrap(),
        "[]"
    );

    let token = login(&app).await;
    let response = send(
        &app,
        request(
            Method::POST,
            "/admin/models",
            Some(&token),
            Some(serde_json::json!({ "model": "x" })),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let raw = std::fs::read_to_string(&config.models_file).unwrap();
    let models: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(models, vec!["x".to_string()]);
}

#[tokio::test]
async fn missing_upstream_credential_fails_generation() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.models_file, r#"["m1"]"#).unwrap();
    std::fs::write(
        &config.keys_file,
        r#"[{"key": "k1", "owner": "", "active": true, "note": ""}]"#,
    )
    .unwrap();

    let ctx = bootstrap(&config).await.unwrap();
    let app = create_router(ctx, &config.cors);

    let response = send(
        &app,
        request(Method::POST, "/api/generate?prompt=hi&model=m1&apikey=k1", None, None),
    )
    .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["type"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn corrupt_document_is_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.models_file, "{ broken").unwrap();

    let ctx = bootstrap(&config).await.unwrap();
    let app = create_router(ctx, &config.cors);

    let response = send(
        &app,
        request(Method::POST, "/api/generate?prompt=hi&model=m1&apikey=k1", None, None),
    )
    .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["type"], "STORE_ERROR");
    assert!(
        response.json()["error"]
            .as_str()
            .unwrap()
            .contains("allowed_models.json")
    );
}
