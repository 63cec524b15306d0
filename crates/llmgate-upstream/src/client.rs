//! reqwest-based `UpstreamPort` implementation.

use async_trait::async_trait;
use tracing::debug;

use llmgate_core::{DispatchFailure, UpstreamPort};

use crate::config::UpstreamConfig;
use crate::error::UpstreamError;
use crate::wire::{ChatCompletionRequest, ChatCompletionResponse};

/// Chat completion client for OpenRouter and other OpenAI-compatible APIs.
///
/// Built once at startup with the provider credential and shared by every
/// request; the inner `reqwest::Client` pools connections.
pub struct OpenRouterClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl OpenRouterClient {
    /// Create a client from `config`.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            url: config.completions_url(),
            api_key: config.api_key.clone(),
        })
    }

    /// Request one completion and return the first choice's text.
    ///
    /// A choice without content yields an empty string.
    pub async fn chat(&self, model: &str, prompt: &str) -> Result<String, UpstreamError> {
        let body = ChatCompletionRequest::single_turn(model, prompt);

        debug!(url = %self.url, model = %model, "Sending chat completion request");
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|e| UpstreamError::InvalidResponse {
                message: e.to_string(),
            })?;

        if let Some(error) = parsed.error {
            return Err(UpstreamError::Provider {
                message: error.message,
            });
        }

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::InvalidResponse {
                message: "response contained no choices".to_string(),
            })?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[async_trait]
impl UpstreamPort for OpenRouterClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, DispatchFailure> {
        self.chat(model, prompt).await.map_err(DispatchFailure::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::time::Duration;

    /// Serve `app` on an ephemeral port and return its base URL.
    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/v1")
    }

    fn client_for(base_url: &str) -> OpenRouterClient {
        let config = UpstreamConfig::new("sk-or-test")
            .with_base_url(base_url)
            .with_timeout(Duration::from_secs(5));
        OpenRouterClient::new(&config).unwrap()
    }

    async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let content = format!(
            "{auth}|{}|{}",
            body["model"].as_str().unwrap_or_default(),
            body["messages"][0]["content"].as_str().unwrap_or_default()
        );
        Json(json!({
            "id": "gen-1",
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        }))
    }

    #[tokio::test]
    async fn test_sends_bearer_model_and_prompt() {
        let base = spawn(Router::new().route("/api/v1/chat/completions", post(echo))).await;
        let client = client_for(&base);

        let text = client.complete("m1", "hello").await.unwrap();
        assert_eq!(text, "Bearer sk-or-test|m1|hello");
    }

    #[tokio::test]
    async fn test_error_status_surfaces_raw_body() {
        let app = Router::new().route(
            "/api/v1/chat/completions",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    r#"{"error":{"message":"Rate limit exceeded"}}"#,
                )
            }),
        );
        let client = client_for(&spawn(app).await);

        let failure = client.complete("m1", "hello").await.unwrap_err();
        assert_eq!(failure.message, r#"{"error":{"message":"Rate limit exceeded"}}"#);
    }

    #[tokio::test]
    async fn test_null_content_is_empty_text() {
        let app = Router::new().route(
            "/api/v1/chat/completions",
            post(|| async {
                Json(json!({ "choices": [{ "message": { "role": "assistant", "content": null } }] }))
            }),
        );
        let client = client_for(&spawn(app).await);

        assert_eq!(client.complete("m1", "hello").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_empty_choices_is_failure() {
        let app = Router::new().route(
            "/api/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [] })) }),
        );
        let client = client_for(&spawn(app).await);

        let err = client.chat("m1", "hello").await.unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_provider_error_in_success_body() {
        let app = Router::new().route(
            "/api/v1/chat/completions",
            post(|| async { Json(json!({ "error": { "message": "No endpoints found", "code": 404 } })) }),
        );
        let client = client_for(&spawn(app).await);

        let failure = client.complete("m1", "hello").await.unwrap_err();
        assert_eq!(failure.message, "No endpoints found");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{addr}/api/v1"));
        assert!(client.complete("m1", "hello").await.is_err());
    }
}
