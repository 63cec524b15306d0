//! Admin login and logout.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth::bearer_token;
use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange the admin password for a session token.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    match state.sessions.login(&req.password) {
        Some(token) => {
            tracing::info!("Admin logged in");
            Ok(Json(LoginResponse { token }))
        }
        None => {
            tracing::warn!(enabled = state.sessions.enabled(), "Admin login rejected");
            Err(HttpError::InvalidCredentials)
        }
    }
}

/// Revoke the caller's session token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.logout(token);
    }
    StatusCode::NO_CONTENT
}
