//! Allowlist admin handlers.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use llmgate_core::{AddModelRequest, ListQuery, RemoveModelRequest};

use super::{SuccessBody, total_count_headers};
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

/// List allowed models, optionally filtered and paged.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let page = state.core.allowlist().search(&query).await?;
    Ok((total_count_headers(page.total), Json(page.items)))
}

/// Add a model to the allowlist.
pub async fn add(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AddModelRequest>,
) -> Result<Json<SuccessBody>, HttpError> {
    state.core.allowlist().add(&req.model).await?;
    tracing::info!(model = %req.model, "Model added to allowlist");
    Ok(Json(SuccessBody::ok()))
}

/// Remove a model from the allowlist.
pub async fn remove(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RemoveModelRequest>,
) -> Result<Json<SuccessBody>, HttpError> {
    state.core.allowlist().remove(&req.model).await?;
    tracing::info!(model = %req.model, "Model removed from allowlist");
    Ok(Json(SuccessBody::ok()))
}
