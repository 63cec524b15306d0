//! API key admin handlers.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use llmgate_core::domain::mask_key;
use llmgate_core::{AddKeyRequest, ListQuery, RemoveKeyRequest, UpdateKeyRequest};

use super::{SuccessBody, total_count_headers};
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

/// List key records, optionally filtered and paged.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let page = state.core.api_keys().search(&query).await?;
    Ok((total_count_headers(page.total), Json(page.items)))
}

pub async fn add(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AddKeyRequest>,
) -> Result<Json<SuccessBody>, HttpError> {
    let record = state.core.api_keys().add(&req).await?;
    tracing::info!(key = %mask_key(&record.key), owner = %record.owner, "API key added");
    Ok(Json(SuccessBody::ok()))
}

pub async fn update(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UpdateKeyRequest>,
) -> Result<Json<SuccessBody>, HttpError> {
    let record = state.core.api_keys().update(&req).await?;
    tracing::info!(
        key = %mask_key(&record.key),
        active = record.active,
        "API key updated"
    );
    Ok(Json(SuccessBody::ok()))
}

pub async fn remove(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RemoveKeyRequest>,
) -> Result<Json<SuccessBody>, HttpError> {
    state.core.api_keys().remove(&req.key).await?;
    tracing::info!(key = %mask_key(&req.key), "API key removed");
    Ok(Json(SuccessBody::ok()))
}
