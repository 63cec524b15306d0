//! Public generation endpoint.

use axum::Json;
use axum::extract::State;
use llmgate_core::GenerateRequest;
use llmgate_core::domain::mask_key;
use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::extract::ApiQuery;
use crate::state::AppState;

/// Query string accepted by `/api/generate`.
///
/// Every field is optional at the HTTP layer. A missing prompt or key is
/// rejected by the core with the same error an empty one gets.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuery {
    #[serde(default)]
    pub prompt: String,
    pub model: Option<String>,
    #[serde(default)]
    pub apikey: String,
    #[serde(default)]
    pub worktype: String,
    #[serde(default)]
    pub from: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// Validate and forward one prompt upstream.
pub async fn generate(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<GenerateQuery>,
) -> Result<Json<GenerateResponse>, HttpError> {
    let model = query
        .model
        .unwrap_or_else(|| state.settings.default_model.clone());

    tracing::info!(
        model = %model,
        key = %mask_key(&query.apikey),
        worktype = %query.worktype,
        from = %query.from,
        "Generate request"
    );

    let request = GenerateRequest {
        prompt: query.prompt,
        model,
        apikey: query.apikey,
        worktype: query.worktype,
        from: query.from,
    };

    let text = state
        .core
        .generate(&request)
        .await
        .map_err(|e| HttpError::from_gateway(e, state.settings.redact_allowlist))?;

    Ok(Json(GenerateResponse { response: text }))
}
