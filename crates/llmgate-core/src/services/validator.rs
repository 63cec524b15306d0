//! Request validation pipeline.

use std::sync::Arc;

use crate::domain::{GenerateRequest, ValidatedRequest};
use crate::error::{GatewayError, RegistryError, ValidationFailure};

use super::{AllowlistService, ApiKeyService};

/// Checks a generation request before it may reach the upstream.
///
/// The order is fixed and stops at the first failure:
///
/// 1. the prompt is non-empty after trimming (`EmptyPrompt`)
/// 2. the model is on the allowlist (`ModelNotAllowed`)
/// 3. the API key is known and active (`UnauthorizedKey`)
///
/// The validator holds no state of its own. Store failures surface as
/// `GatewayError::Store`, never as a validation failure.
pub struct RequestValidator {
    allowlist: Arc<AllowlistService>,
    api_keys: Arc<ApiKeyService>,
}

impl RequestValidator {
    pub const fn new(allowlist: Arc<AllowlistService>, api_keys: Arc<ApiKeyService>) -> Self {
        Self {
            allowlist,
            api_keys,
        }
    }

    pub async fn validate(
        &self,
        request: &GenerateRequest,
    ) -> Result<ValidatedRequest, GatewayError> {
        if request.prompt.trim().is_empty() {
            return Err(ValidationFailure::EmptyPrompt.into());
        }

        let allowed = self.allowlist.list().await?;
        if !allowed.iter().any(|m| m == &request.model) {
            return Err(ValidationFailure::ModelNotAllowed {
                model: request.model.clone(),
                allowed,
            }
            .into());
        }

        let record = match self.api_keys.authorize(&request.apikey).await {
            Ok(record) => record,
            Err(RegistryError::InvalidOrInactive) => {
                return Err(ValidationFailure::UnauthorizedKey.into());
            }
            Err(other) => return Err(other.into()),
        };

        Ok(ValidatedRequest {
            prompt: request.prompt.clone(),
            model: request.model.clone(),
            key_owner: record.owner,
        })
    }
}
