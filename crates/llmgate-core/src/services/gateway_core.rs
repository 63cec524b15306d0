//! `GatewayCore` - the primary gateway facade.
//!
//! Adapters (HTTP server, CLI) receive a `GatewayCore` instance and use it to
//! reach every core operation.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{GenerateRequest, mask_key};
use crate::error::GatewayError;
use crate::ports::{RegistryStore, UpstreamPort};

use super::{AllowlistService, ApiKeyService, Dispatcher, RequestValidator};

/// The core gateway facade.
///
/// Owns exactly one service per registry document, which is what makes the
/// per-document write locks effective. Construct it once at the composition
/// root and share it behind an `Arc`.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(JsonFileStore::new(models_path, keys_path));
/// let upstream = Arc::new(OpenRouterClient::new(config)?);
/// let core = GatewayCore::new(store, upstream);
///
/// let text = core.generate(&GenerateRequest::new("hello", "m1", "k1")).await?;
/// ```
pub struct GatewayCore {
    allowlist: Arc<AllowlistService>,
    api_keys: Arc<ApiKeyService>,
    validator: RequestValidator,
    dispatcher: Dispatcher,
}

impl GatewayCore {
    /// Create a new `GatewayCore` over the given store and upstream.
    pub fn new(store: Arc<dyn RegistryStore>, upstream: Arc<dyn UpstreamPort>) -> Self {
        let allowlist = Arc::new(AllowlistService::new(Arc::clone(&store)));
        let api_keys = Arc::new(ApiKeyService::new(store));
        let validator = RequestValidator::new(Arc::clone(&allowlist), Arc::clone(&api_keys));

        Self {
            allowlist,
            api_keys,
            validator,
            dispatcher: Dispatcher::new(upstream),
        }
    }

    /// Access the allowlist service.
    pub fn allowlist(&self) -> &AllowlistService {
        &self.allowlist
    }

    /// Access the API key service.
    pub fn api_keys(&self) -> &ApiKeyService {
        &self.api_keys
    }

    /// Validate `request` and, if it passes, forward it upstream.
    ///
    /// Returns the first choice's text. A request that fails validation never
    /// reaches the upstream.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        let validated = self.validator.validate(request).await?;
        debug!(
            model = %validated.model,
            key = %mask_key(&request.apikey),
            owner = %validated.key_owner,
            "Request validated, dispatching"
        );
        Ok(self.dispatcher.dispatch(&validated).await?)
    }
}
