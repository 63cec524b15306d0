//! Upstream completion port.
//!
//! The gateway forwards validated prompts through this trait. The production
//! implementation is the OpenRouter client in `llmgate-upstream`; tests inject
//! stubs.

use async_trait::async_trait;

use crate::error::DispatchFailure;

/// A text-generation provider.
#[async_trait]
pub trait UpstreamPort: Send + Sync {
    /// Send `prompt` as a single user message to `model` and return the
    /// content of the first choice.
    ///
    /// Any transport or provider error is reported as a [`DispatchFailure`]
    /// carrying the provider's error text. Implementations must not retry.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, DispatchFailure>;
}

/// Upstream that refuses every call.
///
/// Used by adapters that only manage the registries (the CLI admin commands)
/// and never dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledUpstream;

impl DisabledUpstream {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UpstreamPort for DisabledUpstream {
    async fn complete(&self, _model: &str, _prompt: &str) -> Result<String, DispatchFailure> {
        Err(DispatchFailure::new("upstream provider is not configured"))
    }
}
