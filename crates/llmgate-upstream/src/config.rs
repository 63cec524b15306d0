//! Configuration for the upstream client.

use std::time::Duration;

/// Configuration for [`crate::OpenRouterClient`].
///
/// # Example
///
/// ```
/// use llmgate_upstream::UpstreamConfig;
/// use std::time::Duration;
///
/// let config = UpstreamConfig::new("sk-or-...")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-gateway/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the OpenAI-compatible API, without trailing slash
    pub(crate) base_url: String,
    /// Provider credential sent as a bearer token
    pub(crate) api_key: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl UpstreamConfig {
    /// Create a configuration for `api_key` with default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: llmgate_core::DEFAULT_UPSTREAM_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(120),
            user_agent: concat!("llmgate/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the API base URL.
    ///
    /// Defaults to `https://openrouter.ai/api/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 120 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a configuration from gateway settings.
    ///
    /// Returns `None` when no provider credential is configured.
    pub fn from_settings(settings: &llmgate_core::UpstreamSettings) -> Option<Self> {
        let api_key = settings.api_key.as_ref()?;
        Some(
            Self::new(api_key.clone())
                .with_base_url(settings.base_url.clone())
                .with_timeout(settings.timeout),
        )
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
