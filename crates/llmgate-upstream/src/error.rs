//! Error types for upstream calls.
//!
//! These errors are internal to `llmgate-upstream` and are mapped to
//! [`DispatchFailure`] at the port boundary.

use thiserror::Error;

use llmgate_core::DispatchFailure;

/// Errors from talking to the upstream provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The provider answered with a non-success status.
    #[error("upstream returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The provider reported an error inside a success response.
    #[error("{message}")]
    Provider { message: String },

    /// The response could not be interpreted as a completion.
    #[error("Invalid response from upstream: {message}")]
    InvalidResponse { message: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl From<UpstreamError> for DispatchFailure {
    fn from(err: UpstreamError) -> Self {
        match err {
            // Pass the provider's own text through untouched.
            UpstreamError::Status { status, body } if body.trim().is_empty() => {
                Self::new(format!("upstream returned status {status}"))
            }
            UpstreamError::Status { body, .. } => Self::new(body),
            other => Self::new(other.to_string()),
        }
    }
}
