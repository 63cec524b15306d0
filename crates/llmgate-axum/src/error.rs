//! Axum-specific error types and mappings.
//!
//! Maps `GatewayError` and extractor rejections to HTTP status codes and
//! JSON error bodies.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use llmgate_core::{GatewayError, RegistryError, ValidationFailure};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
///
/// Every variant maps to a fixed status code and a stable `type`
/// discriminant in the JSON body.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The prompt was empty or whitespace only.
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    /// An allowlist or key entry was empty or already present.
    #[error("{0}")]
    DuplicateOrEmpty(String),

    /// The request body or query string could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Invalid or inactive API key.
    #[error("Invalid or inactive API key")]
    UnauthorizedKey,

    /// Wrong or unconfigured admin password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing or invalid admin bearer token.
    #[error("Not authenticated")]
    AdminAuthRequired,

    /// Requested model is not on the allowlist.
    ///
    /// `allowed` is `None` when the allowlist is redacted.
    #[error("{message}")]
    ModelNotAllowed {
        message: String,
        allowed: Option<Vec<String>>,
    },

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// The upstream provider failed; carries its raw message.
    #[error("{0}")]
    Upstream(String),

    /// A registry document could not be read or written.
    #[error("{0}")]
    Store(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(rename = "type")]
    error_type: &'static str,
    /// Optional additional metadata for specific error types
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

impl HttpError {
    /// Translate a core error, hiding the allowlist when `redact_allowlist`.
    pub fn from_gateway(err: GatewayError, redact_allowlist: bool) -> Self {
        let message = err.to_string();
        match err {
            GatewayError::Validation(ValidationFailure::EmptyPrompt) => Self::EmptyPrompt,
            GatewayError::Validation(ValidationFailure::ModelNotAllowed { allowed, .. }) => {
                if redact_allowlist {
                    Self::ModelNotAllowed {
                        message,
                        allowed: None,
                    }
                } else {
                    Self::ModelNotAllowed {
                        message: format!("{message}. Choose from: {}", allowed.join(", ")),
                        allowed: Some(allowed),
                    }
                }
            }
            GatewayError::Validation(ValidationFailure::UnauthorizedKey)
            | GatewayError::Registry(RegistryError::InvalidOrInactive) => Self::UnauthorizedKey,
            GatewayError::Registry(RegistryError::DuplicateOrEmpty(_)) => {
                Self::DuplicateOrEmpty(message)
            }
            GatewayError::Registry(RegistryError::NotFound(_)) => Self::NotFound(message),
            GatewayError::Registry(RegistryError::Store(_)) | GatewayError::Store(_) => {
                tracing::error!(error = %message, "Registry document unavailable");
                Self::Store(message)
            }
            GatewayError::Dispatch(failure) => Self::Upstream(failure.message),
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::EmptyPrompt | Self::DuplicateOrEmpty(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UnauthorizedKey | Self::InvalidCredentials | Self::AdminAuthRequired => {
                StatusCode::UNAUTHORIZED
            }
            Self::ModelNotAllowed { .. } => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable discriminant carried in the `type` field.
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::EmptyPrompt => "EMPTY_PROMPT",
            Self::DuplicateOrEmpty(_) => "DUPLICATE_OR_EMPTY",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::UnauthorizedKey => "UNAUTHORIZED_KEY",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AdminAuthRequired => "ADMIN_AUTH_REQUIRED",
            Self::ModelNotAllowed { .. } => "MODEL_NOT_ALLOWED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}

impl From<GatewayError> for HttpError {
    fn from(err: GatewayError) -> Self {
        Self::from_gateway(err, false)
    }
}

impl From<RegistryError> for HttpError {
    fn from(err: RegistryError) -> Self {
        GatewayError::from(err).into()
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_type = self.error_type();
        let challenge = matches!(self, Self::AdminAuthRequired);
        let message = self.to_string();

        let metadata = match self {
            Self::ModelNotAllowed {
                allowed: Some(allowed),
                ..
            } => Some(serde_json::json!({ "allowed": allowed })),
            _ => None,
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            error_type,
            metadata,
        };

        let mut response = (status, axum::Json(body)).into_response();
        if challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
