//! Error taxonomy for the gateway core.
//!
//! Every failure is terminal for the current request. Adapters translate
//! [`GatewayError`] 1:1 into their own error types using [`ErrorClass`]
//! (HTTP status codes, CLI exit messages).

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::RegistryKind;

/// Why a generation request was refused before reaching the upstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// The prompt was empty or whitespace only.
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    /// The requested model is not on the allowlist.
    ///
    /// `allowed` is the allowlist at the time of the check. This check runs
    /// before key authorization, so adapters may choose to hide it.
    #[error("Model '{model}' is not allowed")]
    ModelNotAllowed { model: String, allowed: Vec<String> },

    /// The API key is unknown or inactive.
    #[error("Invalid or inactive API key")]
    UnauthorizedKey,
}

/// Errors from reading or writing a persisted registry document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document is missing or could not be parsed.
    #[error("{registry} document {path} is missing or corrupt: {reason}")]
    Corrupt {
        registry: RegistryKind,
        path: PathBuf,
        reason: String,
    },

    /// The document could not be written.
    #[error("failed to write {registry} document {path}: {reason}")]
    Io {
        registry: RegistryKind,
        path: PathBuf,
        reason: String,
    },
}

/// Errors from allowlist and key registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The entry was empty or already present.
    #[error("Invalid or duplicate entry: {0}")]
    DuplicateOrEmpty(String),

    /// The entry does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The key does not exist or has been deactivated.
    #[error("Invalid or inactive API key")]
    InvalidOrInactive,

    /// The backing document could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The upstream call failed. `message` is the provider's raw error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DispatchFailure {
    pub message: String,
}

impl DispatchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Transport-agnostic classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Internal,
}

/// Umbrella error returned by [`crate::GatewayCore`] operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Registry rejections. Store failures never land here; see `Store`.
    #[error(transparent)]
    Registry(RegistryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Dispatch(#[from] DispatchFailure),
}

impl From<RegistryError> for GatewayError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Store(store) => Self::Store(store),
            other => Self::Registry(other),
        }
    }
}

impl GatewayError {
    /// Classify this error for the boundary layer.
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Validation(ValidationFailure::EmptyPrompt)
            | Self::Registry(RegistryError::DuplicateOrEmpty(_)) => ErrorClass::BadRequest,
            Self::Validation(ValidationFailure::ModelNotAllowed { .. }) => ErrorClass::Forbidden,
            Self::Validation(ValidationFailure::UnauthorizedKey)
            | Self::Registry(RegistryError::InvalidOrInactive) => ErrorClass::Unauthorized,
            Self::Registry(RegistryError::NotFound(_)) => ErrorClass::NotFound,
            Self::Registry(RegistryError::Store(_)) | Self::Store(_) | Self::Dispatch(_) => {
                ErrorClass::Internal
            }
        }
    }
}
