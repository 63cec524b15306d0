//! Typed request shapes for gateway and admin operations.
//!
//! Required string fields default to empty when missing so that the
//! managers, not the deserializer, decide how an absent value is rejected.

use serde::{Deserialize, Serialize};

/// Add a model identifier to the allowlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddModelRequest {
    #[serde(default)]
    pub model: String,
}

/// Remove a model identifier from the allowlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveModelRequest {
    #[serde(default)]
    pub model: String,
}

/// Register a new API key. New keys are always active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddKeyRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub note: String,
}

/// Partially update an existing API key.
///
/// `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateKeyRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Delete an API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveKeyRequest {
    #[serde(default)]
    pub key: String,
}

/// An inbound generation call as seen by the core.
///
/// `worktype` and `from` are caller-supplied metadata. They are carried
/// through but play no part in validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub model: String,
    pub apikey: String,
    pub worktype: String,
    pub from: String,
}

impl GenerateRequest {
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        apikey: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            apikey: apikey.into(),
            ..Default::default()
        }
    }
}

/// A request that passed every validation step.
///
/// Only the dispatcher consumes this; `prompt` is the caller's text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub prompt: String,
    pub model: String,
    /// Owner of the key that authorized the request.
    pub key_owner: String,
}
