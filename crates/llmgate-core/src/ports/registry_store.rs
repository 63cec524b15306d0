//! Registry store trait definition.
//!
//! This port defines persistence for the two registries. Implementations
//! must handle all storage details internally.

use std::fmt;

use async_trait::async_trait;

use crate::domain::ApiKeyRecord;
use crate::error::StoreError;

/// Identifies one of the persisted registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    /// Ordered list of permitted upstream model identifiers.
    Allowlist,
    /// Ordered list of API key records.
    ApiKeys,
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowlist => f.write_str("allowlist"),
            Self::ApiKeys => f.write_str("api key"),
        }
    }
}

/// Durable storage for the allowlist and the key registry.
///
/// # Design Rules
///
/// - Every call reads or writes the complete document; no caching
/// - A missing or unparsable document is `StoreError::Corrupt`, never an
///   empty collection
/// - `save_*` replaces the document in one step, so concurrent readers see
///   either the old or the new contents
/// - Serializing load-modify-save sequences is the caller's job
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Load the allowlist in insertion order.
    async fn load_models(&self) -> Result<Vec<String>, StoreError>;

    /// Replace the allowlist document.
    async fn save_models(&self, models: &[String]) -> Result<(), StoreError>;

    /// Load all key records in insertion order.
    async fn load_api_keys(&self) -> Result<Vec<ApiKeyRecord>, StoreError>;

    /// Replace the key registry document.
    async fn save_api_keys(&self, keys: &[ApiKeyRecord]) -> Result<(), StoreError>;
}
