//! `RegistryStore` implementation over two JSON documents.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use llmgate_core::{ApiKeyRecord, RegistryKind, RegistryStore, StoreError};

use crate::document::{create_if_missing, read_document, write_document};

/// Registry store persisting each registry as its own JSON file.
///
/// Holds no in-memory copy: every load reads the file, so edits made by
/// hand or by another process are picked up on the next request.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    models_path: PathBuf,
    keys_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(models_path: impl Into<PathBuf>, keys_path: impl Into<PathBuf>) -> Self {
        Self {
            models_path: models_path.into(),
            keys_path: keys_path.into(),
        }
    }

    pub fn models_path(&self) -> &Path {
        &self.models_path
    }

    pub fn keys_path(&self) -> &Path {
        &self.keys_path
    }

    /// Create any missing document as an empty list.
    ///
    /// Returns the registries that were created.
    pub async fn ensure_documents(&self) -> Result<Vec<RegistryKind>, StoreError> {
        let mut created = Vec::new();
        for (registry, path) in [
            (RegistryKind::Allowlist, &self.models_path),
            (RegistryKind::ApiKeys, &self.keys_path),
        ] {
            if create_if_missing(registry, path).await? {
                info!(
                    registry = %registry,
                    path = %path.display(),
                    "Created empty registry document"
                );
                created.push(registry);
            }
        }
        Ok(created)
    }
}

#[async_trait]
impl RegistryStore for JsonFileStore {
    async fn load_models(&self) -> Result<Vec<String>, StoreError> {
        read_document(RegistryKind::Allowlist, &self.models_path).await
    }

    async fn save_models(&self, models: &[String]) -> Result<(), StoreError> {
        write_document(RegistryKind::Allowlist, &self.models_path, models).await
    }

    async fn load_api_keys(&self) -> Result<Vec<ApiKeyRecord>, StoreError> {
        read_document(RegistryKind::ApiKeys, &self.keys_path).await
    }

    async fn save_api_keys(&self, keys: &[ApiKeyRecord]) -> Result<(), StoreError> {
        write_document(RegistryKind::ApiKeys, &self.keys_path, keys).await
    }
}
