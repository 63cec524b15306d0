//! API key service - CRUD and authorization over issued keys.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{AddKeyRequest, ApiKeyRecord, ListQuery, Page, UpdateKeyRequest, mask_key};
use crate::error::RegistryError;
use crate::ports::RegistryStore;

/// Manages the key registry.
///
/// Keys are unique under exact, case-sensitive comparison. Mutations hold
/// `write_lock` across load-modify-save; reads go straight to the store.
pub struct ApiKeyService {
    store: Arc<dyn RegistryStore>,
    write_lock: Mutex<()>,
}

impl ApiKeyService {
    /// Create a new key service.
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// All key records in insertion order.
    pub async fn list(&self) -> Result<Vec<ApiKeyRecord>, RegistryError> {
        Ok(self.store.load_api_keys().await?)
    }

    /// Filtered, paginated listing matching on key or owner.
    pub async fn search(&self, query: &ListQuery) -> Result<Page<ApiKeyRecord>, RegistryError> {
        let keys = self.list().await?;
        Ok(query.apply(keys, ApiKeyRecord::matches_search))
    }

    /// Register a new key. The record always starts active.
    pub async fn add(&self, request: &AddKeyRequest) -> Result<ApiKeyRecord, RegistryError> {
        if request.key.trim().is_empty() {
            return Err(RegistryError::DuplicateOrEmpty("API key is empty".to_string()));
        }

        let _guard = self.write_lock.lock().await;
        let mut keys = self.store.load_api_keys().await?;
        if keys.iter().any(|k| k.key == request.key) {
            return Err(RegistryError::DuplicateOrEmpty(
                "API key already exists".to_string(),
            ));
        }

        let record = ApiKeyRecord::new(&request.key, &request.owner, &request.note);
        keys.push(record.clone());
        self.store.save_api_keys(&keys).await?;
        debug!(key = %mask_key(&record.key), owner = %record.owner, "API key added");
        Ok(record)
    }

    /// Apply a partial update to the first record with a matching key.
    ///
    /// Fields left as `None` keep their stored value.
    pub async fn update(&self, request: &UpdateKeyRequest) -> Result<ApiKeyRecord, RegistryError> {
        let _guard = self.write_lock.lock().await;
        let mut keys = self.store.load_api_keys().await?;
        let Some(record) = keys.iter_mut().find(|k| k.key == request.key) else {
            return Err(RegistryError::NotFound("API key".to_string()));
        };

        if let Some(owner) = &request.owner {
            record.owner.clone_from(owner);
        }
        if let Some(note) = &request.note {
            record.note.clone_from(note);
        }
        if let Some(active) = request.active {
            record.active = active;
        }
        let updated = record.clone();

        self.store.save_api_keys(&keys).await?;
        debug!(
            key = %mask_key(&updated.key),
            active = updated.active,
            "API key updated"
        );
        Ok(updated)
    }

    /// Delete every record with a matching key.
    pub async fn remove(&self, key: &str) -> Result<(), RegistryError> {
        let _guard = self.write_lock.lock().await;
        let keys = self.store.load_api_keys().await?;
        let before = keys.len();
        let remaining: Vec<ApiKeyRecord> = keys.into_iter().filter(|k| k.key != key).collect();
        if remaining.len() == before {
            return Err(RegistryError::NotFound("API key".to_string()));
        }

        self.store.save_api_keys(&remaining).await?;
        debug!(key = %mask_key(key), "API key removed");
        Ok(())
    }

    /// Resolve `key` to an active record.
    ///
    /// Unknown and inactive keys both yield `InvalidOrInactive`; store
    /// failures are reported as such.
    pub async fn authorize(&self, key: &str) -> Result<ApiKeyRecord, RegistryError> {
        let keys = self.store.load_api_keys().await?;
        keys.into_iter()
            .find(|k| k.key == key && k.active)
            .ok_or(RegistryError::InvalidOrInactive)
    }
}
