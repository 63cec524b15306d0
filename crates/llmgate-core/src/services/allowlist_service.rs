//! Allowlist service - CRUD over permitted upstream model identifiers.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{ListQuery, Page};
use crate::error::RegistryError;
use crate::ports::RegistryStore;

/// Manages the ordered set of model identifiers callers may request.
///
/// Identifiers are compared with exact, case-sensitive equality. Every
/// operation reads the document fresh from the store; mutations hold
/// `write_lock` across load-modify-save so that two concurrent mutations
/// cannot overwrite each other.
pub struct AllowlistService {
    store: Arc<dyn RegistryStore>,
    write_lock: Mutex<()>,
}

impl AllowlistService {
    /// Create a new allowlist service.
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// All identifiers in insertion order.
    pub async fn list(&self) -> Result<Vec<String>, RegistryError> {
        Ok(self.store.load_models().await?)
    }

    /// Filtered, paginated listing (case-insensitive substring match).
    pub async fn search(&self, query: &ListQuery) -> Result<Page<String>, RegistryError> {
        let models = self.list().await?;
        Ok(query.apply(models, |model, needle| {
            model.to_lowercase().contains(needle)
        }))
    }

    /// Exact-match membership test.
    pub async fn contains(&self, identifier: &str) -> Result<bool, RegistryError> {
        let models = self.list().await?;
        Ok(models.iter().any(|m| m == identifier))
    }

    /// Append `identifier` to the allowlist.
    ///
    /// Fails with `DuplicateOrEmpty` if the identifier is blank or already
    /// present. The identifier is stored verbatim.
    pub async fn add(&self, identifier: &str) -> Result<(), RegistryError> {
        if identifier.trim().is_empty() {
            return Err(RegistryError::DuplicateOrEmpty(
                "model identifier is empty".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;
        let mut models = self.store.load_models().await?;
        if models.iter().any(|m| m == identifier) {
            return Err(RegistryError::DuplicateOrEmpty(format!(
                "model '{identifier}' is already allowed"
            )));
        }

        models.push(identifier.to_string());
        self.store.save_models(&models).await?;
        debug!(model = %identifier, total = models.len(), "Model added to allowlist");
        Ok(())
    }

    /// Remove `identifier` from the allowlist.
    pub async fn remove(&self, identifier: &str) -> Result<(), RegistryError> {
        if identifier.is_empty() {
            return Err(RegistryError::NotFound(
                "model identifier is empty".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;
        let mut models = self.store.load_models().await?;
        let Some(index) = models.iter().position(|m| m == identifier) else {
            return Err(RegistryError::NotFound(format!("model '{identifier}'")));
        };

        models.remove(index);
        self.store.save_models(&models).await?;
        debug!(model = %identifier, total = models.len(), "Model removed from allowlist");
        Ok(())
    }
}
