//! In-memory port implementations for tests.
//!
//! Enabled for this crate's own tests and, through the `test-utils`
//! feature, for adapter crates that want a core without disk or network.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::ApiKeyRecord;
use crate::error::{DispatchFailure, StoreError};
use crate::ports::{RegistryKind, RegistryStore, UpstreamPort};

/// Registry store backed by two mutex-guarded vectors.
///
/// A `None` document behaves like a missing file and yields
/// `StoreError::Corrupt` on load.
#[derive(Debug, Default)]
pub struct MemoryRegistryStore {
    models: Mutex<Option<Vec<String>>>,
    api_keys: Mutex<Option<Vec<ApiKeyRecord>>>,
    model_loads: AtomicUsize,
}

impl MemoryRegistryStore {
    /// Both documents present and empty.
    pub fn new() -> Self {
        Self::with_contents(Vec::new(), Vec::new())
    }

    pub fn with_contents(models: Vec<String>, api_keys: Vec<ApiKeyRecord>) -> Self {
        Self {
            models: Mutex::new(Some(models)),
            api_keys: Mutex::new(Some(api_keys)),
            model_loads: AtomicUsize::new(0),
        }
    }

    /// Both documents missing.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Current allowlist contents, bypassing the port.
    pub fn models_snapshot(&self) -> Option<Vec<String>> {
        self.models
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current key registry contents, bypassing the port.
    pub fn api_keys_snapshot(&self) -> Option<Vec<ApiKeyRecord>> {
        self.api_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of allowlist loads through the port.
    pub fn model_loads(&self) -> usize {
        self.model_loads.load(Ordering::SeqCst)
    }

    fn missing_error(registry: RegistryKind) -> StoreError {
        StoreError::Corrupt {
            registry,
            path: PathBuf::from("memory"),
            reason: "document does not exist".to_string(),
        }
    }
}

#[async_trait]
impl RegistryStore for MemoryRegistryStore {
    async fn load_models(&self) -> Result<Vec<String>, StoreError> {
        self.model_loads.fetch_add(1, Ordering::SeqCst);
        self.models_snapshot()
            .ok_or_else(|| Self::missing_error(RegistryKind::Allowlist))
    }

    async fn save_models(&self, models: &[String]) -> Result<(), StoreError> {
        *self.models.lock().unwrap_or_else(PoisonError::into_inner) = Some(models.to_vec());
        Ok(())
    }

    async fn load_api_keys(&self) -> Result<Vec<ApiKeyRecord>, StoreError> {
        self.api_keys_snapshot()
            .ok_or_else(|| Self::missing_error(RegistryKind::ApiKeys))
    }

    async fn save_api_keys(&self, keys: &[ApiKeyRecord]) -> Result<(), StoreError> {
        *self.api_keys.lock().unwrap_or_else(PoisonError::into_inner) = Some(keys.to_vec());
        Ok(())
    }
}

/// Upstream stub that returns a fixed reply and counts calls.
#[derive(Debug)]
pub struct StubUpstream {
    reply: Result<String, DispatchFailure>,
    calls: AtomicUsize,
}

impl StubUpstream {
    /// Reply to every call with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail every call with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(DispatchFailure::new(message)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completions requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamPort for StubUpstream {
    async fn complete(&self, _model: &str, _prompt: &str) -> Result<String, DispatchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}
