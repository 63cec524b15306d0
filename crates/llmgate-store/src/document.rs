//! Whole-document JSON reads and atomic replacement writes.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tokio::io::AsyncWriteExt;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use llmgate_core::{RegistryKind, StoreError};

/// Read a JSON array document.
///
/// A missing file, an unreadable file and malformed JSON are all reported as
/// `StoreError::Corrupt`; none of them is treated as an empty list.
pub async fn read_document<T: DeserializeOwned>(
    registry: RegistryKind,
    path: &Path,
) -> Result<Vec<T>, StoreError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|error| corrupt(registry, path, &error))?;

    serde_json::from_slice(&bytes).map_err(|error| {
        warn!(
            registry = %registry,
            path = %path.display(),
            error = %error,
            "Registry document failed to parse"
        );
        corrupt(registry, path, &error)
    })
}

/// Replace a JSON array document.
///
/// The payload goes to a uniquely named sibling file first and is then
/// renamed over the target, so readers never observe a partial document.
pub async fn write_document<T: Serialize>(
    registry: RegistryKind,
    path: &Path,
    items: &[T],
) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(items).map_err(|error| io(registry, path, &error))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|error| io(registry, path, &error))?;
    }

    let temp_path = path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
    let replaced = async {
        write_synced(&temp_path, &payload).await?;
        tokio::fs::rename(&temp_path, path).await
    }
    .await;

    if let Err(error) = replaced {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(io(registry, path, &error));
    }

    debug!(
        registry = %registry,
        path = %path.display(),
        entries = items.len(),
        "Registry document written"
    );
    Ok(())
}

/// Write and flush `payload` so the rename never exposes unsynced data.
async fn write_synced(path: &Path, payload: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(payload).await?;
    file.sync_all().await
}

/// Create `path` holding an empty array if it does not exist yet.
///
/// Returns `true` when a document was created. An existing document is left
/// alone even if it is malformed.
pub async fn create_if_missing(registry: RegistryKind, path: &Path) -> Result<bool, StoreError> {
    match tokio::fs::metadata(path).await {
        Ok(_) => Ok(false),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            write_document::<serde_json::Value>(registry, path, &[]).await?;
            Ok(true)
        }
        Err(error) => Err(io(registry, path, &error)),
    }
}

fn corrupt(registry: RegistryKind, path: &Path, error: &dyn std::fmt::Display) -> StoreError {
    StoreError::Corrupt {
        registry,
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}

fn io(registry: RegistryKind, path: &Path, error: &dyn std::fmt::Display) -> StoreError {
    StoreError::Io {
        registry,
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}
