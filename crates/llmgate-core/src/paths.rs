//! Path resolution for the gateway's data directory and registry documents.
//!
//! Resolution takes an environment lookup function instead of reading the
//! process environment directly, so tests can supply their own values.

use std::path::PathBuf;

use thiserror::Error;

/// File name of the allowlist document inside the data directory.
pub const MODELS_FILE_NAME: &str = "allowed_models.json";

/// File name of the key registry document inside the data directory.
pub const KEYS_FILE_NAME: &str = "api_keys.json";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// An override variable was set to an empty value.
    #[error("{0} is set but empty")]
    EmptyPath(String),
}

/// Resolved locations of everything the gateway persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub data_dir: PathBuf,
    pub models_file: PathBuf,
    pub keys_file: PathBuf,
}

/// Get the root directory for gateway data.
///
/// Resolution order:
/// 1. `LLMGATE_DATA_DIR` (highest priority)
/// 2. System data directory (e.g., `~/.local/share/llmgate`)
pub fn data_root(lookup: impl Fn(&str) -> Option<String>) -> Result<PathBuf, PathError> {
    if let Some(path) = lookup("LLMGATE_DATA_DIR") {
        return non_empty("LLMGATE_DATA_DIR", path);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("llmgate"))
}

/// Resolve the data directory and both document paths.
///
/// `LLMGATE_MODELS_FILE` and `LLMGATE_KEYS_FILE` override the document
/// locations individually; otherwise they sit in the data directory.
pub fn resolve_paths(lookup: impl Fn(&str) -> Option<String>) -> Result<ResolvedPaths, PathError> {
    let data_dir = data_root(&lookup)?;

    let models_file = match lookup("LLMGATE_MODELS_FILE") {
        Some(path) => non_empty("LLMGATE_MODELS_FILE", path)?,
        None => data_dir.join(MODELS_FILE_NAME),
    };
    let keys_file = match lookup("LLMGATE_KEYS_FILE") {
        Some(path) => non_empty("LLMGATE_KEYS_FILE", path)?,
        None => data_dir.join(KEYS_FILE_NAME),
    };

    Ok(ResolvedPaths {
        data_dir,
        models_file,
        keys_file,
    })
}

fn non_empty(var: &str, value: String) -> Result<PathBuf, PathError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(PathError::EmptyPath(var.to_string()))
    } else {
        Ok(PathBuf::from(trimmed))
    }
}
