//! Gateway configuration.
//!
//! Configuration comes from environment variables (the CLI loads `.env`
//! files into the environment before calling [`GatewayConfig::from_env`]).
//! [`GatewayConfig::from_lookup`] takes any key lookup so tests never touch
//! the real process environment.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::paths::{PathError, resolve_paths};

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Model used when a generate call does not name one.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";

/// Default upstream base URL (OpenRouter's OpenAI-compatible API).
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default upstream request timeout in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;

/// Errors raised while building or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable holds a value that cannot be parsed.
    #[error("{var}: invalid value '{value}' ({reason})")]
    InvalidValue {
        var: String,
        value: String,
        reason: String,
    },

    /// A semantic check failed.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Settings for the upstream provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamSettings {
    pub base_url: String,
    /// Provider credential. Required for serving, not for admin commands.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

/// Complete gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub data_dir: PathBuf,
    pub models_file: PathBuf,
    pub keys_file: PathBuf,
    pub port: u16,
    pub default_model: String,
    /// Admin password. `None` disables admin login.
    pub admin_password: Option<String>,
    /// Hide the allowlist from `ModelNotAllowed` responses.
    pub redact_allowlist: bool,
    /// Create missing registry documents as empty lists at startup.
    pub init_missing_documents: bool,
    /// Allowed CORS origins. `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
    pub upstream: UpstreamSettings,
}

impl GatewayConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let paths = resolve_paths(&lookup)?;
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("LLMGATE_PORT") {
            Some(raw) => parse_number::<u16>("LLMGATE_PORT", &raw)?,
            None => DEFAULT_PORT,
        };
        let timeout_secs = match get("LLMGATE_UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => parse_number::<u64>("LLMGATE_UPSTREAM_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };
        let redact_allowlist = match get("LLMGATE_REDACT_ALLOWLIST") {
            Some(raw) => parse_bool("LLMGATE_REDACT_ALLOWLIST", &raw)?,
            None => false,
        };
        let init_missing_documents = match get("LLMGATE_INIT_DOCUMENTS") {
            Some(raw) => parse_bool("LLMGATE_INIT_DOCUMENTS", &raw)?,
            None => true,
        };
        let cors_origins = get("LLMGATE_CORS_ORIGINS").map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(ToString::to_string)
                .collect()
        });

        Ok(Self {
            data_dir: paths.data_dir,
            models_file: paths.models_file,
            keys_file: paths.keys_file,
            port,
            default_model: get("LLMGATE_DEFAULT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            admin_password: get("LLMGATE_ADMIN_PASSWORD"),
            redact_allowlist,
            init_missing_documents,
            cors_origins,
            upstream: UpstreamSettings {
                base_url: get("OPENROUTER_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string()),
                api_key: get("OPENROUTER_API_KEY"),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    /// Check the settings needed to serve traffic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be non-zero".to_string()));
        }
        if self.default_model.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default model cannot be empty".to_string(),
            ));
        }
        if self.upstream.timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "upstream timeout must be at least one second".to_string(),
            ));
        }
        if self.upstream.api_key.is_none() {
            return Err(ConfigError::Invalid(
                "OPENROUTER_API_KEY is required to serve".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::InvalidValue {
        var: var.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
