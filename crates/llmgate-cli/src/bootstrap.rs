//! CLI bootstrap - the composition root.
//!
//! Admin commands run against the same JSON documents as the server, through
//! the same core services. They never talk to the upstream provider, so the
//! core is built with a disabled upstream.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use llmgate_core::{DisabledUpstream, GatewayConfig, GatewayCore};
use llmgate_store::JsonFileStore;

/// Fully composed application context for CLI commands.
pub struct CliContext {
    core: GatewayCore,
    config: GatewayConfig,
}

impl CliContext {
    /// Access the gateway core.
    pub const fn core(&self) -> &GatewayCore {
        &self.core
    }

    /// Access the configuration the context was built from.
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Resolve configuration from the environment, honouring `--data-dir`.
pub fn load_config(data_dir: Option<&Path>) -> Result<GatewayConfig> {
    let data_dir = data_dir.map(|p| p.to_string_lossy().into_owned());
    GatewayConfig::from_lookup(|key| match (key, &data_dir) {
        ("LLMGATE_DATA_DIR", Some(dir)) => Some(dir.clone()),
        _ => std::env::var(key).ok(),
    })
    .context("Failed to load configuration")
}

/// Bootstrap the CLI application.
pub async fn bootstrap(config: GatewayConfig) -> Result<CliContext> {
    tracing::debug!(
        target: "llmgate.paths",
        models_file = %config.models_file.display(),
        keys_file = %config.keys_file.display(),
        "CLI bootstrap resolved paths"
    );

    let store = JsonFileStore::new(&config.models_file, &config.keys_file);
    if config.init_missing_documents {
        store
            .ensure_documents()
            .await
            .context("Failed to initialise registry documents")?;
    }

    let core = GatewayCore::new(Arc::new(store), Arc::new(DisabledUpstream::new()));
    Ok(CliContext { core, config })
}
