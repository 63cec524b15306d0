//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the HTTP adapter. The JSON store and the upstream client are
//! instantiated here and injected into `GatewayCore`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use llmgate_core::{
    DisabledUpstream, GatewayConfig, GatewayCore, RegistryStore, UpstreamPort, UpstreamSettings,
};
use llmgate_store::JsonFileStore;
use llmgate_upstream::{OpenRouterClient, UpstreamConfig};

use crate::auth::AdminSessions;
use crate::routes::create_router;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Per-request settings the handlers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    /// Model used when `/api/generate` is called without one.
    pub default_model: String,
    /// Hide the allowlist from 403 responses.
    pub redact_allowlist: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            default_model: llmgate_core::DEFAULT_MODEL.to_string(),
            redact_allowlist: false,
        }
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Allowlist document.
    pub models_file: PathBuf,
    /// Key registry document.
    pub keys_file: PathBuf,
    /// Create missing documents as empty lists before serving.
    pub init_missing_documents: bool,
    /// Admin password; `None` disables admin login.
    pub admin_password: Option<String>,
    /// Upstream provider settings.
    pub upstream: UpstreamSettings,
    /// Handler settings.
    pub http: HttpSettings,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Derive the server configuration from the gateway configuration.
    pub fn from_gateway(config: GatewayConfig) -> Self {
        let cors = match config.cors_origins {
            Some(origins) => CorsConfig::AllowOrigins(origins),
            None => CorsConfig::AllowAll,
        };
        Self {
            port: config.port,
            models_file: config.models_file,
            keys_file: config.keys_file,
            init_missing_documents: config.init_missing_documents,
            admin_password: config.admin_password,
            upstream: config.upstream,
            http: HttpSettings {
                default_model: config.default_model,
                redact_allowlist: config.redact_allowlist,
            },
            cors,
        }
    }

    /// Override the listen port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core gateway facade.
    pub core: Arc<GatewayCore>,
    /// Admin login sessions.
    pub sessions: AdminSessions,
    /// Handler settings.
    pub settings: HttpSettings,
}

impl AxumContext {
    pub fn new(core: Arc<GatewayCore>, sessions: AdminSessions, settings: HttpSettings) -> Self {
        Self {
            core,
            sessions,
            settings,
        }
    }
}

/// Bootstrap the gateway services for the HTTP server.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "llmgate.paths",
        models_file = %config.models_file.display(),
        keys_file = %config.keys_file.display(),
        "Axum bootstrap resolved paths"
    );

    // 1. Registry documents
    let store = JsonFileStore::new(&config.models_file, &config.keys_file);
    if config.init_missing_documents {
        store
            .ensure_documents()
            .await
            .context("Failed to initialise registry documents")?;
    }
    let store: Arc<dyn RegistryStore> = Arc::new(store);

    // 2. Upstream client, built once with the provider credential
    let upstream: Arc<dyn UpstreamPort> = match UpstreamConfig::from_settings(&config.upstream) {
        Some(upstream_config) => Arc::new(
            OpenRouterClient::new(&upstream_config).context("Failed to build upstream client")?,
        ),
        None => {
            tracing::warn!("No upstream credential configured; generation requests will fail");
            Arc::new(DisabledUpstream::new())
        }
    };

    // 3. Core facade and admin sessions
    let core = Arc::new(GatewayCore::new(store, upstream));
    let sessions = AdminSessions::new(config.admin_password.clone());
    if !sessions.enabled() {
        tracing::info!("No admin password configured; admin endpoints are disabled");
    }

    Ok(AxumContext::new(core, sessions, config.http.clone()))
}

/// Bootstrap and run the HTTP server until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = create_router(ctx, &config.cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, cors = ?config.cors, "llmgate listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("llmgate stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn server_config_follows_gateway_config() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("LLMGATE_DATA_DIR", "/srv/llmgate"),
            ("LLMGATE_CORS_ORIGINS", "http://a.test"),
            ("LLMGATE_DEFAULT_MODEL", "openai/gpt-4o-mini"),
        ]);
        let gateway =
            GatewayConfig::from_lookup(|key| env.get(key).map(ToString::to_string)).unwrap();

        let config = ServerConfig::from_gateway(gateway).with_port(9000);
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["http://a.test".to_string()])
        );
        assert_eq!(config.http.default_model, "openai/gpt-4o-mini");
        assert!(config.models_file.ends_with("allowed_models.json"));
    }
}
