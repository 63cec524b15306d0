//! Serve command handler.

use anyhow::{Context, Result};
use llmgate_axum::{ServerConfig, start_server};
use llmgate_core::GatewayConfig;

/// Validate the configuration and run the HTTP gateway until Ctrl+C.
pub async fn execute(config: GatewayConfig, port: Option<u16>) -> Result<()> {
    let mut config = config;
    if let Some(port) = port {
        config.port = port;
    }
    config.validate().context("Cannot start server")?;

    println!("Starting llmgate on port {}", config.port);
    println!("Allowlist: {}", config.models_file.display());
    println!("API keys:  {}", config.keys_file.display());
    if config.admin_password.is_none() {
        println!("Admin endpoints disabled (set LLMGATE_ADMIN_PASSWORD to enable)");
    }

    start_server(ServerConfig::from_gateway(config)).await
}
