//! Paths command handler.
//!
//! Displays the resolved data directory and registry documents for
//! diagnostics.

use llmgate_core::GatewayConfig;

/// Execute the paths command.
pub fn execute(config: &GatewayConfig) {
    println!("data_dir    = {}", config.data_dir.display());
    println!("models_file = {}", config.models_file.display());
    println!("keys_file   = {}", config.keys_file.display());
}
