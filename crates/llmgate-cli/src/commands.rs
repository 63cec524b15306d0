//! Main commands enum and subcommand groups.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Port to listen on (overrides LLMGATE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show the resolved data directory and registry documents
    Paths,

    /// Manage the model allowlist
    #[command(subcommand)]
    Models(ModelsCommand),

    /// Manage API keys
    #[command(subcommand)]
    Keys(KeysCommand),
}

/// Allowlist subcommands.
#[derive(Subcommand)]
pub enum ModelsCommand {
    /// List allowed models
    List {
        /// Case-insensitive substring filter
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Allow a model
    Add {
        /// Upstream model identifier (e.g. "deepseek/deepseek-r1:free")
        model: String,
    },

    /// Disallow a model
    Remove {
        /// Upstream model identifier
        model: String,
    },
}

/// API key subcommands.
#[derive(Subcommand)]
pub enum KeysCommand {
    /// List API keys
    List {
        /// Case-insensitive filter on key or owner
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Register a new, active API key
    Add {
        /// The key value
        key: String,
        /// Who the key is issued to
        #[arg(long, default_value = "")]
        owner: String,
        /// Free-form note
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Change an existing key; omitted fields are left as they are
    Update {
        /// The key value
        key: String,
        #[arg(long)]
        owner: Option<String>,
        #[arg(long)]
        note: Option<String>,
        /// Activate or deactivate the key
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete an API key
    Remove {
        /// The key value
        key: String,
    },

    /// Check whether a key would be accepted
    Check {
        /// The key value
        key: String,
    },
}
