//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the llmgate LLM gateway.
#[derive(Parser)]
#[command(name = "llmgate")]
#[command(about = "Allowlisting, API-key gated gateway to an upstream LLM provider")]
#[command(version)]
pub struct Cli {
    /// Override the data directory for this invocation
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{KeysCommand, ModelsCommand};
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["llmgate", "--verbose", "--data-dir", "/tmp/gw", "paths"]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/gw")));
        assert!(matches!(cli.command, Some(Commands::Paths)));
    }

    #[test]
    fn test_serve_port() {
        let cli = Cli::parse_from(["llmgate", "serve", "--port", "9100"]);
        assert!(matches!(cli.command, Some(Commands::Serve { port: Some(9100) })));
    }

    #[test]
    fn test_models_add() {
        let cli = Cli::parse_from(["llmgate", "models", "add", "openai/gpt-4o-mini"]);
        match cli.command {
            Some(Commands::Models(ModelsCommand::Add { model })) => {
                assert_eq!(model, "openai/gpt-4o-mini");
            }
            _ => panic!("expected models add"),
        }
    }

    #[test]
    fn test_keys_update_takes_explicit_bool() {
        let cli = Cli::parse_from(["llmgate", "keys", "update", "k1", "--active", "false"]);
        match cli.command {
            Some(Commands::Keys(KeysCommand::Update {
                key,
                owner,
                note,
                active,
            })) => {
                assert_eq!(key, "k1");
                assert!(owner.is_none());
                assert!(note.is_none());
                assert_eq!(active, Some(false));
            }
            _ => panic!("expected keys update"),
        }
    }
}
