//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `GatewayCore`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use llmgate_cli::{Cli, Commands, KeysCommand, ModelsCommand, bootstrap, handlers, load_config};

/// Load `.env` from the working directory, then from the data root.
///
/// Variables already set in the process environment win.
fn load_dotenv(cli: &Cli) {
    dotenvy::dotenv().ok();

    let root = match &cli.data_dir {
        Some(dir) => Some(dir.clone()),
        None => llmgate_core::paths::data_root(|key| std::env::var(key).ok()).ok(),
    };
    if let Some(root) = root {
        dotenvy::from_path(root.join(".env")).ok();
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load environment variables
    load_dotenv(&cli);

    // Initialize logging
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = load_config(cli.data_dir.as_deref())?;

    match command {
        Commands::Serve { port } => {
            handlers::serve::execute(config, port).await?;
        }
        Commands::Paths => {
            handlers::paths::execute(&config);
        }
        Commands::Models(cmd) => {
            let ctx = bootstrap(config).await?;
            match cmd {
                ModelsCommand::List { search } => handlers::models::list(&ctx, search).await?,
                ModelsCommand::Add { model } => handlers::models::add(&ctx, &model).await?,
                ModelsCommand::Remove { model } => handlers::models::remove(&ctx, &model).await?,
            }
        }
        Commands::Keys(cmd) => {
            let ctx = bootstrap(config).await?;
            match cmd {
                KeysCommand::List { search } => handlers::keys::list(&ctx, search).await?,
                KeysCommand::Add { key, owner, note } => {
                    handlers::keys::add(&ctx, key, owner, note).await?;
                }
                KeysCommand::Update {
                    key,
                    owner,
                    note,
                    active,
                } => handlers::keys::update(&ctx, key, owner, note, active).await?,
                KeysCommand::Remove { key } => handlers::keys::remove(&ctx, &key).await?,
                KeysCommand::Check { key } => handlers::keys::check(&ctx, &key).await?,
            }
        }
    }

    Ok(())
}
