//! Allowlist command handlers.

use anyhow::Result;
use llmgate_core::ListQuery;

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// List allowed models, optionally filtered.
pub async fn list(ctx: &CliContext, search: Option<String>) -> Result<()> {
    let query = ListQuery {
        search,
        ..Default::default()
    };
    let page = ctx.core().allowlist().search(&query).await?;

    if page.items.is_empty() {
        println!("No allowed models found.");
        println!("Use 'llmgate models add <model>' to allow one.");
        return Ok(());
    }

    println!("{} allowed model(s):\n", page.total);
    println!("{:<4} Model", "#");
    print_separator(60);
    for (index, model) in page.items.iter().enumerate() {
        println!("{:<4} {}", index + 1, truncate_string(model, 55));
    }
    Ok(())
}

pub async fn add(ctx: &CliContext, model: &str) -> Result<()> {
    ctx.core().allowlist().add(model).await?;
    println!("Allowed model '{model}'");
    Ok(())
}

pub async fn remove(ctx: &CliContext, model: &str) -> Result<()> {
    ctx.core().allowlist().remove(model).await?;
    println!("Removed model '{model}'");
    Ok(())
}
