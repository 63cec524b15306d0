//! API key command handlers.

use anyhow::Result;
use llmgate_core::{AddKeyRequest, ListQuery, RegistryError, UpdateKeyRequest};

use crate::bootstrap::CliContext;
use crate::presentation::{active_label, print_separator, truncate_string};

/// List key records, optionally filtered on key or owner.
pub async fn list(ctx: &CliContext, search: Option<String>) -> Result<()> {
    let query = ListQuery {
        search,
        ..Default::default()
    };
    let page = ctx.core().api_keys().search(&query).await?;

    if page.items.is_empty() {
        println!("No API keys found.");
        println!("Use 'llmgate keys add <key>' to register one.");
        return Ok(());
    }

    println!("{} API key(s):\n", page.total);
    println!("{:<30} {:<20} {:<9} Note", "Key", "Owner", "Status");
    print_separator(90);
    for record in &page.items {
        println!(
            "{:<30} {:<20} {:<9} {}",
            truncate_string(&record.key, 29),
            truncate_string(&record.owner, 19),
            active_label(record.active),
            record.note
        );
    }
    Ok(())
}

pub async fn add(ctx: &CliContext, key: String, owner: String, note: String) -> Result<()> {
    let record = ctx
        .core()
        .api_keys()
        .add(&AddKeyRequest { key, owner, note })
        .await?;
    println!("Added API key '{}' ({})", record.key, active_label(record.active));
    Ok(())
}

pub async fn update(
    ctx: &CliContext,
    key: String,
    owner: Option<String>,
    note: Option<String>,
    active: Option<bool>,
) -> Result<()> {
    let request = UpdateKeyRequest {
        key,
        owner,
        note,
        active,
    };
    let record = ctx.core().api_keys().update(&request).await?;
    println!(
        "Updated API key '{}': owner='{}' note='{}' {}",
        record.key,
        record.owner,
        record.note,
        active_label(record.active)
    );
    Ok(())
}

pub async fn remove(ctx: &CliContext, key: &str) -> Result<()> {
    ctx.core().api_keys().remove(key).await?;
    println!("Removed API key '{key}'");
    Ok(())
}

/// Report whether `key` would authorize a generation request.
pub async fn check(ctx: &CliContext, key: &str) -> Result<()> {
    match ctx.core().api_keys().authorize(key).await {
        Ok(record) => {
            println!("Key is valid (owner: '{}')", record.owner);
            Ok(())
        }
        Err(RegistryError::InvalidOrInactive) => {
            anyhow::bail!("Key is invalid or inactive")
        }
        Err(other) => Err(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::temp_context;

    #[tokio::test]
    async fn check_follows_activation() {
        let (_dir, ctx) = temp_context().await;
        add(&ctx, "k1".into(), "alice".into(), String::new())
            .await
            .unwrap();
        check(&ctx, "k1").await.unwrap();

        update(&ctx, "k1".into(), None, None, Some(false))
            .await
            .unwrap();
        assert!(check(&ctx, "k1").await.is_err());

        let stored = ctx.core().api_keys().list().await.unwrap();
        assert_eq!(stored[0].owner, "alice");
    }

    #[tokio::test]
    async fn removed_key_is_invalid_not_corrupt() {
        let (_dir, ctx) = temp_context().await;
        add(&ctx, "k1".into(), String::new(), String::new())
            .await
            .unwrap();
        remove(&ctx, "k1").await.unwrap();

        let err = check(&ctx, "k1").await.unwrap_err();
        assert_eq!(err.to_string(), "Key is invalid or inactive");
    }
}
