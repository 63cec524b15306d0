//! Command handlers.
//!
//! Each handler receives the composed context and delegates to the core.

pub mod keys;
pub mod models;
pub mod paths;
pub mod serve;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::bootstrap::{CliContext, bootstrap};
    use llmgate_core::GatewayConfig;
    use tempfile::TempDir;

    /// A context over fresh documents in a temporary data directory.
    pub async fn temp_context() -> (TempDir, CliContext) {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_string_lossy().into_owned();
        let config = GatewayConfig::from_lookup(|key| {
            (key == "LLMGATE_DATA_DIR").then(|| data_dir.clone())
        })
        .unwrap();
        let ctx = bootstrap(config).await.unwrap();
        (dir, ctx)
    }
}
