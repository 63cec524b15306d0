//! Core domain for the llmgate gateway.
//!
//! This crate holds everything that decides whether a generation request may
//! reach the upstream provider: the model allowlist, the API key registry, the
//! request validation pipeline and the dispatcher. Storage and the upstream
//! HTTP client are reached only through the traits in [`ports`]; concrete
//! adapters live in `llmgate-store` and `llmgate-upstream`.

pub mod config;
pub mod domain;
pub mod error;
pub mod paths;
pub mod ports;
pub mod services;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use config::{
    ConfigError, DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_UPSTREAM_BASE_URL, GatewayConfig,
    UpstreamSettings,
};
pub use domain::{
    AddKeyRequest, AddModelRequest, ApiKeyRecord, GenerateRequest, ListQuery, Page,
    RemoveKeyRequest, RemoveModelRequest, UpdateKeyRequest, ValidatedRequest,
};
pub use error::{
    DispatchFailure, ErrorClass, GatewayError, RegistryError, StoreError, ValidationFailure,
};
pub use paths::{KEYS_FILE_NAME, MODELS_FILE_NAME, PathError, ResolvedPaths};
pub use ports::{DisabledUpstream, RegistryKind, RegistryStore, UpstreamPort};
pub use services::{
    AllowlistService, ApiKeyService, Dispatcher, GatewayCore, RequestValidator,
};
