//! Core services - the gateway's business logic layer.
//!
//! Services orchestrate between ports and domain rules. They know nothing
//! about JSON files, HTTP or the CLI.

mod allowlist_service;
mod api_key_service;
mod dispatcher;
mod gateway_core;
mod validator;

pub use allowlist_service::AllowlistService;
pub use api_key_service::ApiKeyService;
pub use dispatcher::Dispatcher;
pub use gateway_core::GatewayCore;
pub use validator::RequestValidator;
