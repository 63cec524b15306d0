//! Axum HTTP adapter for llmgate.
//!
//! Exposes the public `/api/generate` endpoint, the bearer-protected
//! `/admin/*` registry endpoints and `/health`. All decisions are delegated
//! to [`llmgate_core::GatewayCore`]; this crate only translates HTTP.

#![deny(unsafe_code)]

pub mod auth;
pub mod bootstrap;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use auth::AdminSessions;
pub use bootstrap::{AxumContext, CorsConfig, HttpSettings, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
