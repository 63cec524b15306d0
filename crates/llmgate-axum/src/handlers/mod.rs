//! HTTP handlers.
//!
//! Handlers are thin: they extract request data, call `GatewayCore` and map
//! the result. No validation logic lives here.

pub mod api_keys;
pub mod generate;
pub mod models;
pub mod session;

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

/// Header carrying the unpaginated match count on listing endpoints.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Body returned by admin mutations.
#[derive(Debug, Serialize)]
pub struct SuccessBody {
    pub success: bool,
}

impl SuccessBody {
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

pub(crate) fn total_count_headers(total: usize) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(TOTAL_COUNT_HEADER),
        HeaderValue::from(total),
    );
    headers
}

/// Health check endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
