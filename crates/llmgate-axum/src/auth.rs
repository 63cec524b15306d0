//! Admin session tokens and the bearer-token middleware.
//!
//! `POST /admin/login` exchanges the configured password for a random UUID
//! token. Every other `/admin/*` route requires `Authorization: Bearer
//! <token>`; failures get 401 with `WWW-Authenticate: Bearer`. Tokens live in
//! memory only, expire after a fixed TTL and do not survive a restart.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::error::HttpError;
use crate::state::AppState;

/// How long an admin token stays valid after login.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// In-memory admin tokens with their issue time.
#[derive(Debug)]
pub struct AdminSessions {
    password: Option<String>,
    ttl: Duration,
    tokens: RwLock<HashMap<String, Instant>>,
}

impl AdminSessions {
    /// `None` disables login entirely.
    pub fn new(password: Option<String>) -> Self {
        Self::with_ttl(password, DEFAULT_SESSION_TTL)
    }

    pub fn with_ttl(password: Option<String>, ttl: Duration) -> Self {
        Self {
            password,
            ttl,
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Whether an admin password is configured.
    pub const fn enabled(&self) -> bool {
        self.password.is_some()
    }

    /// Issue a token if `password` matches.
    ///
    /// Expired tokens are dropped on every successful login.
    pub fn login(&self, password: &str) -> Option<String> {
        let expected = self.password.as_deref()?;
        if !bool::from(password.as_bytes().ct_eq(expected.as_bytes())) {
            return None;
        }

        let token = uuid::Uuid::new_v4().to_string();
        let now = Instant::now();
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        tokens.retain(|_, issued| now.duration_since(*issued) < self.ttl);
        tokens.insert(token.clone(), now);
        Some(token)
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .is_some_and(|issued| issued.elapsed() < self.ttl)
    }

    /// Revoke `token`. Returns whether it was live.
    pub fn logout(&self, token: &str) -> bool {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some_and(|issued| issued.elapsed() < self.ttl)
    }

    #[cfg(test)]
    fn live_tokens(&self) -> usize {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Auth middleware for admin routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match bearer_token(req.headers()) {
        Some(token) if state.sessions.is_valid(token) => next.run(req).await,
        _ => {
            tracing::warn!(
                path = %req.uri().path(),
                "Unauthorized admin request - missing or invalid token"
            );
            HttpError::AdminAuthRequired.into_response()
        }
    }
}
