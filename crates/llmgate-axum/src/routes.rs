//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_admin;
use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers::{self, api_keys, generate, models, session};
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            CorsLayer::new()
                .allow_origin(parse_origins(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Parse configured origins, warning about any that are not valid header
/// values. Invalid entries are skipped.
fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(origin = %origin, error = %error, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

/// Admin routes without the `/admin` prefix.
///
/// Everything except `/login` sits behind the bearer-token middleware.
fn admin_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(session::logout))
        .route(
            "/models",
            get(models::list).post(models::add).delete(models::remove),
        )
        .route(
            "/api-keys",
            get(api_keys::list)
                .post(api_keys::add)
                .put(api_keys::update)
                .delete(api_keys::remove),
        )
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/login", post(session::login))
        .merge(protected)
}

/// Create the complete router.
pub fn create_router(ctx: AxumContext, cors: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/generate",
            get(generate::generate).post(generate::generate),
        )
        .nest("/admin", admin_routes(state.clone()))
        .layer(build_cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_origins_are_skipped() {
        let origins = vec![
            "http://a.test".to_string(),
            "http://bad\norigin".to_string(),
            "http://b.test".to_string(),
        ];
        let parsed = parse_origins(&origins);
        assert_eq!(
            parsed,
            vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test"),
            ]
        );
    }
}
