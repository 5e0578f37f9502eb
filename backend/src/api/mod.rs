//! API module
//!
//! Contains the HTTP request handlers and the router that wires them to
//! their paths.

pub mod categories;
pub mod health;
pub mod routes;
pub mod utils;

use crate::error::AppError;
use crate::middleware::request_id_middleware;
use crate::state::SharedState;
use axum::{extract::DefaultBodyLimit, http::Uri, routing::any, Router};
use tower_http::trace::TraceLayer;

/// Build the application router over the given state
///
/// Methods are matched inside the handlers rather than by the router, so
/// every route family answers unsupported methods with a JSON 405. Request
/// bodies are unbounded so no body size produces a non-JSON rejection.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", any(health::health_check))
        .route("/api/categories", any(categories::categories_collection))
        // `/*rest` does not match an empty remainder, so the bare prefix is
        // registered separately
        .route("/api/categories/", any(categories::category_item))
        .route("/api/categories/*rest", any(categories::category_item))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::disable())
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
