//! Route table.

use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::context::ServiceContext;

/// Create the axum router with all routes.
#[must_use]
pub fn create_router(ctx: ServiceContext) -> Router {
    Router::new()
        .route("/", get(handlers::generate_qr))
        .route("/health", get(handlers::health))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
