//! API Routes
//!
//! Route table and tower layers for the HTTP server.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

/// Build the application router.
///
/// ```text
/// GET  /                          liveness text
/// GET  /health                    status + store counts
/// POST /receipts/process          submit a receipt
/// GET  /receipts/{id}             stored receipt
/// GET  /receipts/{id}/points      points (cached after first request)
/// GET  /receipts/{id}/breakdown   per-rule points
/// ```
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/receipts", receipt_routes())
        .fallback(handlers::route_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Receipt routes
fn receipt_routes() -> Router<AppState> {
    Router::new()
        .route("/process", post(handlers::process_receipt))
        .route("/{id}", get(handlers::get_receipt))
        .route("/{id}/points", get(handlers::get_points))
        .route("/{id}/breakdown", get(handlers::get_breakdown))
}
