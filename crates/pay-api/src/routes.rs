//! # Routes
//!
//! Axum router configuration for the payment bridge.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /                    - Liveness line
/// - GET  /health              - Health check (JSON)
/// - POST /api/create-payment  - Initiate a payment, 302 to the pay page
pub fn create_router(state: AppState) -> Router {
    // Checkout forms post from merchant domains, so CORS stays open
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/create-payment", post(handlers::create_payment))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
