//! # Routes
//!
//! Axum router configuration for the order API.

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
/// - GET  /health - Health check
/// - POST /api/v1/orders - Place order, returns checkout URL
/// - GET  /api/v1/orders - List all orders (admin)
/// - POST /api/v1/orders/verify - Confirm or cancel payment
/// - POST /api/v1/orders/user - List the requesting user's orders
/// - POST /api/v1/orders/status - Update delivery status (admin)
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS; the checkout redirect comes from the frontend origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let order_routes = Router::new()
        .route(
            "/",
            post(handlers::place_order).get(handlers::list_orders),
        )
        .route("/verify", post(handlers::verify_order))
        .route("/user", post(handlers::user_orders))
        .route("/status", post(handlers::update_status));

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // Order flow
        .nest("/api/v1/orders", order_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
