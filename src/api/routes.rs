//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, create_invite_handler, delete_handler, get_handler, health_handler,
    parse_invite_handler, set_handler, stats_handler, validate_invite_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /invites` - Mint an invite code and share link
/// - `GET /invites/:code` - Parse an invite code
/// - `GET /invites/:code/validate` - Format check
/// - `PUT /cache` - Store a JSON payload
/// - `DELETE /cache` - Drop every entry
/// - `GET /cache/:key` - Retrieve a payload
/// - `DELETE /cache/:key` - Delete a payload
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin so the web app can call it directly
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/invites", post(create_invite_handler))
        .route("/invites/:code", get(parse_invite_handler))
        .route("/invites/:code/validate", get(validate_invite_handler))
        .route("/cache", put(set_handler).delete(clear_handler))
        .route("/cache/:key", get(get_handler).delete(delete_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
