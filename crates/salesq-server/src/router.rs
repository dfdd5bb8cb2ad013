//! Route table for the MCP endpoint and health check.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the MCP router: the JSON-RPC endpoint at the configured path plus
/// a health check.
pub fn create_router(state: AppState) -> Router {
    let path = state.config().server.path.clone();
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            &path,
            post(handlers::post_message).delete(handlers::delete_session),
        )
        .with_state(state)
}
