//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Build authentication router
/// - /api/auth/login: public (no auth required)
/// - /api/auth/me: protected (global require_auth middleware)
pub fn router() -> Router<ServerState> {
    Router::new()
        // Public route - no auth middleware applied
        .route("/api/auth/login", post(handler::login))
        // Protected route - require authentication (handled by global require_auth middleware)
        .route("/api/auth/me", get(handler::me))
}
