//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    delete_link_handler, health_handler, login_handler, register_handler, resolve_handler,
    shorten_handler,
};
use crate::state::AppState;

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /register`       - Create an account
/// - `POST   /login`          - Check credentials, returns the user id
/// - `POST   /shorten`        - Create a short link
/// - `GET    /shorten/{code}` - Resolve a short code
/// - `DELETE /shorten/{code}` - Delete a link (owner only)
/// - `GET    /health`         - Liveness check with a DB ping
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/shorten", post(shorten_handler))
        .route(
            "/shorten/{code}",
            get(resolve_handler).delete(delete_link_handler),
        )
        .route("/health", get(health_handler))
}
