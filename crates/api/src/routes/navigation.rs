//! Route definitions for the `/navigation` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// Routes mounted at `/navigation`.
///
/// ```text
/// GET  /          -> current
/// POST /intents   -> apply_intent
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(navigation::current))
        .route("/intents", post(navigation::apply_intent))
}
