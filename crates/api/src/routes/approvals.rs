//! Route definitions for the `/approvals` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::approvals;
use crate::state::AppState;

/// Routes mounted at `/approvals`. All require the `sv` or `admin` role.
///
/// ```text
/// GET  /queue          -> queue
/// POST /{id}/approve   -> approve
/// POST /{id}/reject    -> reject
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/queue", get(approvals::queue))
        .route("/{id}/approve", post(approvals::approve))
        .route("/{id}/reject", post(approvals::reject))
}
