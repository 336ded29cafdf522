//! Route definitions for the `/reference` lists.

use axum::routing::get;
use axum::Router;

use crate::handlers::reference;
use crate::state::AppState;

/// Routes mounted at `/reference`.
///
/// ```text
/// GET /categories       -> list_categories
/// GET /approval-groups  -> list_approval_groups
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(reference::list_categories))
        .route("/approval-groups", get(reference::list_approval_groups))
}
