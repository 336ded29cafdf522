//! Route definitions for the `/articles` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// GET    /search               -> search
/// POST   /                     -> create
/// POST   /deletion-proposals   -> propose_deletion
/// GET    /{id}                 -> get_by_id
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete (author only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(articles::create))
        .route("/search", get(articles::search))
        .route("/deletion-proposals", post(articles::propose_deletion))
        .route(
            "/{id}",
            get(articles::get_by_id)
                .put(articles::update)
                .delete(articles::delete),
        )
}
