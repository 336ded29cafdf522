pub mod approvals;
pub mod articles;
pub mod auth;
pub mod health;
pub mod navigation;
pub mod reference;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                           login (public)
/// /auth/logout                          logout (requires auth)
/// /auth/me                              current user + menu
///
/// /reference/categories                 category list
/// /reference/approval-groups            approval group list
///
/// /articles                             create (POST)
/// /articles/search                      filter/sort approved articles (GET)
/// /articles/deletion-proposals          propose deletion (POST)
/// /articles/{id}                        get, update, delete
///
/// /approvals/queue                      pending queue (sv/admin)
/// /approvals/{id}/approve               approve (sv/admin)
/// /approvals/{id}/reject                reject (sv/admin)
///
/// /my-posts                             own posts + status counts (GET)
///
/// /navigation                           current screen + menu (GET)
/// /navigation/intents                   apply an intent (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/reference", reference::router())
        .nest("/articles", articles::router())
        .nest("/approvals", approvals::router())
        .route("/my-posts", get(handlers::my_posts::list))
        .nest("/navigation", navigation::router())
}
