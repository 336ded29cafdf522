//! Handler for the author's own post list.

use axum::extract::{Query, State};
use axum::Json;
use faq_core::article::Article;
use faq_core::search::Paging;
use faq_core::views::{post_actions, PostAction, StatusCounts, StatusToggles};
use serde::Serialize;

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PostEntry {
    #[serde(flatten)]
    pub article: Article,
    pub status_label: &'static str,
    pub actions: &'static [PostAction],
}

#[derive(Debug, Serialize)]
pub struct MyPostsResponse {
    pub posts: Vec<PostEntry>,
    /// Counts over all of the caller's posts, regardless of toggles.
    pub counts: StatusCounts,
}

/// GET /api/v1/my-posts
///
/// Query: `approved`, `pending`, `draft`, `rejected` (booleans, default
/// true), plus `skip` / `limit`.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(toggles): Query<StatusToggles>,
    Query(paging): Query<Paging>,
) -> Json<DataResponse<MyPostsResponse>> {
    let store = state.store.lock().await;

    let posts = paging
        .apply(store.my_posts(&auth.user, &toggles))
        .into_iter()
        .map(|article| PostEntry {
            status_label: article.status.label(),
            actions: post_actions(article.status),
            article: article.clone(),
        })
        .collect();

    Json(DataResponse {
        data: MyPostsResponse {
            posts,
            counts: store.status_counts(&auth.user),
        },
    })
}
