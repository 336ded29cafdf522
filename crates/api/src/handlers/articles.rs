//! Handlers for the `/articles` resource: search, detail, and author
//! submissions (create, edit/resubmit, delete, deletion proposals).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use faq_core::article::Article;
use faq_core::forms::DeletionProposalForm;
use faq_core::lifecycle::{can_delete, can_edit, ArticleDraft, Submission};
use faq_core::reference::category_color;
use faq_core::search::{Paging, SearchFilters};
use faq_core::types::ArticleId;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Article plus the display and capability fields the detail view needs.
#[derive(Debug, Serialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub article: Article,
    pub status_label: &'static str,
    pub category_color: String,
    pub can_edit: bool,
    pub can_delete: bool,
}

/// GET /api/v1/articles/search
///
/// Approved articles matching the query-string filters, sorted as requested
/// and paged with `skip` / `limit`.
pub async fn search(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filters): Query<SearchFilters>,
    Query(paging): Query<Paging>,
) -> Json<DataResponse<Vec<Article>>> {
    let store = state.store.lock().await;
    let results = paging
        .apply(store.search(&filters))
        .into_iter()
        .cloned()
        .collect();
    Json(DataResponse { data: results })
}

/// GET /api/v1/articles/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<ArticleId>,
) -> AppResult<Json<DataResponse<ArticleDetail>>> {
    let store = state.store.lock().await;
    let article = store.get(id)?;

    let detail = ArticleDetail {
        status_label: article.status.label(),
        category_color: category_color(state.directory.list_categories(), &article.category)
            .to_string(),
        can_edit: can_edit(&auth.user, article),
        can_delete: can_delete(&auth.user, article),
        article: article.clone(),
    };

    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/articles
///
/// Create a standard article. Status defaults to `pending`; `draft` may be
/// requested instead.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(draft): Json<ArticleDraft>,
) -> AppResult<impl IntoResponse> {
    let mut store = state.store.lock().await;
    let article = store
        .submit(&auth.user, Submission::Create(draft), Utc::now())?
        .clone();

    Ok((StatusCode::CREATED, Json(DataResponse { data: article })))
}

/// PUT /api/v1/articles/{id}
///
/// Edit an article that is not yet approved. Supplying `status` moves it
/// through the lifecycle (e.g. `pending` to resubmit a rejected article).
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<ArticleId>,
    Json(draft): Json<ArticleDraft>,
) -> AppResult<Json<DataResponse<Article>>> {
    let mut store = state.store.lock().await;
    let article = store
        .submit(&auth.user, Submission::Edit { id, draft }, Utc::now())?
        .clone();

    Ok(Json(DataResponse { data: article }))
}

/// DELETE /api/v1/articles/{id}
///
/// Hard delete. Only the author may delete. Returns 204 No Content.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<ArticleId>,
) -> AppResult<StatusCode> {
    state.store.lock().await.delete(&auth.user, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/articles/deletion-proposals
///
/// File a pending proposal to retire an existing article. The target
/// article itself is never modified.
pub async fn propose_deletion(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(form): Json<DeletionProposalForm>,
) -> AppResult<impl IntoResponse> {
    let submission = Submission::DeletionProposal {
        target: form.article_number,
        reason: form.reason,
    };

    let mut store = state.store.lock().await;
    let proposal = store.submit(&auth.user, submission, Utc::now())?.clone();

    Ok((StatusCode::CREATED, Json(DataResponse { data: proposal })))
}
