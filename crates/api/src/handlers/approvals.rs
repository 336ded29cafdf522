//! Handlers for the reviewer approval workflow.
//!
//! Provides the pending queue and the approve/reject decisions. All
//! endpoints require the `sv` or `admin` role.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use faq_core::article::Article;
use faq_core::error::{CoreError, FieldError};
use faq_core::forms::{ApprovalForm, MSG_APPROVAL_GROUP_REQUIRED, MSG_REJECTION_REASON_REQUIRED};
use faq_core::types::ArticleId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireReviewer;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /approvals/{id}/approve`.
///
/// Omitting `approval_group` keeps the group already on the article.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApproveRequest {
    pub approval_group: Option<String>,
    pub comment: String,
}

/// Request body for `POST /approvals/{id}/reject`.
#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    #[serde(default)]
    pub reason: String,
}

/// GET /api/v1/approvals/queue
///
/// Pending articles in collection order.
pub async fn queue(
    RequireReviewer(_auth): RequireReviewer,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<Article>>> {
    let store = state.store.lock().await;
    let pending = store.pending_queue().into_iter().cloned().collect();
    Json(DataResponse { data: pending })
}

/// POST /api/v1/approvals/{id}/approve
///
/// Approve a pending article into a known approval group.
pub async fn approve(
    RequireReviewer(auth): RequireReviewer,
    State(state): State<AppState>,
    Path(id): Path<ArticleId>,
    Json(input): Json<ApproveRequest>,
) -> AppResult<Json<DataResponse<Article>>> {
    let mut store = state.store.lock().await;

    let mut form = ApprovalForm::for_article(store.get(id)?);
    if let Some(group) = input.approval_group {
        form.approval_group = group;
    }
    form.comment = input.comment;

    let decision = form
        .approval_decision()
        .ok_or_else(|| approval_group_error(MSG_APPROVAL_GROUP_REQUIRED))?;

    let known = state
        .directory
        .list_approval_groups()
        .iter()
        .any(|g| g.name == decision.approval_group);
    if !known {
        return Err(approval_group_error(&format!(
            "承認グループ「{}」は存在しません",
            decision.approval_group
        ))
        .into());
    }

    let article = store.approve(&auth.user, id, &decision, Utc::now())?.clone();
    Ok(Json(DataResponse { data: article }))
}

/// POST /api/v1/approvals/{id}/reject
///
/// Reject a pending article. The reason must contain a non-whitespace
/// character.
pub async fn reject(
    RequireReviewer(auth): RequireReviewer,
    State(state): State<AppState>,
    Path(id): Path<ArticleId>,
    Json(input): Json<RejectRequest>,
) -> AppResult<Json<DataResponse<Article>>> {
    let mut store = state.store.lock().await;

    let mut form = ApprovalForm::for_article(store.get(id)?);
    form.open_reject();
    form.rejection_reason = input.reason;

    let decision = form.rejection_decision().ok_or_else(|| {
        CoreError::InvalidFields(vec![FieldError::new(
            "reason",
            MSG_REJECTION_REASON_REQUIRED,
        )])
    })?;

    let article = store.reject(&auth.user, id, &decision, Utc::now())?.clone();
    Ok(Json(DataResponse { data: article }))
}

fn approval_group_error(message: &str) -> CoreError {
    CoreError::InvalidFields(vec![FieldError::new("approval_group", message)])
}
