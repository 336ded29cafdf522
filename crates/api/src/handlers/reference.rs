//! Handlers for reference lists used by the article and approval forms.

use axum::extract::State;
use axum::Json;
use faq_core::reference::{ApprovalGroup, Category};

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reference/categories
pub async fn list_categories(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<Category>>> {
    Json(DataResponse {
        data: state.directory.list_categories().to_vec(),
    })
}

/// GET /api/v1/reference/approval-groups
pub async fn list_approval_groups(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<ApprovalGroup>>> {
    Json(DataResponse {
        data: state.directory.list_approval_groups().to_vec(),
    })
}
