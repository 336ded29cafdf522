//! Role-based access control (RBAC) extractors.
//!
//! Role checks defer to [`can_access`], the same predicate that decides
//! whether a navigation view renders or shows access-denied.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use faq_core::error::CoreError;
use faq_core::navigation::{can_access, View};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a role that may see the approval queue (`sv` or `admin`).
/// Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn queue(RequireReviewer(auth): RequireReviewer) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireReviewer(pub AuthUser);

impl FromRequestParts<AppState> for RequireReviewer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if !can_access(&auth.user, &View::Pending) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Supervisor or Admin role required".into(),
            )));
        }
        Ok(RequireReviewer(auth))
    }
}
