//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use faq_core::error::CoreError;
use faq_core::navigation::Navigation;
use faq_core::user::User;
use uuid::Uuid;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The signed-in user, resolved from the Bearer token's session.
///
/// A well-signed token whose session has been closed by logout is rejected.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Session id (the token's `jti`).
    pub session_id: Uuid,
    pub user: User,
    /// Navigation state at the time the request was received.
    pub navigation: Navigation,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let session = state.sessions.get(claims.jti).await.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Session has ended".into()))
        })?;

        Ok(AuthUser {
            session_id: claims.jti,
            user: session.user,
            navigation: session.navigation,
        })
    }
}
