//! Handlers for the `/auth` resource (login, logout, me).

use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use faq_core::navigation::{menu_for, Page};
use faq_core::user::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: User,
}

/// The signed-in user plus the header pages their role may open.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: User,
    pub menu: Vec<Page>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Check credentials against the directory and open a session. Every
/// attempt waits the configured login delay first.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    tokio::time::sleep(Duration::from_millis(state.config.login_delay_ms)).await;

    input.validate()?;

    let user = state
        .directory
        .lookup_user(&input.email, &input.password)
        .inspect_err(|_| tracing::warn!(email = %input.email, "Login failed"))?;

    let expires_at =
        chrono::Utc::now() + chrono::Duration::minutes(state.config.jwt.access_token_expiry_mins);
    let session_id = state.sessions.open(user.clone(), expires_at).await;

    let access_token =
        match generate_access_token(user.id, user.role.as_str(), session_id, &state.config.jwt) {
            Ok(token) => token,
            Err(e) => {
                state.sessions.close(session_id).await;
                return Err(AppError::InternalError(format!(
                    "Token generation error: {e}"
                )));
            }
        };

    tracing::info!(user_id = user.id, role = %user.role, %session_id, "User logged in");

    Ok(Json(DataResponse {
        data: LoginResponse {
            access_token,
            expires_in: state.config.jwt.access_token_expiry_mins * 60,
            user,
        },
    }))
}

/// POST /api/v1/auth/logout
///
/// Close the caller's session. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    state.sessions.close(auth.session_id).await;
    tracing::info!(user_id = auth.user.id, session_id = %auth.session_id, "User logged out");
    StatusCode::NO_CONTENT
}

/// GET /api/v1/auth/me
pub async fn me(auth: AuthUser) -> Json<DataResponse<MeResponse>> {
    let menu = menu_for(&auth.user);
    Json(DataResponse {
        data: MeResponse {
            user: auth.user,
            menu,
        },
    })
}
