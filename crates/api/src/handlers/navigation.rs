//! Handlers for per-session navigation state.
//!
//! The client reports intents; the server owns the resulting state and
//! decides what may be rendered.

use axum::extract::State;
use axum::Json;
use faq_core::error::CoreError;
use faq_core::navigation::{menu_for, Intent, Navigation, Page, Screen};
use faq_core::user::User;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MenuItem {
    pub page: Page,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub navigation: Navigation,
    pub screen: Screen,
    pub menu: Vec<MenuItem>,
}

impl NavigationResponse {
    fn for_user(user: &User, navigation: Navigation) -> Self {
        Self {
            navigation,
            screen: navigation.screen(user),
            menu: menu_for(user)
                .into_iter()
                .map(|page| MenuItem {
                    page,
                    label: page.label(),
                })
                .collect(),
        }
    }
}

/// GET /api/v1/navigation
pub async fn current(auth: AuthUser) -> Json<DataResponse<NavigationResponse>> {
    Json(DataResponse {
        data: NavigationResponse::for_user(&auth.user, auth.navigation),
    })
}

/// POST /api/v1/navigation/intents
///
/// Apply one intent. Intents that do not fit the current state leave it
/// unchanged.
pub async fn apply_intent(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(intent): Json<Intent>,
) -> AppResult<Json<DataResponse<NavigationResponse>>> {
    let navigation = state
        .sessions
        .navigate(auth.session_id, intent)
        .await
        .ok_or_else(|| CoreError::Unauthorized("Session has ended".into()))?;

    tracing::debug!(user_id = auth.user.id, ?intent, view = ?navigation.view(), "Navigation intent applied");

    Ok(Json(DataResponse {
        data: NavigationResponse::for_user(&auth.user, navigation),
    }))
}
