//! Password gate endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::claims::StaffRole};

use super::AuthenticatedStaff;

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Staff or admin password
    pub password: String,
}

/// Login response
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub role: StaffRole,
}

/// Current session info
#[derive(Serialize, ToSchema)]
pub struct SessionInfo {
    pub role: StaffRole,
    pub can_view_payment_details: bool,
}

/// Open a staff session
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 401, description = "Invalid password")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, role) = state.services.auth.login(&request.password)?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        role,
    }))
}

/// Describe the current session
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session info", body = SessionInfo),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(AuthenticatedStaff(claims): AuthenticatedStaff) -> Json<SessionInfo> {
    Json(SessionInfo {
        role: claims.role,
        can_view_payment_details: claims.capability().can_view_payment_details,
    })
}
