//! Key/value settings endpoints

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedStaff;

/// Update settings request
#[derive(Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub entries: HashMap<String, String>,
}

/// Get all settings
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Settings map", body = HashMap<String, String>)
    )
)]
pub async fn get_settings(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
) -> AppResult<Json<HashMap<String, String>>> {
    let settings = state.services.settings.get_all().await?;
    Ok(Json(settings))
}

/// Upsert settings entries (admin only)
#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings map", body = HashMap<String, String>),
        (status = 403, description = "Admin session required")
    )
)]
pub async fn update_settings(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Json(request): Json<UpdateSettingsRequest>,
) -> AppResult<Json<HashMap<String, String>>> {
    claims.require_admin()?;
    let settings = state.services.settings.update(&request.entries).await?;
    Ok(Json(settings))
}
