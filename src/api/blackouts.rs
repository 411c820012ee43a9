//! Blackout period endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::blackout::{Blackout, CreateBlackout},
};

use super::AuthenticatedStaff;

/// List blackout periods, most recent first
#[utoipa::path(
    get,
    path = "/blackouts",
    tag = "blackouts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Blackout periods", body = Vec<Blackout>)
    )
)]
pub async fn list_blackouts(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
) -> AppResult<Json<Vec<Blackout>>> {
    let blackouts = state.services.blackouts.list().await?;
    Ok(Json(blackouts))
}

/// Add a blackout period
#[utoipa::path(
    post,
    path = "/blackouts",
    tag = "blackouts",
    security(("bearer_auth" = [])),
    request_body = CreateBlackout,
    responses(
        (status = 201, description = "Blackout created", body = Blackout),
        (status = 400, description = "Missing title or invalid range")
    )
)]
pub async fn create_blackout(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(request): Json<CreateBlackout>,
) -> AppResult<(StatusCode, Json<Blackout>)> {
    let blackout = state.services.blackouts.create(request).await?;
    Ok((StatusCode::CREATED, Json(blackout)))
}

/// Remove a blackout period
#[utoipa::path(
    delete,
    path = "/blackouts/{id}",
    tag = "blackouts",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Blackout ID")
    ),
    responses(
        (status = 204, description = "Blackout removed"),
        (status = 404, description = "Blackout not found")
    )
)]
pub async fn delete_blackout(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.blackouts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
