//! Guest profile endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::guest::{Guest, UpsertGuest},
    models::reservation::ReservationWithRoom,
};

use super::AuthenticatedStaff;

/// Guest name search query
#[derive(Deserialize, IntoParams)]
pub struct GuestSearchQuery {
    pub query: String,
    pub limit: Option<i64>,
}

/// Search guest names
#[utoipa::path(
    get,
    path = "/guests",
    tag = "guests",
    security(("bearer_auth" = [])),
    params(GuestSearchQuery),
    responses(
        (status = 200, description = "Matching guest names", body = Vec<String>)
    )
)]
pub async fn search_guests(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<GuestSearchQuery>,
) -> AppResult<Json<Vec<String>>> {
    let names = state
        .services
        .guests
        .search_names(&query.query, query.limit)
        .await?;
    Ok(Json(names))
}

/// Get a guest profile by name
#[utoipa::path(
    get,
    path = "/guests/{name}",
    tag = "guests",
    security(("bearer_auth" = [])),
    params(
        ("name" = String, Path, description = "Guest name")
    ),
    responses(
        (status = 200, description = "Guest profile", body = Guest),
        (status = 404, description = "Guest not found")
    )
)]
pub async fn get_guest(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(name): Path<String>,
) -> AppResult<Json<Guest>> {
    let guest = state.services.guests.get(&name).await?;
    Ok(Json(guest))
}

/// Upsert a guest profile
#[utoipa::path(
    put,
    path = "/guests/{name}",
    tag = "guests",
    security(("bearer_auth" = [])),
    params(
        ("name" = String, Path, description = "Guest name")
    ),
    request_body = UpsertGuest,
    responses(
        (status = 200, description = "Guest profile", body = Guest),
        (status = 400, description = "Missing guest name")
    )
)]
pub async fn upsert_guest(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(name): Path<String>,
    Json(request): Json<UpsertGuest>,
) -> AppResult<Json<Guest>> {
    let guest = state.services.guests.upsert(&name, &request).await?;
    Ok(Json(guest))
}

/// Stay history for a guest, newest first
#[utoipa::path(
    get,
    path = "/guests/{name}/history",
    tag = "guests",
    security(("bearer_auth" = [])),
    params(
        ("name" = String, Path, description = "Guest name")
    ),
    responses(
        (status = 200, description = "Guest's stays", body = Vec<ReservationWithRoom>)
    )
)]
pub async fn get_guest_history(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<ReservationWithRoom>>> {
    let history = state.services.reservations.history_for_guest(&name).await?;
    Ok(Json(history))
}
