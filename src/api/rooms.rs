//! Room management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::reservation::Reservation,
    models::room::{CreateRoom, Room, RoomStatus},
};

use super::AuthenticatedStaff;

/// Query for the room-status view
#[derive(Deserialize, IntoParams, ToSchema)]
pub struct RoomStatusQuery {
    /// Day to report occupancy for; defaults to today
    pub on: Option<NaiveDate>,
}

/// List rooms with their occupancy on a day
#[utoipa::path(
    get,
    path = "/rooms",
    tag = "rooms",
    security(("bearer_auth" = [])),
    params(RoomStatusQuery),
    responses(
        (status = 200, description = "Rooms with occupancy", body = Vec<RoomStatus>)
    )
)]
pub async fn list_rooms(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<RoomStatusQuery>,
) -> AppResult<Json<Vec<RoomStatus>>> {
    let day = query.on.unwrap_or_else(|| Utc::now().date_naive());
    let rooms = state.services.rooms.list_with_status(day).await?;
    Ok(Json(rooms))
}

/// Create a room
#[utoipa::path(
    post,
    path = "/rooms",
    tag = "rooms",
    security(("bearer_auth" = [])),
    request_body = CreateRoom,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 400, description = "Missing room number"),
        (status = 409, description = "Room number already exists")
    )
)]
pub async fn create_room(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(request): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    let room = state.services.rooms.create(&request.number).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// Delete a room and all of its reservations
#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    tag = "rooms",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn delete_room(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.rooms.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reservations for a room, newest stay first
#[utoipa::path(
    get,
    path = "/rooms/{id}/reservations",
    tag = "rooms",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room's reservations", body = Vec<Reservation>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn list_room_reservations(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state.services.reservations.list_for_room(id).await?;
    Ok(Json(reservations))
}
