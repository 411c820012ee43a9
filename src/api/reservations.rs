//! Reservation endpoints: availability, lifecycle, details

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::reservation::{
        CreateReservation, DetailsInput, Reservation, ReservationStatus, ReservationView,
        ReservationDetails,
    },
};

use super::AuthenticatedStaff;

/// Availability query
#[derive(Deserialize, IntoParams, ToSchema)]
pub struct AvailabilityQuery {
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Reservation to ignore, for edit flows
    pub exclude_id: Option<i32>,
}

/// Availability verdict
#[derive(Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub available: bool,
}

/// Create/update reservation request
#[derive(Deserialize, Validate, ToSchema)]
pub struct ReservationRequest {
    pub room_id: i32,
    pub guest_name: String,
    pub status: ReservationStatus,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub notes: Option<String>,
    /// Number of occupants, at least 1
    #[validate(range(min = 1))]
    pub occupants: i16,
}

/// Reservation id response
#[derive(Serialize, ToSchema)]
pub struct ReservationIdResponse {
    pub id: i32,
}

impl From<ReservationRequest> for CreateReservation {
    fn from(r: ReservationRequest) -> Self {
        CreateReservation {
            room_id: r.room_id,
            guest_name: r.guest_name,
            status: r.status,
            check_in: r.check_in,
            check_out: r.check_out,
            notes: r.notes,
            occupants: r.occupants,
        }
    }
}

/// Check whether a room can be booked for a date range
#[utoipa::path(
    get,
    path = "/availability",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Availability verdict", body = AvailabilityResponse),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn check_availability(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let available = state
        .services
        .reservations
        .check_availability(query.room_id, query.check_in, query.check_out, query.exclude_id)
        .await?;
    Ok(Json(AvailabilityResponse { available }))
}

/// Create a reservation
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    security(("bearer_auth" = [])),
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationIdResponse),
        (status = 400, description = "Missing guest name or invalid dates"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Blackout or room conflict")
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(request): Json<ReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationIdResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reservation = state.services.reservations.create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ReservationIdResponse { id: reservation.id }),
    ))
}

/// Update a reservation
#[utoipa::path(
    put,
    path = "/reservations/{id}",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationIdResponse),
        (status = 400, description = "Missing guest name or invalid dates"),
        (status = 404, description = "Reservation not found"),
        (status = 409, description = "Blackout or room conflict")
    )
)]
pub async fn update_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(request): Json<ReservationRequest>,
) -> AppResult<Json<ReservationIdResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reservation = state.services.reservations.update(id, request.into()).await?;
    Ok(Json(ReservationIdResponse { id: reservation.id }))
}

/// Get a reservation with details and computed totals. Payment fields are
/// only present for admin sessions.
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation with details", body = ReservationView),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<ReservationView>> {
    let view = state
        .services
        .reservations
        .get_view(id, claims.capability())
        .await?;
    Ok(Json(view))
}

/// Delete a reservation
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.reservations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Save reservation details with merge-on-save semantics
#[utoipa::path(
    put,
    path = "/reservations/{id}/details",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = DetailsInput,
    responses(
        (status = 200, description = "Details saved", body = ReservationDetails),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn save_details(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(request): Json<DetailsInput>,
) -> AppResult<Json<ReservationDetails>> {
    let details = state
        .services
        .reservations
        .save_details(id, &request, claims.capability())
        .await?;
    Ok(Json(details))
}
