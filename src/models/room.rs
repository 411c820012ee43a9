//! Room model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::reservation::ReservationStatus;

/// Room model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i32,
    /// Unique display number; free-form, not necessarily numeric
    pub number: String,
}

/// Create room request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRoom {
    pub number: String,
}

/// Room with its occupancy on a given day, for the room-status view
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct RoomStatus {
    pub id: i32,
    pub number: String,
    pub reservation_id: Option<i32>,
    pub guest_name: Option<String>,
    pub status: Option<ReservationStatus>,
}
