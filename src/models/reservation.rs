//! Reservation model and related types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Reservation lifecycle status
///
/// `NoShow` and `CheckedOut` are terminal: they no longer occupy the room
/// for conflict purposes, but still show up in covering/history queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum ReservationStatus {
    Reserved,
    CheckedIn,
    NoShow,
    CheckedOut,
}

impl ReservationStatus {
    /// Terminal statuses free the room for new bookings
    pub fn is_terminal(self) -> bool {
        matches!(self, ReservationStatus::NoShow | ReservationStatus::CheckedOut)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Reserved => "reserved",
            ReservationStatus::CheckedIn => "checkedin",
            ReservationStatus::NoShow => "noshow",
            ReservationStatus::CheckedOut => "checkedout",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation model from database
///
/// The stay occupies the half-open range `[check_in, check_out)`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    pub guest_name: String,
    pub status: ReservationStatus,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub notes: Option<String>,
    pub occupants: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-stay extension of a reservation (1:1, shares its identity)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ReservationDetails {
    pub reservation_id: i32,
    pub passport: Option<String>,
    pub room_type: Option<String>,
    /// Explicit nightly rate override; 0 means "use the room-type default"
    pub tariff: Decimal,
    pub card_holder: Option<String>,
    pub card_number: Option<String>,
    pub card_expiry: Option<String>,
    pub card_cvv: Option<String>,
    pub payment_note: Option<String>,
}

/// Candidate reservation collected from the caller
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservation {
    pub room_id: i32,
    pub guest_name: String,
    pub status: ReservationStatus,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub notes: Option<String>,
    pub occupants: i16,
}

/// Incoming details for a merge-on-save write
///
/// Blank payment fields keep the previously stored values; a tariff of
/// exactly 0 keeps a stored non-zero tariff.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DetailsInput {
    pub passport: Option<String>,
    pub room_type: Option<String>,
    pub tariff: Option<Decimal>,
    pub card_holder: Option<String>,
    pub card_number: Option<String>,
    pub card_expiry: Option<String>,
    pub card_cvv: Option<String>,
    pub payment_note: Option<String>,
}

/// Reservation with details and computed financials for display
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReservationView {
    pub reservation: Reservation,
    pub details: Option<ReservationDetails>,
    pub nights: i64,
    pub nightly_rate: Decimal,
    pub total: Decimal,
}

/// Reservation joined with its room and details, as used by the
/// occupancy and report queries
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ReservationWithRoom {
    pub id: i32,
    pub room_id: i32,
    pub room_number: String,
    pub guest_name: String,
    pub status: ReservationStatus,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub notes: Option<String>,
    pub occupants: i16,
    pub room_type: Option<String>,
    /// Explicit tariff override from the details record (0 when absent)
    pub tariff: Decimal,
}
