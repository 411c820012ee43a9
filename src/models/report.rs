//! Daily report rows and calendar view cells

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::reservation::ReservationStatus;

/// One day of one reservation, as produced by the daily expansion
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DayRow {
    pub day: NaiveDate,
    pub reservation_id: i32,
    pub room_number: String,
    pub guest_name: String,
    pub status: ReservationStatus,
    /// 1-based position of this day within the full stay
    pub day_index: i64,
    /// Total nights of the full stay (not clipped to the query window)
    pub total_nights: i64,
    /// "Day K of N" position marker
    pub position: String,
    pub occupants: i16,
    pub nightly_rate: Decimal,
    pub total: Decimal,
}

/// Filters for the daily report
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReportFilters {
    /// Case-insensitive substring match over guest name and notes
    pub search: Option<String>,
    pub room_number: Option<String>,
    pub status: Option<ReservationStatus>,
}

/// One cell of the 6-week calendar grid
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for leading/trailing days outside the requested month
    pub in_month: bool,
    /// Reservations covering this day, regardless of status
    pub reservation_count: i64,
    pub blackout: bool,
}
