//! Occupancy, daily report and calendar endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::{AppError, AppResult},
    models::report::{CalendarCell, DayRow, ReportFilters},
    models::reservation::{ReservationStatus, ReservationWithRoom},
};

use super::AuthenticatedStaff;

/// How a day query treats terminal reservations
#[derive(Debug, Clone, Copy, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyMode {
    /// Non-terminal reservations only: who occupies the room
    #[default]
    Active,
    /// Status-blind: who is on the books for the day
    Covering,
}

/// Occupancy query: either a single day or a range
#[derive(Deserialize, IntoParams)]
pub struct OccupancyQuery {
    pub day: Option<NaiveDate>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub mode: OccupancyMode,
}

/// Daily report query
#[derive(Deserialize, IntoParams)]
pub struct DailyReportQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub search: Option<String>,
    pub room: Option<String>,
    pub status: Option<ReservationStatus>,
}

/// Reservations for a day or a date range
#[utoipa::path(
    get,
    path = "/occupancy",
    tag = "occupancy",
    security(("bearer_auth" = [])),
    params(OccupancyQuery),
    responses(
        (status = 200, description = "Matching reservations", body = Vec<ReservationWithRoom>),
        (status = 400, description = "Neither day nor range supplied")
    )
)]
pub async fn get_occupancy(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<OccupancyQuery>,
) -> AppResult<Json<Vec<ReservationWithRoom>>> {
    let reservations = match (query.day, query.start, query.end) {
        (Some(day), None, None) => match query.mode {
            OccupancyMode::Active => state.services.occupancy.active_on(day).await?,
            OccupancyMode::Covering => state.services.occupancy.covering_on(day).await?,
        },
        (None, Some(start), Some(end)) => state.services.occupancy.in_range(start, end).await?,
        _ => {
            return Err(AppError::Validation(
                "Supply either day= or start= and end=".to_string(),
            ))
        }
    };
    Ok(Json(reservations))
}

/// Flattened per-day report over a date range
#[utoipa::path(
    get,
    path = "/reports/daily",
    tag = "occupancy",
    security(("bearer_auth" = [])),
    params(DailyReportQuery),
    responses(
        (status = 200, description = "Day rows", body = Vec<DayRow>),
        (status = 400, description = "Invalid range")
    )
)]
pub async fn get_daily_report(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<DailyReportQuery>,
) -> AppResult<Json<Vec<DayRow>>> {
    let filters = ReportFilters {
        search: query.search,
        room_number: query.room,
        status: query.status,
    };
    let rows = state
        .services
        .occupancy
        .daily_report(query.start, query.end, &filters)
        .await?;
    Ok(Json(rows))
}

/// 6-week calendar grid for a month
#[utoipa::path(
    get,
    path = "/calendar/{year}/{month}",
    tag = "occupancy",
    security(("bearer_auth" = [])),
    params(
        ("year" = i32, Path, description = "Year"),
        ("month" = u32, Path, description = "Month (1-12)")
    ),
    responses(
        (status = 200, description = "42 grid cells", body = Vec<CalendarCell>),
        (status = 400, description = "Invalid month")
    )
)]
pub async fn get_calendar(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path((year, month)): Path<(i32, u32)>,
) -> AppResult<Json<Vec<CalendarCell>>> {
    let cells = state.services.occupancy.month_view(year, month).await?;
    Ok(Json(cells))
}
