//! Blackout period model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Hotel-wide blocked date range `[start_date, end_date)`, independent of
/// rooms. The end date is exclusive: a stay may start on it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Blackout {
    pub id: i32,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create blackout request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlackout {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
}
