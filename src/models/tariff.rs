//! Tariff model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Nightly rate for a room type
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tariff {
    pub room_type: String,
    pub nightly_rate: Decimal,
}

/// Update tariffs request: full replacement of the listed room types
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetTariffs {
    pub tariffs: Vec<Tariff>,
}
