//! Guest profile model
//!
//! Profiles are keyed by normalized guest name, independent of any single
//! reservation. Two physical guests sharing a name share one profile; the
//! history views depend on this.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Guest profile from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Guest {
    pub id: i32,
    /// Normalized name (trimmed, internal whitespace collapsed); unique
    pub name: String,
    pub passport: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub room_preference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Upsert guest profile request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpsertGuest {
    pub passport: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub room_preference: Option<String>,
}

/// Collapse internal whitespace and trim. Applied before every guest
/// comparison, lookup and upsert.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn normalize_collapses_and_trims() {
        assert_eq!(normalize_name("  Ana   Ruiz "), "Ana Ruiz");
        assert_eq!(normalize_name("Ana\tRuiz"), "Ana Ruiz");
        assert_eq!(normalize_name("Ana Ruiz"), "Ana Ruiz");
        assert_eq!(normalize_name("   "), "");
    }
}
