//! Guests repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::guest::{Guest, UpsertGuest},
};

#[derive(Clone)]
pub struct GuestsRepository {
    pool: Pool<Postgres>,
}

impl GuestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a guest profile by normalized name
    pub async fn get_by_name(&self, name: &str) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guest '{}' not found", name)))
    }

    /// Upsert a guest profile keyed by normalized name. Blank incoming
    /// fields keep the previously stored values, so a reservation save
    /// never wipes profile data it did not carry.
    pub async fn upsert(&self, name: &str, data: &UpsertGuest) -> AppResult<Guest> {
        let now = Utc::now();
        let guest = sqlx::query_as::<_, Guest>(
            r#"
            INSERT INTO guests
                (name, passport, birth_date, email, phone, address, room_preference,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            ON CONFLICT (name) DO UPDATE SET
                passport = COALESCE(NULLIF(EXCLUDED.passport, ''), guests.passport),
                birth_date = COALESCE(EXCLUDED.birth_date, guests.birth_date),
                email = COALESCE(NULLIF(EXCLUDED.email, ''), guests.email),
                phone = COALESCE(NULLIF(EXCLUDED.phone, ''), guests.phone),
                address = COALESCE(NULLIF(EXCLUDED.address, ''), guests.address),
                room_preference = COALESCE(NULLIF(EXCLUDED.room_preference, ''), guests.room_preference),
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(&data.passport)
        .bind(data.birth_date)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.room_preference)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(guest)
    }

    /// Case-insensitive name search for the guest picker
    pub async fn search_names(&self, query: &str, limit: i64) -> AppResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM guests WHERE name ILIKE '%' || $1 || '%' ORDER BY name LIMIT $2",
        )
        .bind(query)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }
}
