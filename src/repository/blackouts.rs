//! Blackouts repository for database operations

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::blackout::{Blackout, CreateBlackout},
};

#[derive(Clone)]
pub struct BlackoutsRepository {
    pool: Pool<Postgres>,
}

impl BlackoutsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Add a blackout period. Range validity is checked by the service.
    pub async fn create(&self, data: &CreateBlackout) -> AppResult<Blackout> {
        let row = sqlx::query_as::<_, Blackout>(
            r#"
            INSERT INTO blackouts (title, start_date, end_date, notes, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Remove a blackout period
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM blackouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Blackout with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// All blackout periods, most recent first
    pub async fn list(&self) -> AppResult<Vec<Blackout>> {
        let rows = sqlx::query_as::<_, Blackout>(
            "SELECT * FROM blackouts ORDER BY start_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Blackouts intersecting a display window, ordered by start date
    pub async fn in_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Blackout>> {
        let rows = sqlx::query_as::<_, Blackout>(
            "SELECT * FROM blackouts WHERE start_date < $2 AND end_date > $1 ORDER BY start_date",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Does `[start, end)` intersect any stored blackout?
    pub async fn intersects_any(&self, start: NaiveDate, end: NaiveDate) -> AppResult<bool> {
        super::reservations::blackout_overlap_exists(&self.pool, start, end).await
    }
}
