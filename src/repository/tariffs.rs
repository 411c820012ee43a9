//! Tariffs repository for database operations

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::tariff::Tariff};

#[derive(Clone)]
pub struct TariffsRepository {
    pool: Pool<Postgres>,
}

impl TariffsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All tariffs ordered by room type
    pub async fn list(&self) -> AppResult<Vec<Tariff>> {
        let rows = sqlx::query_as::<_, Tariff>("SELECT * FROM tariffs ORDER BY room_type")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Room type -> nightly rate lookup table
    pub async fn table(&self) -> AppResult<HashMap<String, Decimal>> {
        let rows = self.list().await?;
        Ok(rows
            .into_iter()
            .map(|t| (t.room_type, t.nightly_rate))
            .collect())
    }

    /// Upsert the given tariff rows
    pub async fn set(&self, tariffs: &[Tariff]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        for tariff in tariffs {
            sqlx::query(
                r#"
                INSERT INTO tariffs (room_type, nightly_rate)
                VALUES ($1, $2)
                ON CONFLICT (room_type) DO UPDATE SET nightly_rate = EXCLUDED.nightly_rate
                "#,
            )
            .bind(&tariff.room_type)
            .bind(tariff.nightly_rate)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
