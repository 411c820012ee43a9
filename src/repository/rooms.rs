//! Rooms repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::room::{Room, RoomStatus},
};

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Postgres>,
}

impl RoomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get room by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Room> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room with id {} not found", id)))
    }

    /// List all rooms ordered by display number
    pub async fn list(&self) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY number")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List rooms with the non-terminal reservation covering `day`, if any
    pub async fn list_with_status(&self, day: NaiveDate) -> AppResult<Vec<RoomStatus>> {
        let rows = sqlx::query_as::<_, RoomStatus>(
            r#"
            SELECT ro.id, ro.number,
                   r.id AS reservation_id, r.guest_name, r.status
            FROM rooms ro
            LEFT JOIN reservations r
                   ON r.room_id = ro.id
                  AND r.check_in <= $1 AND r.check_out > $1
                  AND r.status NOT IN ('noshow', 'checkedout')
            ORDER BY ro.number
            "#,
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a room; display numbers are unique
    pub async fn create(&self, number: &str) -> AppResult<Room> {
        let taken: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM rooms WHERE number = $1)")
            .bind(number)
            .fetch_one(&self.pool)
            .await?;
        if taken {
            return Err(AppError::Conflict(format!(
                "Room number '{}' already exists",
                number
            )));
        }

        let room = sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (number) VALUES ($1) RETURNING *",
        )
        .bind(number)
        .fetch_one(&self.pool)
        .await?;
        Ok(room)
    }

    /// Delete a room, cascading through its reservations to their details.
    /// The ownership graph is walked explicitly in one transaction rather
    /// than leaning on FK cascade.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM reservation_details
            WHERE reservation_id IN (SELECT id FROM reservations WHERE room_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM reservations WHERE room_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Room with id {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
