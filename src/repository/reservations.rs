//! Reservations repository for database operations
//!
//! Every create/update runs its availability checks and the subsequent
//! write inside one transaction, so the verdict and the persisted row see
//! the same snapshot of blackouts and competing reservations.

use chrono::{NaiveDate, Utc};
use sqlx::{PgExecutor, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::reservation::{
        CreateReservation, Reservation, ReservationDetails, ReservationWithRoom,
    },
};

/// True if any blackout period intersects the half-open range `[start, end)`
pub async fn blackout_overlap_exists<'e, E>(
    executor: E,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<bool>
where
    E: PgExecutor<'e>,
{
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM blackouts WHERE start_date < $2 AND end_date > $1)",
    )
    .bind(start)
    .bind(end)
    .fetch_one(executor)
    .await?;
    Ok(exists)
}

/// True if a non-terminal reservation for `room_id` intersects the range.
/// `exclude_id` skips a reservation being edited so it does not collide
/// with itself.
pub async fn room_conflict_exists<'e, E>(
    executor: E,
    room_id: i32,
    start: NaiveDate,
    end: NaiveDate,
    exclude_id: Option<i32>,
) -> AppResult<bool>
where
    E: PgExecutor<'e>,
{
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM reservations
            WHERE room_id = $1
              AND status NOT IN ('noshow', 'checkedout')
              AND check_in < $3
              AND check_out > $2
              AND ($4::int4 IS NULL OR id <> $4)
        )
        "#,
    )
    .bind(room_id)
    .bind(start)
    .bind(end)
    .bind(exclude_id)
    .fetch_one(executor)
    .await?;
    Ok(exists)
}

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get reservation by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation with id {} not found", id)))
    }

    /// Availability check outside any mutation, for the query endpoint
    pub async fn is_available(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_id: Option<i32>,
    ) -> AppResult<bool> {
        if blackout_overlap_exists(&self.pool, check_in, check_out).await? {
            return Ok(false);
        }
        Ok(!room_conflict_exists(&self.pool, room_id, check_in, check_out, exclude_id).await?)
    }

    /// Create a reservation, gated by the availability checks
    pub async fn create(&self, data: &CreateReservation) -> AppResult<Reservation> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let room_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM rooms WHERE id = $1)")
                .bind(data.room_id)
                .fetch_one(&mut *tx)
                .await?;
        if !room_exists {
            return Err(AppError::NotFound(format!(
                "Room with id {} not found",
                data.room_id
            )));
        }

        if blackout_overlap_exists(&mut *tx, data.check_in, data.check_out).await? {
            return Err(AppError::BlackoutConflict(
                "Requested dates fall in a blocked period".to_string(),
            ));
        }
        if room_conflict_exists(&mut *tx, data.room_id, data.check_in, data.check_out, None)
            .await?
        {
            return Err(AppError::RoomConflict(
                "Room is already booked for the requested dates".to_string(),
            ));
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations
                (room_id, guest_name, status, check_in, check_out, notes, occupants,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING *
            "#,
        )
        .bind(data.room_id)
        .bind(&data.guest_name)
        .bind(data.status)
        .bind(data.check_in)
        .bind(data.check_out)
        .bind(&data.notes)
        .bind(data.occupants)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(reservation)
    }

    /// Update a reservation, re-running the availability checks with the
    /// reservation itself excluded
    pub async fn update(&self, id: i32, data: &CreateReservation) -> AppResult<Reservation> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let existing: Option<i32> =
            sqlx::query_scalar("SELECT id FROM reservations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            return Err(AppError::NotFound(format!(
                "Reservation with id {} not found",
                id
            )));
        }

        if blackout_overlap_exists(&mut *tx, data.check_in, data.check_out).await? {
            return Err(AppError::BlackoutConflict(
                "Requested dates fall in a blocked period".to_string(),
            ));
        }
        if room_conflict_exists(
            &mut *tx,
            data.room_id,
            data.check_in,
            data.check_out,
            Some(id),
        )
        .await?
        {
            return Err(AppError::RoomConflict(
                "Room is already booked for the requested dates".to_string(),
            ));
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET room_id = $2, guest_name = $3, status = $4, check_in = $5,
                check_out = $6, notes = $7, occupants = $8, updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.room_id)
        .bind(&data.guest_name)
        .bind(data.status)
        .bind(data.check_in)
        .bind(data.check_out)
        .bind(&data.notes)
        .bind(data.occupants)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(reservation)
    }

    /// Delete a reservation, cascading to its details record
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM reservation_details WHERE reservation_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Reservation with id {} not found",
                id
            )));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Reservations for a room, newest stay first
    pub async fn list_for_room(&self, room_id: i32) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE room_id = $1 ORDER BY check_in DESC",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Stay history for a normalized guest name
    pub async fn history_for_guest(&self, guest_name: &str) -> AppResult<Vec<ReservationWithRoom>> {
        let rows = sqlx::query_as::<_, ReservationWithRoom>(
            r#"
            SELECT r.id, r.room_id, ro.number AS room_number, r.guest_name, r.status,
                   r.check_in, r.check_out, r.notes, r.occupants,
                   d.room_type, COALESCE(d.tariff, 0) AS tariff
            FROM reservations r
            JOIN rooms ro ON r.room_id = ro.id
            LEFT JOIN reservation_details d ON d.reservation_id = r.id
            WHERE r.guest_name = $1
            ORDER BY r.check_in DESC, r.updated_at DESC
            "#,
        )
        .bind(guest_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Reservations occupying a room on `day` (non-terminal only)
    pub async fn active_on(&self, day: NaiveDate) -> AppResult<Vec<ReservationWithRoom>> {
        let rows = sqlx::query_as::<_, ReservationWithRoom>(
            r#"
            SELECT r.id, r.room_id, ro.number AS room_number, r.guest_name, r.status,
                   r.check_in, r.check_out, r.notes, r.occupants,
                   d.room_type, COALESCE(d.tariff, 0) AS tariff
            FROM reservations r
            JOIN rooms ro ON r.room_id = ro.id
            LEFT JOIN reservation_details d ON d.reservation_id = r.id
            WHERE r.check_in <= $1 AND r.check_out > $1
              AND r.status NOT IN ('noshow', 'checkedout')
            ORDER BY r.check_in, ro.number, r.id
            "#,
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Reservations on the books for `day`, regardless of terminal state
    pub async fn covering_on(&self, day: NaiveDate) -> AppResult<Vec<ReservationWithRoom>> {
        let rows = sqlx::query_as::<_, ReservationWithRoom>(
            r#"
            SELECT r.id, r.room_id, ro.number AS room_number, r.guest_name, r.status,
                   r.check_in, r.check_out, r.notes, r.occupants,
                   d.room_type, COALESCE(d.tariff, 0) AS tariff
            FROM reservations r
            JOIN rooms ro ON r.room_id = ro.id
            LEFT JOIN reservation_details d ON d.reservation_id = r.id
            WHERE r.check_in <= $1 AND r.check_out > $1
            ORDER BY r.check_in, ro.number, r.id
            "#,
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Reservations whose interval intersects `[start, end)`, ordered by
    /// check-in, then room number, then id
    pub async fn in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ReservationWithRoom>> {
        let rows = sqlx::query_as::<_, ReservationWithRoom>(
            r#"
            SELECT r.id, r.room_id, ro.number AS room_number, r.guest_name, r.status,
                   r.check_in, r.check_out, r.notes, r.occupants,
                   d.room_type, COALESCE(d.tariff, 0) AS tariff
            FROM reservations r
            JOIN rooms ro ON r.room_id = ro.id
            LEFT JOIN reservation_details d ON d.reservation_id = r.id
            WHERE r.check_in < $2 AND r.check_out > $1
            ORDER BY r.check_in, ro.number, r.id
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get the details record for a reservation, if one exists
    pub async fn get_details(&self, reservation_id: i32) -> AppResult<Option<ReservationDetails>> {
        let details = sqlx::query_as::<_, ReservationDetails>(
            "SELECT * FROM reservation_details WHERE reservation_id = $1",
        )
        .bind(reservation_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(details)
    }

    /// Write a fully merged details record (insert or replace)
    pub async fn save_details(&self, details: &ReservationDetails) -> AppResult<ReservationDetails> {
        let row = sqlx::query_as::<_, ReservationDetails>(
            r#"
            INSERT INTO reservation_details
                (reservation_id, passport, room_type, tariff,
                 card_holder, card_number, card_expiry, card_cvv, payment_note)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (reservation_id) DO UPDATE SET
                passport = EXCLUDED.passport,
                room_type = EXCLUDED.room_type,
                tariff = EXCLUDED.tariff,
                card_holder = EXCLUDED.card_holder,
                card_number = EXCLUDED.card_number,
                card_expiry = EXCLUDED.card_expiry,
                card_cvv = EXCLUDED.card_cvv,
                payment_note = EXCLUDED.payment_note
            RETURNING *
            "#,
        )
        .bind(details.reservation_id)
        .bind(&details.passport)
        .bind(&details.room_type)
        .bind(details.tariff)
        .bind(&details.card_holder)
        .bind(&details.card_number)
        .bind(&details.card_expiry)
        .bind(&details.card_cvv)
        .bind(&details.payment_note)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
