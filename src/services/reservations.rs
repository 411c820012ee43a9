//! Reservation management service
//!
//! Single write path for reservations: normalize and validate the
//! candidate, let the repository run the availability gate and the write
//! in one transaction, then upsert the guest profile under the stay's
//! normalized name.

use chrono::NaiveDate;

use crate::{
    calendar,
    error::{AppError, AppResult},
    models::claims::Capability,
    models::guest::{normalize_name, UpsertGuest},
    models::reservation::{
        CreateReservation, DetailsInput, Reservation, ReservationDetails, ReservationWithRoom,
        ReservationView,
    },
    repository::Repository,
    services::tariffs,
};

#[derive(Clone)]
pub struct ReservationsService {
    repository: Repository,
}

impl ReservationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// May `[check_in, check_out)` be booked for this room?
    pub async fn check_availability(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_id: Option<i32>,
    ) -> AppResult<bool> {
        self.repository.rooms.get_by_id(room_id).await?;
        if calendar::nights(check_in, check_out) <= 0 {
            return Err(AppError::Range(
                "Check-out must be after check-in".to_string(),
            ));
        }
        self.repository
            .reservations
            .is_available(room_id, check_in, check_out, exclude_id)
            .await
    }

    fn validate(data: &mut CreateReservation) -> AppResult<()> {
        data.guest_name = normalize_name(&data.guest_name);
        if data.guest_name.is_empty() {
            return Err(AppError::Validation("Guest name is required".to_string()));
        }
        if calendar::nights(data.check_in, data.check_out) <= 0 {
            return Err(AppError::Range(
                "Check-out must be after check-in".to_string(),
            ));
        }
        if data.occupants < 1 {
            return Err(AppError::Validation(
                "Occupant count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a reservation
    pub async fn create(&self, mut data: CreateReservation) -> AppResult<Reservation> {
        Self::validate(&mut data)?;
        let reservation = self.repository.reservations.create(&data).await?;
        self.repository
            .guests
            .upsert(&reservation.guest_name, &UpsertGuest::default())
            .await?;
        Ok(reservation)
    }

    /// Update a reservation; the id is stable across updates
    pub async fn update(&self, id: i32, mut data: CreateReservation) -> AppResult<Reservation> {
        Self::validate(&mut data)?;
        let reservation = self.repository.reservations.update(id, &data).await?;
        self.repository
            .guests
            .upsert(&reservation.guest_name, &UpsertGuest::default())
            .await?;
        Ok(reservation)
    }

    /// Delete a reservation (cascades to its details record)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.reservations.delete(id).await
    }

    /// Reservation with details and computed financials. Payment fields are
    /// stripped unless the capability allows viewing them.
    pub async fn get_view(&self, id: i32, capability: Capability) -> AppResult<ReservationView> {
        let reservation = self.repository.reservations.get_by_id(id).await?;
        let details = self.repository.reservations.get_details(id).await?;

        let table = self.repository.tariffs.table().await?;
        let nights = calendar::nights(reservation.check_in, reservation.check_out);
        let (override_rate, room_type) = details
            .as_ref()
            .map(|d| (d.tariff, d.room_type.clone()))
            .unwrap_or_default();
        let nightly_rate =
            tariffs::effective_nightly_rate(override_rate, room_type.as_deref(), &table);
        let total = tariffs::total(nightly_rate, nights);

        Ok(ReservationView {
            reservation,
            details: details.map(|d| redact(d, capability)),
            nights,
            nightly_rate,
            total,
        })
    }

    /// Merge-on-save write of the details record. The merged result is
    /// redacted for the caller the same way reads are.
    pub async fn save_details(
        &self,
        id: i32,
        input: &DetailsInput,
        capability: Capability,
    ) -> AppResult<ReservationDetails> {
        let reservation = self.repository.reservations.get_by_id(id).await?;
        let existing = self.repository.reservations.get_details(id).await?;
        let merged = tariffs::merge_details(id, input, existing.as_ref());
        let saved = self.repository.reservations.save_details(&merged).await?;

        // A stay's passport and room type flow into the guest profile
        self.repository
            .guests
            .upsert(
                &reservation.guest_name,
                &UpsertGuest {
                    passport: saved.passport.clone(),
                    room_preference: saved.room_type.clone(),
                    ..Default::default()
                },
            )
            .await?;

        Ok(redact(saved, capability))
    }

    /// Reservations for a room, newest stay first
    pub async fn list_for_room(&self, room_id: i32) -> AppResult<Vec<Reservation>> {
        self.repository.rooms.get_by_id(room_id).await?;
        self.repository.reservations.list_for_room(room_id).await
    }

    /// Stay history for a guest name (normalized before lookup)
    pub async fn history_for_guest(&self, name: &str) -> AppResult<Vec<ReservationWithRoom>> {
        let name = normalize_name(name);
        self.repository.reservations.history_for_guest(&name).await
    }
}

/// Strip payment fields unless the session may view them. Write-visible,
/// read-gated: staff can save card data but only admin reads it back.
fn redact(mut details: ReservationDetails, capability: Capability) -> ReservationDetails {
    if !capability.can_view_payment_details {
        details.card_holder = None;
        details.card_number = None;
        details.card_expiry = None;
        details.card_cvv = None;
        details.payment_note = None;
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn details() -> ReservationDetails {
        ReservationDetails {
            reservation_id: 1,
            passport: Some("X1".to_string()),
            room_type: Some("Suite".to_string()),
            tariff: Decimal::from(150),
            card_holder: Some("Ana Ruiz".to_string()),
            card_number: Some("4111111111111111".to_string()),
            card_expiry: Some("12/27".to_string()),
            card_cvv: Some("123".to_string()),
            payment_note: Some("paid".to_string()),
        }
    }

    #[test]
    fn staff_session_sees_no_payment_fields() {
        let redacted = redact(
            details(),
            Capability {
                can_view_payment_details: false,
            },
        );
        assert!(redacted.card_holder.is_none());
        assert!(redacted.card_number.is_none());
        assert!(redacted.card_expiry.is_none());
        assert!(redacted.card_cvv.is_none());
        assert!(redacted.payment_note.is_none());
        // Non-payment fields stay visible
        assert_eq!(redacted.passport.as_deref(), Some("X1"));
        assert_eq!(redacted.tariff, Decimal::from(150));
    }

    #[test]
    fn admin_session_sees_payment_fields() {
        let full = redact(
            details(),
            Capability {
                can_view_payment_details: true,
            },
        );
        assert_eq!(full.card_number.as_deref(), Some("4111111111111111"));
    }
}
