//! Tariff resolution, totals and the merge-on-save policy for details
//!
//! A tariff of 0 means "no override"; blank incoming payment fields keep
//! the stored values.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    error::AppResult,
    models::reservation::{DetailsInput, ReservationDetails},
    models::tariff::Tariff,
    repository::Repository,
};

/// Rate actually charged per night: a positive explicit override wins,
/// otherwise the room-type default, otherwise 0 for unrecognized types.
pub fn effective_nightly_rate(
    explicit_override: Decimal,
    room_type: Option<&str>,
    table: &HashMap<String, Decimal>,
) -> Decimal {
    if explicit_override > Decimal::ZERO {
        return explicit_override;
    }
    room_type
        .and_then(|t| table.get(t).copied())
        .unwrap_or(Decimal::ZERO)
}

/// Stay total. Nights must be positive; guarded upstream.
pub fn total(nightly_rate: Decimal, nights: i64) -> Decimal {
    nightly_rate * Decimal::from(nights)
}

fn keep_if_blank(incoming: Option<&String>, existing: Option<&String>) -> Option<String> {
    match incoming {
        Some(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => existing.cloned(),
    }
}

fn cleaned(incoming: Option<&String>) -> Option<String> {
    incoming
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Merge incoming details over the stored record. Blank incoming payment
/// fields keep the stored values, so re-saving an unrelated field never
/// wipes card data; an incoming tariff of exactly 0 keeps a stored
/// non-zero tariff.
pub fn merge_details(
    reservation_id: i32,
    incoming: &DetailsInput,
    existing: Option<&ReservationDetails>,
) -> ReservationDetails {
    let incoming_tariff = incoming.tariff.unwrap_or(Decimal::ZERO);
    let tariff = if incoming_tariff == Decimal::ZERO {
        existing.map(|e| e.tariff).unwrap_or(Decimal::ZERO)
    } else {
        incoming_tariff
    };

    ReservationDetails {
        reservation_id,
        passport: cleaned(incoming.passport.as_ref()),
        room_type: cleaned(incoming.room_type.as_ref()),
        tariff,
        card_holder: keep_if_blank(
            incoming.card_holder.as_ref(),
            existing.and_then(|e| e.card_holder.as_ref()),
        ),
        card_number: keep_if_blank(
            incoming.card_number.as_ref(),
            existing.and_then(|e| e.card_number.as_ref()),
        ),
        card_expiry: keep_if_blank(
            incoming.card_expiry.as_ref(),
            existing.and_then(|e| e.card_expiry.as_ref()),
        ),
        card_cvv: keep_if_blank(
            incoming.card_cvv.as_ref(),
            existing.and_then(|e| e.card_cvv.as_ref()),
        ),
        payment_note: keep_if_blank(
            incoming.payment_note.as_ref(),
            existing.and_then(|e| e.payment_note.as_ref()),
        ),
    }
}

#[derive(Clone)]
pub struct TariffsService {
    repository: Repository,
}

impl TariffsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All nightly rates by room type
    pub async fn list(&self) -> AppResult<Vec<Tariff>> {
        self.repository.tariffs.list().await
    }

    /// Upsert the given rates
    pub async fn set(&self, tariffs: &[Tariff]) -> AppResult<Vec<Tariff>> {
        self.repository.tariffs.set(tariffs).await?;
        self.repository.tariffs.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn table() -> HashMap<String, Decimal> {
        [
            ("Standard".to_string(), Decimal::from(120)),
            ("Suite".to_string(), Decimal::from(210)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn positive_override_wins() {
        let rate = effective_nightly_rate(Decimal::from(95), Some("Standard"), &table());
        assert_eq!(rate, Decimal::from(95));
    }

    #[test]
    fn zero_override_falls_back_to_room_type() {
        let rate = effective_nightly_rate(Decimal::ZERO, Some("Standard"), &table());
        assert_eq!(rate, Decimal::from(120));
    }

    #[test]
    fn unknown_room_type_resolves_to_zero() {
        assert_eq!(
            effective_nightly_rate(Decimal::ZERO, Some("Penthouse"), &table()),
            Decimal::ZERO
        );
        assert_eq!(
            effective_nightly_rate(Decimal::ZERO, None, &table()),
            Decimal::ZERO
        );
    }

    #[test]
    fn total_is_rate_times_nights() {
        assert_eq!(total(Decimal::from(120), 3), Decimal::from(360));
    }

    fn stored() -> ReservationDetails {
        ReservationDetails {
            reservation_id: 7,
            passport: Some("X123".to_string()),
            room_type: Some("Standard".to_string()),
            tariff: Decimal::from(80),
            card_holder: Some("Ana Ruiz".to_string()),
            card_number: Some("4111111111111111".to_string()),
            card_expiry: Some("12/27".to_string()),
            card_cvv: Some("123".to_string()),
            payment_note: Some("deposit paid".to_string()),
        }
    }

    #[test]
    fn blank_payment_fields_keep_stored_values() {
        let incoming = DetailsInput {
            passport: Some("Y456".to_string()),
            room_type: Some("Suite".to_string()),
            tariff: Some(Decimal::from(80)),
            card_holder: Some("  ".to_string()),
            card_number: None,
            card_expiry: Some(String::new()),
            card_cvv: None,
            payment_note: None,
        };
        let merged = merge_details(7, &incoming, Some(&stored()));
        assert_eq!(merged.passport.as_deref(), Some("Y456"));
        assert_eq!(merged.room_type.as_deref(), Some("Suite"));
        assert_eq!(merged.card_holder.as_deref(), Some("Ana Ruiz"));
        assert_eq!(merged.card_number.as_deref(), Some("4111111111111111"));
        assert_eq!(merged.card_expiry.as_deref(), Some("12/27"));
        assert_eq!(merged.card_cvv.as_deref(), Some("123"));
        assert_eq!(merged.payment_note.as_deref(), Some("deposit paid"));
    }

    #[test]
    fn supplied_payment_fields_replace_stored_values() {
        let incoming = DetailsInput {
            card_number: Some("5500000000000004".to_string()),
            ..Default::default()
        };
        let merged = merge_details(7, &incoming, Some(&stored()));
        assert_eq!(merged.card_number.as_deref(), Some("5500000000000004"));
        assert_eq!(merged.card_holder.as_deref(), Some("Ana Ruiz"));
    }

    #[test]
    fn zero_tariff_keeps_stored_override() {
        let incoming = DetailsInput {
            tariff: Some(Decimal::ZERO),
            ..Default::default()
        };
        let merged = merge_details(7, &incoming, Some(&stored()));
        assert_eq!(merged.tariff, Decimal::from(80));
    }

    #[test]
    fn nonzero_tariff_replaces_stored_override() {
        let incoming = DetailsInput {
            tariff: Some(Decimal::from(99)),
            ..Default::default()
        };
        let merged = merge_details(7, &incoming, Some(&stored()));
        assert_eq!(merged.tariff, Decimal::from(99));
    }

    #[test]
    fn merge_without_stored_record_takes_incoming_as_is() {
        let incoming = DetailsInput {
            tariff: Some(Decimal::ZERO),
            card_holder: Some("".to_string()),
            ..Default::default()
        };
        let merged = merge_details(9, &incoming, None);
        assert_eq!(merged.reservation_id, 9);
        assert_eq!(merged.tariff, Decimal::ZERO);
        assert!(merged.card_holder.is_none());
    }
}
