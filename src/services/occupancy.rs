//! Occupancy queries, daily expansion and calendar views

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    calendar,
    error::{AppError, AppResult},
    models::report::{CalendarCell, DayRow, ReportFilters},
    models::reservation::ReservationWithRoom,
    repository::Repository,
    services::tariffs,
};

/// Expand reservations intersecting `[start, end)` into one row per day,
/// clipped to the query window. Rows come out ordered by reservation
/// check-in, then room number, then day, provided the input is ordered by
/// check-in and room number (the repository queries guarantee this).
///
/// The "day K of N" marker is positioned against the full stay, not the
/// clipped window, and the total is for the full stay.
pub fn expand_to_daily(
    reservations: &[ReservationWithRoom],
    start: NaiveDate,
    end: NaiveDate,
    filters: &ReportFilters,
    tariff_table: &HashMap<String, Decimal>,
) -> Vec<DayRow> {
    let search = filters.search.as_ref().map(|s| s.to_lowercase());

    let mut rows = Vec::new();
    for r in reservations {
        if let Some(status) = filters.status {
            if r.status != status {
                continue;
            }
        }
        if let Some(ref number) = filters.room_number {
            if &r.room_number != number {
                continue;
            }
        }
        if let Some(ref needle) = search {
            let in_guest = r.guest_name.to_lowercase().contains(needle);
            let in_notes = r
                .notes
                .as_ref()
                .map(|n| n.to_lowercase().contains(needle))
                .unwrap_or(false);
            if !in_guest && !in_notes {
                continue;
            }
        }

        let clip_start = r.check_in.max(start);
        let clip_end = r.check_out.min(end);
        if clip_start >= clip_end {
            continue;
        }

        let total_nights = calendar::nights(r.check_in, r.check_out);
        let nightly_rate =
            tariffs::effective_nightly_rate(r.tariff, r.room_type.as_deref(), tariff_table);
        let total = tariffs::total(nightly_rate, total_nights);

        let mut day = clip_start;
        while day < clip_end {
            let day_index = calendar::nights(r.check_in, day) + 1;
            rows.push(DayRow {
                day,
                reservation_id: r.id,
                room_number: r.room_number.clone(),
                guest_name: r.guest_name.clone(),
                status: r.status,
                day_index,
                total_nights,
                position: format!("Day {} of {}", day_index, total_nights),
                occupants: r.occupants,
                nightly_rate,
                total,
            });
            day += Duration::days(1);
        }
    }
    rows
}

#[derive(Clone)]
pub struct OccupancyService {
    repository: Repository,
}

impl OccupancyService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Reservations occupying rooms on `day` (non-terminal only)
    pub async fn active_on(&self, day: NaiveDate) -> AppResult<Vec<ReservationWithRoom>> {
        self.repository.reservations.active_on(day).await
    }

    /// Reservations on the books for `day`, regardless of terminal state
    pub async fn covering_on(&self, day: NaiveDate) -> AppResult<Vec<ReservationWithRoom>> {
        self.repository.reservations.covering_on(day).await
    }

    /// Reservations whose interval intersects `[start, end)`
    pub async fn in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ReservationWithRoom>> {
        if calendar::nights(start, end) <= 0 {
            return Err(AppError::Range("End must be after start".to_string()));
        }
        self.repository.reservations.in_range(start, end).await
    }

    /// Flattened per-day report over `[start, end)`
    pub async fn daily_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        filters: &ReportFilters,
    ) -> AppResult<Vec<DayRow>> {
        if calendar::nights(start, end) <= 0 {
            return Err(AppError::Range("End must be after start".to_string()));
        }
        let reservations = self.repository.reservations.in_range(start, end).await?;
        let table = self.repository.tariffs.table().await?;
        Ok(expand_to_daily(&reservations, start, end, filters, &table))
    }

    /// 6-week calendar grid with reservation dot-marks and blackout flags
    pub async fn month_view(&self, year: i32, month: u32) -> AppResult<Vec<CalendarCell>> {
        let grid = calendar::month_grid(year, month)
            .ok_or_else(|| AppError::Validation(format!("Invalid month {}-{}", year, month)))?;

        let grid_start = grid[0];
        let grid_end = grid[grid.len() - 1] + Duration::days(1);
        let reservations = self
            .repository
            .reservations
            .in_range(grid_start, grid_end)
            .await?;
        let blackouts = self.repository.blackouts.in_range(grid_start, grid_end).await?;

        let cells = grid
            .into_iter()
            .map(|date| {
                let reservation_count = reservations
                    .iter()
                    .filter(|r| r.check_in <= date && date < r.check_out)
                    .count() as i64;
                let blackout = blackouts
                    .iter()
                    .any(|b| b.start_date <= date && date < b.end_date);
                CalendarCell {
                    date,
                    in_month: date.month() == month,
                    reservation_count,
                    blackout,
                }
            })
            .collect();
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reservation::ReservationStatus;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn reservation(
        id: i32,
        room: &str,
        guest: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> ReservationWithRoom {
        ReservationWithRoom {
            id,
            room_id: id,
            room_number: room.to_string(),
            guest_name: guest.to_string(),
            status: ReservationStatus::Reserved,
            check_in,
            check_out,
            notes: None,
            occupants: 2,
            room_type: Some("Standard".to_string()),
            tariff: Decimal::ZERO,
        }
    }

    fn table() -> HashMap<String, Decimal> {
        [("Standard".to_string(), Decimal::from(120))]
            .into_iter()
            .collect()
    }

    #[test]
    fn expansion_clips_to_query_window() {
        let stays = vec![reservation(1, "101", "Ana Ruiz", d(2024, 1, 2), d(2024, 1, 5))];
        let rows = expand_to_daily(
            &stays,
            d(2024, 1, 1),
            d(2024, 1, 4),
            &ReportFilters::default(),
            &table(),
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].day, d(2024, 1, 2));
        assert_eq!(rows[0].position, "Day 1 of 3");
        assert_eq!(rows[1].day, d(2024, 1, 3));
        assert_eq!(rows[1].position, "Day 2 of 3");
        // Financials reflect the full stay
        assert_eq!(rows[0].nightly_rate, Decimal::from(120));
        assert_eq!(rows[0].total, Decimal::from(360));
    }

    #[test]
    fn expansion_skips_reservations_outside_window() {
        let stays = vec![reservation(1, "101", "Ana Ruiz", d(2024, 2, 1), d(2024, 2, 3))];
        let rows = expand_to_daily(
            &stays,
            d(2024, 1, 1),
            d(2024, 1, 31),
            &ReportFilters::default(),
            &table(),
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn expansion_order_follows_checkin_room_day() {
        // Input ordered by check-in then room number, as the repository emits
        let stays = vec![
            reservation(1, "101", "Ana Ruiz", d(2024, 1, 1), d(2024, 1, 3)),
            reservation(2, "102", "Bela Costa", d(2024, 1, 1), d(2024, 1, 3)),
            reservation(3, "101", "Carl Otto", d(2024, 1, 3), d(2024, 1, 5)),
        ];
        let rows = expand_to_daily(
            &stays,
            d(2024, 1, 1),
            d(2024, 1, 10),
            &ReportFilters::default(),
            &table(),
        );

        let order: Vec<(i32, NaiveDate)> =
            rows.iter().map(|r| (r.reservation_id, r.day)).collect();
        assert_eq!(
            order,
            vec![
                (1, d(2024, 1, 1)),
                (1, d(2024, 1, 2)),
                (2, d(2024, 1, 1)),
                (2, d(2024, 1, 2)),
                (3, d(2024, 1, 3)),
                (3, d(2024, 1, 4)),
            ]
        );
    }

    #[test]
    fn filters_restrict_rows() {
        let mut noted = reservation(2, "102", "Bela Costa", d(2024, 1, 1), d(2024, 1, 2));
        noted.notes = Some("late arrival".to_string());
        let stays = vec![
            reservation(1, "101", "Ana Ruiz", d(2024, 1, 1), d(2024, 1, 2)),
            noted,
        ];

        let by_room = expand_to_daily(
            &stays,
            d(2024, 1, 1),
            d(2024, 1, 10),
            &ReportFilters {
                room_number: Some("101".to_string()),
                ..Default::default()
            },
            &table(),
        );
        assert_eq!(by_room.len(), 1);
        assert_eq!(by_room[0].guest_name, "Ana Ruiz");

        let by_search = expand_to_daily(
            &stays,
            d(2024, 1, 1),
            d(2024, 1, 10),
            &ReportFilters {
                search: Some("LATE".to_string()),
                ..Default::default()
            },
            &table(),
        );
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].guest_name, "Bela Costa");
    }

    #[test]
    fn explicit_tariff_override_used_in_rows() {
        let mut stay = reservation(1, "101", "Ana Ruiz", d(2024, 1, 1), d(2024, 1, 4));
        stay.tariff = Decimal::from(95);
        let rows = expand_to_daily(
            &[stay],
            d(2024, 1, 1),
            d(2024, 1, 10),
            &ReportFilters::default(),
            &table(),
        );
        assert_eq!(rows[0].nightly_rate, Decimal::from(95));
        assert_eq!(rows[0].total, Decimal::from(285));
    }
}
