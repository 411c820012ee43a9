//! Calendar interval engine
//!
//! Pure date arithmetic shared by the availability checks, the occupancy
//! queries and the calendar views. All stay ranges are half-open:
//! `[check_in, check_out)` — the check-out day is not occupied.

use chrono::{Datelike, Duration, NaiveDate};

/// Number of cells in a 6-week calendar display grid
pub const MONTH_GRID_DAYS: usize = 42;

/// True iff the half-open intervals `[a_start, a_end)` and `[b_start, b_end)`
/// share at least one day. Touching intervals (`a_end == b_start`) do not
/// overlap: a guest may check in the day another checks out.
pub fn overlaps(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Signed night count of a stay. Zero or negative for invalid input;
/// callers must reject non-positive results before persisting.
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// 6-week display grid for a month: 42 consecutive dates starting on the
/// Monday on or before the 1st. Returns `None` for an invalid year/month.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = first.weekday().num_days_from_monday() as i64;
    let grid_start = first - Duration::days(offset);

    Some(
        (0..MONTH_GRID_DAYS as i64)
            .map(|i| grid_start + Duration::days(i))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (d(2024, 1, 1), d(2024, 1, 5), d(2024, 1, 3), d(2024, 1, 8)),
            (d(2024, 1, 1), d(2024, 1, 5), d(2024, 1, 5), d(2024, 1, 8)),
            (d(2024, 3, 1), d(2024, 3, 2), d(2024, 2, 1), d(2024, 4, 1)),
        ];
        for (a1, a2, b1, b2) in cases {
            assert_eq!(overlaps(a1, a2, b1, b2), overlaps(b1, b2, a1, a2));
        }
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        assert!(!overlaps(
            d(2024, 1, 1),
            d(2024, 1, 5),
            d(2024, 1, 5),
            d(2024, 1, 9)
        ));
        assert!(!overlaps(
            d(2024, 1, 5),
            d(2024, 1, 9),
            d(2024, 1, 1),
            d(2024, 1, 5)
        ));
    }

    #[test]
    fn one_day_overlap_detected() {
        assert!(overlaps(
            d(2024, 6, 10),
            d(2024, 6, 13),
            d(2024, 6, 12),
            d(2024, 6, 14)
        ));
    }

    #[test]
    fn contained_interval_overlaps() {
        assert!(overlaps(
            d(2024, 1, 1),
            d(2024, 1, 31),
            d(2024, 1, 10),
            d(2024, 1, 12)
        ));
    }

    #[test]
    fn nights_counts_days() {
        assert_eq!(nights(d(2024, 6, 10), d(2024, 6, 13)), 3);
        assert_eq!(nights(d(2024, 6, 10), d(2024, 6, 10)), 0);
        assert_eq!(nights(d(2024, 6, 13), d(2024, 6, 10)), -3);
        // Across a month boundary
        assert_eq!(nights(d(2024, 1, 30), d(2024, 2, 2)), 3);
    }

    #[test]
    fn month_grid_starts_monday_on_or_before_first() {
        // July 2024 starts on a Monday: grid begins on the 1st
        let grid = month_grid(2024, 7).unwrap();
        assert_eq!(grid.len(), MONTH_GRID_DAYS);
        assert_eq!(grid[0], d(2024, 7, 1));
        assert_eq!(grid[41], d(2024, 8, 11));

        // June 2024 starts on a Saturday: grid begins the previous Monday
        let grid = month_grid(2024, 6).unwrap();
        assert_eq!(grid[0], d(2024, 5, 27));
        assert_eq!(grid[5], d(2024, 6, 1));
    }

    #[test]
    fn month_grid_rejects_invalid_month() {
        assert!(month_grid(2024, 13).is_none());
        assert!(month_grid(2024, 0).is_none());
    }
}
