//! Calendar conversions
//!
//! Effects are evaluated on a continuous month axis so that a lag of
//! `18` means eighteen calendar months regardless of month length.

use chrono::{Datelike, NaiveDate};

/// Fractional month index of a date.
///
/// `year * 12 + (month - 1) + (day - 1) / days_in_month`, so the first of
/// every month lands on a whole number.
pub fn month_index(date: NaiveDate) -> f64 {
    let whole = date.year() as f64 * 12.0 + date.month0() as f64;
    whole + date.day0() as f64 / days_in_month(date) as f64
}

/// Decimal year of a date on the same axis as [`month_index`]
pub fn decimal_year(date: NaiveDate) -> f64 {
    month_index(date) / 12.0
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_of_month_is_whole() {
        assert_eq!(month_index(date(2020, 1, 1)), 24240.0);
        assert_eq!(month_index(date(2021, 6, 1)), 24257.0);
        assert_eq!(month_index(date(2022, 1, 1)), 24264.0);
    }

    #[test]
    fn test_mid_month_fraction() {
        let idx = month_index(date(2023, 4, 16));
        assert!((idx - (2023.0 * 12.0 + 3.0 + 15.0 / 30.0)).abs() < 1e-12);
    }

    #[test]
    fn test_decimal_year() {
        assert_eq!(decimal_year(date(2025, 1, 1)), 2025.0);
        assert!((decimal_year(date(2025, 7, 1)) - 2025.5).abs() < 1e-12);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 12, 31)), 31);
        assert_eq!(days_in_month(date(2024, 4, 1)), 30);
    }

    #[test]
    fn test_month_index_is_monotonic_across_year_end() {
        assert!(month_index(date(2024, 12, 31)) < month_index(date(2025, 1, 1)));
    }
}
