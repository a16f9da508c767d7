//! Unit tests for the Temporal module
//!
//! Tests cover strict date parsing, the supported year window,
//! and CoveragePeriod containment.

use chrono::{Days, NaiveDate};
use core_kernel::temporal::{CoveragePeriod, SupportedYears, TemporalError, parse_iso_date};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn test_parses_canonical_form() {
        assert_eq!(parse_iso_date("2025-01-01").unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn test_parses_leap_day() {
        assert_eq!(parse_iso_date("2024-02-29").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_rejects_non_leap_feb_29() {
        assert!(parse_iso_date("2023-02-29").is_err());
    }

    #[test]
    fn test_rejects_unpadded_fields() {
        assert!(parse_iso_date("2024-1-1").is_err());
        assert!(parse_iso_date("2024-01-1").is_err());
    }

    #[test]
    fn test_rejects_other_separators() {
        assert!(parse_iso_date("2024/01/01").is_err());
        assert!(parse_iso_date("2024.01.01").is_err());
    }

    #[test]
    fn test_rejects_compact_form() {
        assert!(parse_iso_date("20240101").is_err());
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(parse_iso_date(" 2024-01-01").is_err());
        assert!(parse_iso_date("2024-01-01 ").is_err());
    }

    #[test]
    fn test_rejects_datetime() {
        assert!(parse_iso_date("2024-01-01T00:00:00").is_err());
    }

    #[test]
    fn test_rejects_month_13() {
        assert!(parse_iso_date("2024-13-01").is_err());
    }

    #[test]
    fn test_error_echoes_input() {
        let err = parse_iso_date("not-a-date").unwrap_err();
        assert_eq!(
            err,
            TemporalError::InvalidFormat { input: "not-a-date".to_string() }
        );
        assert_eq!(err.to_string(), "Invalid date format, expected YYYY-MM-DD: not-a-date");
    }
}

mod supported_years {
    use super::*;

    #[test]
    fn test_default_window() {
        let years = SupportedYears::default();
        assert_eq!(years.min(), 1900);
        assert_eq!(years.max(), 2100);
    }

    #[test]
    fn test_check_passes_inside_window() {
        let years = SupportedYears::default();
        assert_eq!(years.check(date(2024, 6, 1)).unwrap(), date(2024, 6, 1));
    }

    #[test]
    fn test_check_fails_below_window() {
        let years = SupportedYears::default();
        let err = years.check(date(1899, 12, 31)).unwrap_err();
        assert!(matches!(err, TemporalError::YearOutOfRange { min: 1900, max: 2100, .. }));
    }

    #[test]
    fn test_check_fails_above_window() {
        let years = SupportedYears::default();
        assert!(years.check(date(2101, 1, 1)).is_err());
    }

    #[test]
    fn test_custom_window() {
        let years = SupportedYears::new(2000, 2030).unwrap();
        assert!(years.contains(date(2030, 12, 31)));
        assert!(!years.contains(date(1999, 12, 31)));
    }

    #[test]
    fn test_single_year_window() {
        let years = SupportedYears::new(2024, 2024).unwrap();
        assert!(years.contains(date(2024, 7, 4)));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = SupportedYears::new(2100, 1900).unwrap_err();
        assert_eq!(err, TemporalError::InvalidYearRange { min: 2100, max: 1900 });
    }
}

mod coverage_period {
    use super::*;

    #[test]
    fn test_bounded_contains_both_ends() {
        let period = CoveragePeriod::bounded(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert!(period.contains(date(2024, 1, 1)));
        assert!(period.contains(date(2024, 12, 31)));
        assert!(period.contains(date(2024, 6, 15)));
    }

    #[test]
    fn test_bounded_excludes_neighbours() {
        let period = CoveragePeriod::bounded(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert!(!period.contains(date(2023, 12, 31)));
        assert!(!period.contains(date(2025, 1, 1)));
    }

    #[test]
    fn test_open_ended_covers_far_future() {
        let period = CoveragePeriod::open_ended(date(2024, 1, 1));
        assert!(period.is_open_ended());
        assert!(period.contains(date(2099, 12, 31)));
        assert!(!period.contains(date(2023, 12, 31)));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let err = CoveragePeriod::bounded(date(2024, 12, 31), date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, TemporalError::InvertedPeriod { .. }));
    }

    #[test]
    fn test_from_parts_requires_start() {
        let err = CoveragePeriod::from_parts(None, Some(date(2024, 1, 1))).unwrap_err();
        assert_eq!(err, TemporalError::MissingStart);
    }

    #[test]
    fn test_from_parts_allows_missing_end() {
        let period = CoveragePeriod::from_parts(Some(date(2024, 1, 1)), None).unwrap();
        assert!(period.is_open_ended());
    }
}

proptest! {
    #[test]
    fn prop_period_contains_exactly_its_days(
        start_offset in 0u64..40_000,
        length in 0u64..2_000,
        day_offset in 0u64..45_000,
    ) {
        let base = date(1900, 1, 1);
        let start = base + Days::new(start_offset);
        let end = start + Days::new(length);
        let day = base + Days::new(day_offset);
        let period = CoveragePeriod::bounded(start, end).unwrap();

        prop_assert_eq!(period.contains(day), start <= day && day <= end);
        prop_assert!(!period.contains(start - Days::new(1)));
        prop_assert!(!period.contains(end + Days::new(1)));
    }
}
