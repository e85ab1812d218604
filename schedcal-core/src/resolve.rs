//! Resolution of date/time strings into timezone-aware instants.
//!
//! Input formats are fixed: dates are `YYYY-MM-DD`, clock times are `HH:MM`.
//! The attached timezone always comes from configuration, never from the
//! input, so two resolved instants can be compared without ambiguity.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{SchedCalError, SchedCalResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Resolve a `(date, time)` string pair into an absolute instant in `tz`.
pub fn resolve(date_str: &str, time_str: &str, tz: Tz) -> SchedCalResult<DateTime<Tz>> {
    let date = NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT).map_err(|_| {
        SchedCalError::MalformedTimestamp {
            field: "date",
            value: date_str.to_string(),
            expected: "YYYY-MM-DD".to_string(),
        }
    })?;

    let time = NaiveTime::parse_from_str(time_str.trim(), TIME_FORMAT).map_err(|_| {
        SchedCalError::MalformedTimestamp {
            field: "time",
            value: time_str.to_string(),
            expected: "HH:MM".to_string(),
        }
    })?;

    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(instant) => Ok(instant),
        // Fall-back hour: both instants are valid, take the earlier one
        LocalResult::Ambiguous(earlier, _) => Ok(earlier),
        // DST gap: this wall-clock time never happens in `tz`
        LocalResult::None => Err(SchedCalError::MalformedTimestamp {
            field: "time",
            value: format!("{} {}", date_str.trim(), time_str.trim()),
            expected: format!("a wall-clock time that exists in {}", tz.name()),
        }),
    }
}

/// Enforce that `end` comes strictly after `start`. Equal instants are a
/// violation, not a degenerate success.
pub fn validate_order(start: &DateTime<Tz>, end: &DateTime<Tz>) -> SchedCalResult<()> {
    if end > start {
        Ok(())
    } else {
        Err(SchedCalError::OrderViolation {
            start: start.format("%Y-%m-%d %H:%M").to_string(),
            end: end.format("%Y-%m-%d %H:%M").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;
    use chrono_tz::Europe::Stockholm;
    use chrono_tz::UTC;

    // --- resolve ---

    #[test]
    fn resolve_valid_pair() {
        let instant = resolve("2025-03-10", "09:00", Stockholm).unwrap();
        assert_eq!(
            instant,
            Stockholm.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn resolve_attaches_configured_zone() {
        let stockholm = resolve("2025-03-10", "09:00", Stockholm).unwrap();
        let utc = resolve("2025-03-10", "09:00", UTC).unwrap();
        // Same wall clock, different zones: different instants
        assert_ne!(stockholm, utc);
        assert_eq!(stockholm, UTC.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap());
    }

    #[test]
    fn resolve_trims_surrounding_whitespace() {
        let instant = resolve(" 2025-03-10 ", " 09:00", UTC).unwrap();
        assert_eq!(instant, UTC.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap());
    }

    #[test]
    fn resolve_rejects_malformed_date() {
        let err = resolve("2025/03/10", "09:00", UTC).unwrap_err();
        match err {
            SchedCalError::MalformedTimestamp { field, value, .. } => {
                assert_eq!(field, "date");
                assert_eq!(value, "2025/03/10");
            }
            other => panic!("Expected MalformedTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn resolve_rejects_malformed_time() {
        let err = resolve("2025-03-10", "25:00", UTC).unwrap_err();
        match err {
            SchedCalError::MalformedTimestamp { field, .. } => assert_eq!(field, "time"),
            other => panic!("Expected MalformedTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn resolve_rejects_time_with_seconds() {
        assert!(resolve("2025-03-10", "09:00:00", UTC).is_err());
    }

    #[test]
    fn resolve_rejects_dst_gap() {
        // US DST starts 2025-03-09 at 02:00; 02:30 never happens
        let err = resolve("2025-03-09", "02:30", New_York).unwrap_err();
        assert!(matches!(err, SchedCalError::MalformedTimestamp { .. }));
    }

    #[test]
    fn resolve_ambiguous_takes_earlier_instant() {
        // US DST ends 2025-11-02 at 02:00; 01:30 happens twice
        let instant = resolve("2025-11-02", "01:30", New_York).unwrap();
        let expected = New_York
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2025, 11, 2)
                    .unwrap()
                    .and_hms_opt(1, 30, 0)
                    .unwrap(),
            )
            .earliest()
            .unwrap();
        assert_eq!(instant, expected);
    }

    // --- validate_order ---

    #[test]
    fn order_accepts_end_after_start() {
        let start = resolve("2025-03-10", "09:00", UTC).unwrap();
        let end = resolve("2025-03-10", "10:30", UTC).unwrap();
        assert!(validate_order(&start, &end).is_ok());
    }

    #[test]
    fn order_rejects_equal_instants() {
        let start = resolve("2025-03-10", "09:00", UTC).unwrap();
        let end = resolve("2025-03-10", "09:00", UTC).unwrap();
        assert!(matches!(
            validate_order(&start, &end),
            Err(SchedCalError::OrderViolation { .. })
        ));
    }

    #[test]
    fn order_rejects_end_before_start() {
        let start = resolve("2025-03-10", "10:00", UTC).unwrap();
        let end = resolve("2025-03-10", "09:00", UTC).unwrap();
        assert!(matches!(
            validate_order(&start, &end),
            Err(SchedCalError::OrderViolation { .. })
        ));
    }

    #[test]
    fn order_compares_instants_not_wall_clocks() {
        // 10:00 Stockholm is 09:00 UTC; as instants these are equal
        let start = resolve("2025-01-10", "10:00", Stockholm).unwrap();
        let end = resolve("2025-01-10", "09:00", UTC).unwrap();
        assert!(matches!(
            validate_order(&start, &end),
            Err(SchedCalError::OrderViolation { .. })
        ));
    }
}
