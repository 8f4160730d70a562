//! Temporal feature derivation from raw flight timestamps
//!
//! Computes the period of day, high-season membership, and the signed
//! minute difference between scheduled and actual departure.

use crate::error::ModelError;
use crate::models::RawFlightRecord;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Timestamp format used throughout the raw dataset
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// High-season calendar windows as inclusive (month, day) ranges,
/// evaluated against the timestamp's own year
const HIGH_SEASON_WINDOWS: [((u32, u32), (u32, u32)); 4] = [
    ((12, 15), (12, 31)),
    ((1, 1), (3, 3)),
    ((7, 15), (7, 31)),
    ((9, 11), (9, 30)),
];

/// Part of day a departure falls into, with inclusive boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOfDay {
    /// 05:00-11:59
    Morning,
    /// 12:00-18:59
    Afternoon,
    /// 19:00-23:59 and 00:00-04:59
    Night,
}

/// Parse a raw timestamp string in the dataset's fixed format
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ModelError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
        ModelError::InvalidTimestamp {
            value: value.to_string(),
            expected: TIMESTAMP_FORMAT,
        }
    })
}

/// Bucket a departure time into morning/afternoon/night.
/// Total over the whole day: every time maps to exactly one bucket.
pub fn period_of_day(ts: NaiveDateTime) -> PeriodOfDay {
    match ts.hour() {
        5..=11 => PeriodOfDay::Morning,
        12..=18 => PeriodOfDay::Afternoon,
        _ => PeriodOfDay::Night,
    }
}

/// True iff the calendar date falls within one of the high-season windows
pub fn is_high_season(ts: NaiveDateTime) -> bool {
    let date = (ts.month(), ts.day());
    HIGH_SEASON_WINDOWS
        .iter()
        .any(|&(start, end)| start <= date && date <= end)
}

/// Signed difference (actual - scheduled) in minutes; negative when the
/// flight left early, no clamping
pub fn minute_difference(scheduled: NaiveDateTime, actual: NaiveDateTime) -> f64 {
    (actual - scheduled).num_seconds() as f64 / 60.0
}

/// Temporal features derived from one raw record
#[derive(Debug, Clone, Copy)]
pub struct TemporalFeatures {
    pub period_of_day: PeriodOfDay,
    pub high_season: bool,
    pub minute_difference: f64,
}

impl TemporalFeatures {
    pub fn derive(record: &RawFlightRecord) -> Result<Self, ModelError> {
        let scheduled = parse_timestamp(&record.scheduled_departure)?;
        let actual = parse_timestamp(&record.actual_departure)?;
        Ok(Self {
            period_of_day: period_of_day(scheduled),
            high_season: is_high_season(scheduled),
            minute_difference: minute_difference(scheduled, actual),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> NaiveDateTime {
        parse_timestamp(value).unwrap()
    }

    #[test]
    fn test_parse_timestamp_rejects_malformed_input() {
        for bad in ["", "2017-07-15", "15/07/2017 10:00:00", "2017-07-15T10:00:00"] {
            let err = parse_timestamp(bad).unwrap_err();
            assert!(matches!(err, ModelError::InvalidTimestamp { .. }), "{}", bad);
        }
    }

    #[test]
    fn test_period_of_day_boundaries() {
        assert_eq!(period_of_day(ts("2017-01-01 05:00:00")), PeriodOfDay::Morning);
        assert_eq!(period_of_day(ts("2017-01-01 11:59:00")), PeriodOfDay::Morning);
        assert_eq!(period_of_day(ts("2017-01-01 12:00:00")), PeriodOfDay::Afternoon);
        assert_eq!(period_of_day(ts("2017-01-01 18:59:00")), PeriodOfDay::Afternoon);
        assert_eq!(period_of_day(ts("2017-01-01 19:00:00")), PeriodOfDay::Night);
        assert_eq!(period_of_day(ts("2017-01-01 23:59:00")), PeriodOfDay::Night);
        assert_eq!(period_of_day(ts("2017-01-01 00:00:00")), PeriodOfDay::Night);
        assert_eq!(period_of_day(ts("2017-01-01 04:59:00")), PeriodOfDay::Night);
    }

    #[test]
    fn test_period_of_day_is_total_over_the_day() {
        for hour in 0..24 {
            for minute in [0, 30, 59] {
                let value = format!("2017-06-10 {:02}:{:02}:00", hour, minute);
                // just must not panic and must map to one bucket
                let _ = period_of_day(ts(&value));
            }
        }
    }

    #[test]
    fn test_high_season_december_boundary() {
        assert!(is_high_season(ts("2017-12-15 00:00:00")));
        assert!(!is_high_season(ts("2017-12-14 23:59:00")));
        assert!(is_high_season(ts("2017-12-31 23:59:00")));
    }

    #[test]
    fn test_high_season_march_boundary() {
        assert!(is_high_season(ts("2017-03-03 23:59:00")));
        assert!(!is_high_season(ts("2017-03-04 00:00:00")));
        assert!(is_high_season(ts("2017-01-01 00:00:00")));
        assert!(is_high_season(ts("2017-02-14 12:00:00")));
    }

    #[test]
    fn test_high_season_july_and_september_windows() {
        assert!(!is_high_season(ts("2017-07-14 23:59:00")));
        assert!(is_high_season(ts("2017-07-15 00:00:00")));
        assert!(is_high_season(ts("2017-07-31 23:59:00")));
        assert!(!is_high_season(ts("2017-08-01 00:00:00")));
        assert!(!is_high_season(ts("2017-09-10 23:59:00")));
        assert!(is_high_season(ts("2017-09-11 00:00:00")));
        assert!(is_high_season(ts("2017-09-30 23:59:00")));
        assert!(!is_high_season(ts("2017-10-01 00:00:00")));
    }

    #[test]
    fn test_minute_difference_signed() {
        let scheduled = ts("2017-07-15 10:00:00");
        assert_eq!(minute_difference(scheduled, ts("2017-07-15 10:45:00")), 45.0);
        assert_eq!(minute_difference(scheduled, ts("2017-07-15 09:30:00")), -30.0);
        assert_eq!(minute_difference(scheduled, ts("2017-07-15 10:00:30")), 0.5);
    }

    #[test]
    fn test_derive_bundles_all_features() {
        let record = RawFlightRecord {
            operator: "Grupo LATAM".to_string(),
            flight_type: crate::models::FlightType::International,
            month: 12,
            scheduled_departure: "2017-12-20 21:30:00".to_string(),
            actual_departure: "2017-12-20 21:50:00".to_string(),
        };
        let features = TemporalFeatures::derive(&record).unwrap();
        assert_eq!(features.period_of_day, PeriodOfDay::Night);
        assert!(features.high_season);
        assert_eq!(features.minute_difference, 20.0);
    }
}
