use chrono::{DateTime, Utc};

use crate::error::{ChartError, ChartResult};

const MICROS_PER_SECOND: f64 = 1_000_000.0;

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_micros() as f64 / MICROS_PER_SECOND
}

/// Converts fractional unix seconds back to a timestamp, rounded to the microsecond.
pub fn unix_seconds_to_datetime(seconds: f64) -> ChartResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(ChartError::InvalidData(
            "timestamp seconds must be finite".to_owned(),
        ));
    }
    checked_unix_seconds_to_datetime(seconds).ok_or_else(|| {
        ChartError::InvalidData("timestamp is outside the representable range".to_owned())
    })
}

/// `None` when `seconds` is not finite or falls outside chrono's range.
#[must_use]
pub fn checked_unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let micros = (seconds * MICROS_PER_SECOND).round();
    if micros >= i64::MAX as f64 || micros <= i64::MIN as f64 {
        return None;
    }
    DateTime::from_timestamp_micros(micros as i64)
}
