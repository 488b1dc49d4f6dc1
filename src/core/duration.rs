use chrono::TimeDelta;

use crate::core::TimelineEvent;

/// Formats a duration as `<H>h <MM>m`.
///
/// Hours never roll over into days and leftover seconds are truncated, so
/// `30h 05m` is a valid output.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let total_minutes = duration.num_minutes();
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.unsigned_abs();
    format!("{sign}{}h {:02}m", total_minutes / 60, total_minutes % 60)
}

#[must_use]
pub fn total_duration(events: &[TimelineEvent]) -> TimeDelta {
    events
        .iter()
        .fold(TimeDelta::zero(), |acc, event| acc + event.duration())
}

#[must_use]
pub fn total_duration_label(events: &[TimelineEvent]) -> String {
    format_duration(total_duration(events))
}

#[cfg(test)]
mod tests {
    use super::{format_duration, total_duration_label};
    use chrono::TimeDelta;

    #[test]
    fn formats_hours_and_padded_minutes() {
        assert_eq!(format_duration(TimeDelta::hours(6)), "6h 00m");
        assert_eq!(format_duration(TimeDelta::minutes(45)), "0h 45m");
        assert_eq!(format_duration(TimeDelta::minutes(8 * 60 + 5)), "8h 05m");
    }

    #[test]
    fn does_not_roll_hours_into_days() {
        assert_eq!(format_duration(TimeDelta::hours(49)), "49h 00m");
    }

    #[test]
    fn truncates_seconds() {
        assert_eq!(format_duration(TimeDelta::seconds(59)), "0h 00m");
        assert_eq!(format_duration(TimeDelta::seconds(61 * 60 + 59)), "1h 01m");
    }

    #[test]
    fn empty_total_is_zero() {
        assert_eq!(total_duration_label(&[]), "0h 00m");
    }
}
