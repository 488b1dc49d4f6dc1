use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{TimelineEvent, format_duration};

/// Text shown in the selection callout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    pub clock_in: String,
    pub clock_out: String,
    pub duration: String,
}

impl EventDetail {
    #[must_use]
    pub fn for_event(event: &TimelineEvent) -> Self {
        Self {
            clock_in: format!("Clocked in {}", format_clock_time(event.start())),
            clock_out: format!("Clocked out {}", format_clock_time(event.end())),
            duration: format!("Duration: {}", format_duration(event.duration())),
        }
    }
}

/// Abbreviated date with a short time, e.g. `Jun 13, 2022, 8:00 AM`.
#[must_use]
pub fn format_clock_time(time: DateTime<Utc>) -> String {
    time.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Short time only, e.g. `8:00 AM`.
#[must_use]
pub fn format_short_time(time: DateTime<Utc>) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Section heading derived from the first event, e.g. `Monday Jun 13, 2022`.
#[must_use]
pub fn section_title(events: &[TimelineEvent]) -> Option<String> {
    events
        .first()
        .map(|event| event.start().format("%A %b %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::{EventDetail, section_title};
    use crate::core::TimelineEvent;
    use chrono::{TimeZone, Utc};

    #[test]
    fn detail_lines_carry_times_and_duration() {
        let event = TimelineEvent::new(
            "Butchery",
            Utc.with_ymd_and_hms(2022, 6, 13, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2022, 6, 13, 17, 30, 0).unwrap(),
        )
        .expect("event");
        let detail = EventDetail::for_event(&event);
        assert_eq!(detail.clock_in, "Clocked in Jun 13, 2022, 9:00 AM");
        assert_eq!(detail.clock_out, "Clocked out Jun 13, 2022, 5:30 PM");
        assert_eq!(detail.duration, "Duration: 8h 30m");
    }

    #[test]
    fn section_title_uses_first_event_day() {
        let event = TimelineEvent::new(
            "Bread",
            Utc.with_ymd_and_hms(2022, 6, 13, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2022, 6, 13, 14, 0, 0).unwrap(),
        )
        .expect("event");
        assert_eq!(
            section_title(&[event]).as_deref(),
            Some("Monday Jun 13, 2022")
        );
        assert_eq!(section_title(&[]), None);
    }
}
