use chrono::{DateTime, Utc};

use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
use crate::core::{PlotArea, TimeDomain};
use crate::error::{ChartError, ChartResult};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;

const TICK_STEPS_SECONDS: [f64; 11] = [
    15.0 * MINUTE,
    30.0 * MINUTE,
    HOUR,
    2.0 * HOUR,
    3.0 * HOUR,
    6.0 * HOUR,
    12.0 * HOUR,
    DAY,
    2.0 * DAY,
    7.0 * DAY,
    30.0 * DAY,
];

#[derive(Debug, Clone, PartialEq)]
pub struct TimeTick {
    pub time: DateTime<Utc>,
    pub x: f64,
    pub label: String,
}

/// Picks the smallest step whose ticks stay `min_spacing_px` apart.
#[must_use]
pub fn select_tick_step_seconds(domain: TimeDomain, plot_width: f64, min_spacing_px: f64) -> f64 {
    let span_seconds = domain.span().num_milliseconds() as f64 / 1_000.0;
    TICK_STEPS_SECONDS
        .into_iter()
        .find(|step| step / span_seconds * plot_width >= min_spacing_px)
        .unwrap_or(TICK_STEPS_SECONDS[TICK_STEPS_SECONDS.len() - 1])
}

/// Step-aligned (UTC) ticks inside the domain with their pixel positions.
pub fn time_axis_ticks(
    domain: TimeDomain,
    plot: PlotArea,
    min_spacing_px: f64,
) -> ChartResult<Vec<TimeTick>> {
    if !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "tick spacing must be finite and > 0".to_owned(),
        ));
    }

    let step = select_tick_step_seconds(domain, plot.width, min_spacing_px);
    let start = datetime_to_unix_seconds(domain.start());
    let end = datetime_to_unix_seconds(domain.end());
    let pattern = if step < DAY { "%H:%M" } else { "%b %-d" };

    let mut ticks = Vec::new();
    let mut value = (start / step).ceil() * step;
    while value <= end {
        let time = unix_seconds_to_datetime(value)?;
        ticks.push(TimeTick {
            time,
            x: domain.pixel_x(time, plot.left, plot.width)?,
            label: time.format(pattern).to_string(),
        });
        value += step;
    }
    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::{select_tick_step_seconds, time_axis_ticks};
    use crate::core::{PlotArea, TimeDomain};
    use chrono::{TimeZone, Utc};

    fn opening_hours() -> TimeDomain {
        TimeDomain::new(
            Utc.with_ymd_and_hms(2022, 6, 13, 5, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2022, 6, 13, 22, 0, 0).unwrap(),
        )
        .expect("domain")
    }

    #[test]
    fn step_grows_as_plot_narrows() {
        let wide = select_tick_step_seconds(opening_hours(), 1700.0, 60.0);
        let narrow = select_tick_step_seconds(opening_hours(), 340.0, 60.0);
        assert_eq!(wide, 3_600.0);
        assert!(narrow > wide);
    }

    #[test]
    fn ticks_are_hour_aligned_with_clock_labels() {
        let plot = PlotArea::new(0.0, 0.0, 1700.0, 100.0).expect("plot");
        let ticks = time_axis_ticks(opening_hours(), plot, 60.0).expect("ticks");
        assert_eq!(ticks.len(), 18);
        assert_eq!(ticks[0].label, "05:00");
        assert_eq!(ticks[0].x, 0.0);
        assert_eq!(ticks[17].label, "22:00");
        assert!((ticks[1].x - 100.0).abs() <= 1e-6);
    }
}
