use serde::{Deserialize, Serialize};

use crate::core::{LaneLayout, PlotArea, TimeDomain, TimelineEvent};
use crate::error::{ChartError, ChartResult};

/// Pixel geometry of one event bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventBarGeometry {
    pub event_index: usize,
    pub lane: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Part of the interval lies outside the visible domain.
    pub clipped: bool,
}

/// Projects events into lane bars clipped to the plot area.
///
/// Events entirely outside the domain produce no geometry but are never
/// rejected. Bars narrower than `min_bar_width_px` are widened so zero-length
/// events stay visible.
pub fn project_event_bars(
    events: &[TimelineEvent],
    domain: TimeDomain,
    lanes: &LaneLayout,
    plot: PlotArea,
    lane_fill_ratio: f64,
    min_bar_width_px: f64,
) -> ChartResult<Vec<EventBarGeometry>> {
    if !lane_fill_ratio.is_finite() || lane_fill_ratio <= 0.0 || lane_fill_ratio > 1.0 {
        return Err(ChartError::InvalidData(
            "lane fill ratio must be in (0, 1]".to_owned(),
        ));
    }
    if lanes.is_empty() {
        return Ok(Vec::new());
    }

    let band = plot.height / lanes.len() as f64;
    let bar_height = band * lane_fill_ratio;
    let min_width = min_bar_width_px.max(0.0).min(plot.width);

    let mut projected = Vec::with_capacity(events.len());
    for (event_index, event) in events.iter().enumerate() {
        let lane = lanes.lane_of(event.category()).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "event category `{}` has no lane",
                event.category()
            ))
        })?;

        let raw_x1 = domain.pixel_x(event.start(), plot.left, plot.width)?;
        let raw_x2 = domain.pixel_x(event.end(), plot.left, plot.width)?;
        if raw_x2 < plot.left || raw_x1 > plot.right() {
            continue;
        }

        let mut x = raw_x1.max(plot.left);
        let x2 = raw_x2.min(plot.right());
        let mut width = x2 - x;
        if width < min_width {
            width = min_width;
            x = x.min(plot.right() - width);
        }

        projected.push(EventBarGeometry {
            event_index,
            lane,
            x,
            y: plot.top + band * lane as f64 + (band - bar_height) / 2.0,
            width,
            height: bar_height,
            clipped: raw_x1 < plot.left || raw_x2 > plot.right(),
        });
    }

    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::project_event_bars;
    use crate::core::{LaneLayout, PlotArea, TimeDomain, TimelineEvent};
    use chrono::{TimeZone, Utc};

    fn at(hour: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 6, 13, hour, 0, 0).unwrap()
    }

    #[test]
    fn out_of_domain_events_are_skipped_and_partial_ones_clipped() {
        let domain = TimeDomain::new(at(10), at(20)).expect("domain");
        let plot = PlotArea::new(0.0, 0.0, 1000.0, 100.0).expect("plot");
        let events = vec![
            TimelineEvent::new("Bread", at(2), at(4)).expect("event"),
            TimelineEvent::new("Bread", at(8), at(12)).expect("event"),
        ];
        let lanes = LaneLayout::from_events(&events, None);

        let bars = project_event_bars(&events, domain, &lanes, plot, 0.5, 1.0).expect("bars");
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].event_index, 1);
        assert!(bars[0].clipped);
        assert_eq!(bars[0].x, 0.0);
        assert!((bars[0].width - 200.0).abs() <= 1e-6);
        assert!((bars[0].y - 25.0).abs() <= 1e-9);
        assert!((bars[0].height - 50.0).abs() <= 1e-9);
    }

    #[test]
    fn zero_length_event_gets_minimum_width() {
        let domain = TimeDomain::new(at(10), at(20)).expect("domain");
        let plot = PlotArea::new(10.0, 0.0, 1000.0, 100.0).expect("plot");
        let events = vec![TimelineEvent::new("Counter", at(20), at(20)).expect("event")];
        let lanes = LaneLayout::from_events(&events, None);

        let bars = project_event_bars(&events, domain, &lanes, plot, 1.0, 1.0).expect("bars");
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].width, 1.0);
        assert!((bars[0].x - 1009.0).abs() <= 1e-6);
    }
}
