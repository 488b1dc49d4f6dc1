use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, TimelineEvent};
use crate::core::primitives::{
    checked_unix_seconds_to_datetime, datetime_to_unix_seconds, unix_seconds_to_datetime,
};
use crate::error::{ChartError, ChartResult};

/// Visible time-axis window.
///
/// `start < end` holds for every constructed value, including deserialized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeDomain")]
pub struct TimeDomain {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawTimeDomain {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawTimeDomain> for TimeDomain {
    type Error = ChartError;

    fn try_from(raw: RawTimeDomain) -> ChartResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeDomain {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> ChartResult<Self> {
        if start >= end {
            return Err(ChartError::InvalidTimeDomain { start, end });
        }
        Ok(Self { start, end })
    }

    /// Tightest domain covering every event, as used by axis-less overviews.
    pub fn fit_events(events: &[TimelineEvent]) -> ChartResult<Self> {
        let start = events.iter().map(TimelineEvent::start).min();
        let end = events.iter().map(TimelineEvent::end).max();
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(ChartError::InvalidData(
                "time domain cannot be fitted to empty events".to_owned(),
            )),
        }
    }

    #[must_use]
    pub fn start(self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn span(self) -> TimeDelta {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, time: DateTime<Utc>) -> bool {
        self.start <= time && time <= self.end
    }

    fn scale(self) -> ChartResult<LinearScale> {
        LinearScale::new(
            datetime_to_unix_seconds(self.start),
            datetime_to_unix_seconds(self.end),
        )
    }

    /// `plot_origin + (t - start) / (end - start) * plot_width`.
    pub fn pixel_x(self, time: DateTime<Utc>, plot_origin: f64, plot_width: f64) -> ChartResult<f64> {
        validate_plot_width(plot_width)?;
        self.scale()?
            .domain_to_pixel(datetime_to_unix_seconds(time), plot_origin, plot_width)
    }

    /// Inverse of [`TimeDomain::pixel_x`]. Pixels outside the plot extrapolate.
    pub fn time_at(self, pixel_x: f64, plot_origin: f64, plot_width: f64) -> ChartResult<DateTime<Utc>> {
        validate_plot_width(plot_width)?;
        let seconds = self
            .scale()?
            .pixel_to_domain(pixel_x, plot_origin, plot_width)?;
        unix_seconds_to_datetime(seconds)
    }

    /// Like [`TimeDomain::time_at`], but a finite pixel whose timestamp falls
    /// outside chrono's range yields `Ok(None)` instead of an error.
    pub fn checked_time_at(
        self,
        pixel_x: f64,
        plot_origin: f64,
        plot_width: f64,
    ) -> ChartResult<Option<DateTime<Utc>>> {
        validate_plot_width(plot_width)?;
        let seconds = self
            .scale()?
            .pixel_to_domain(pixel_x, plot_origin, plot_width)?;
        Ok(checked_unix_seconds_to_datetime(seconds))
    }
}

fn validate_plot_width(plot_width: f64) -> ChartResult<()> {
    if !plot_width.is_finite() || plot_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "plot width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
