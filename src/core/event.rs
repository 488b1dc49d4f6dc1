use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// A named time interval drawn as one bar in its category lane.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimelineEvent")]
pub struct TimelineEvent {
    category: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawTimelineEvent {
    category: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawTimelineEvent> for TimelineEvent {
    type Error = ChartError;

    fn try_from(raw: RawTimelineEvent) -> ChartResult<Self> {
        Self::new(raw.category, raw.start, raw.end)
    }
}

impl TimelineEvent {
    pub fn new(
        category: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ChartResult<Self> {
        let category = category.into();
        if start > end {
            return Err(ChartError::InvalidEventInterval {
                category,
                start,
                end,
            });
        }
        Ok(Self {
            category,
            start,
            end,
        })
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// `start + (end - start) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> DateTime<Utc> {
        self.start + self.duration() / 2
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        self.start <= time && time <= self.end
    }
}
