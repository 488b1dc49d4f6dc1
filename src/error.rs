use chrono::{DateTime, Utc};
use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid time domain: start={start} must be before end={end}")]
    InvalidTimeDomain {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("invalid event interval for `{category}`: start={start} is after end={end}")]
    InvalidEventInterval {
        category: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("threshold {0} is outside the supported range")]
    InvalidThreshold(f64),

    #[error("unknown chart type: {0}")]
    UnknownChartType(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
