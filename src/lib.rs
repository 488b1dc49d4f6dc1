//! chart-gallery: a small gallery of chart types on a declarative charting core.
//!
//! Charts build deterministic, backend-agnostic frames from their inputs and
//! hand them to a [`render::Renderer`]. The time-sheet timeline supports
//! tap-to-select with a detail callout; the threshold bar chart colors days
//! above or below an adjustable sales threshold.

pub mod api;
pub mod core;
pub mod error;
pub mod gallery;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{EventTimelineChart, ThresholdBarChart, ThresholdChartConfig, TimelineChartConfig};
pub use error::{ChartError, ChartResult};
