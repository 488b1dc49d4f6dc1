//! Chart engines and the pure builders behind them.

mod accessibility;
mod event_detail;
mod invalidation;
mod json_contract;
mod threshold_chart;
mod threshold_config;
mod time_axis;
mod timeline_chart;
mod timeline_config;
mod timeline_frame_builder;
mod timeline_geometry;
mod validation;

pub use accessibility::{
    AxisDescriptor, ChartDescriptor, DataPointDescriptor, SeriesDescriptor, empty_descriptor,
    sales_descriptor, timeline_descriptor,
};
pub use event_detail::{EventDetail, format_clock_time, format_short_time, section_title};
pub use invalidation::{InvalidationLevel, RenderPass};
pub use json_contract::{CHART_DESCRIPTOR_JSON_SCHEMA_V1, ChartDescriptorJsonContractV1};
pub use threshold_chart::{SaleBarGeometry, ThresholdBarChart, threshold_plot_area};
pub use threshold_config::{DEFAULT_SALES_THRESHOLD, ThresholdChartConfig, ThresholdStyle};
pub use time_axis::{TimeTick, select_tick_step_seconds, time_axis_ticks};
pub use timeline_chart::EventTimelineChart;
pub use timeline_config::{TimelineChartConfig, TimelineStyle};
pub use timeline_frame_builder::{
    TimelineScene, build_base_layers, build_overlay_layer, render_timeline, timeline_plot_area,
};
pub use timeline_geometry::{EventBarGeometry, project_event_bars};
