//! Gallery catalog: chart types, their detail and overview setups, and the
//! preview cache.

mod chart_type;
mod preview_cache;
pub mod sample_data;

pub use chart_type::{ChartCategory, ChartType, chart_types_in, displayed_categories};
pub use preview_cache::PreviewCache;

use crate::api::{
    ChartDescriptor, DEFAULT_SALES_THRESHOLD, EventTimelineChart, ThresholdBarChart,
    ThresholdChartConfig, TimelineChartConfig, sales_descriptor, timeline_descriptor,
};
use crate::core::{TimeDomain, Viewport};
use crate::error::ChartResult;
use crate::render::{NullRenderer, RenderFrame, Renderer};

/// Monday section of the time-sheet detail view.
pub fn time_sheet_day_chart<R: Renderer>(
    renderer: R,
    viewport: Viewport,
) -> ChartResult<EventTimelineChart<R>> {
    let config = TimelineChartConfig::new(viewport, sample_data::opening_hours()?)
        .with_header_prefix("Day total");
    let mut chart = EventTimelineChart::new(renderer, config)?;
    chart.set_events(sample_data::time_sheet_last_day()?);
    Ok(chart)
}

/// Week 24 section of the time-sheet detail view.
pub fn time_sheet_week_chart<R: Renderer>(
    renderer: R,
    viewport: Viewport,
) -> ChartResult<EventTimelineChart<R>> {
    let config = TimelineChartConfig::new(viewport, sample_data::work_week()?)
        .with_header_prefix("Week total");
    let mut chart = EventTimelineChart::new(renderer, config)?;
    chart.set_events(sample_data::time_sheet_last_week()?);
    Ok(chart)
}

pub fn sales_threshold_chart<R: Renderer>(
    renderer: R,
    viewport: Viewport,
    overview: bool,
) -> ChartResult<ThresholdBarChart<R>> {
    let config = ThresholdChartConfig::new(viewport)
        .with_threshold(DEFAULT_SALES_THRESHOLD)
        .with_overview(overview);
    let mut chart = ThresholdBarChart::new(renderer, config)?;
    chart.set_data(sample_data::sales_last_30_days()?);
    Ok(chart)
}

/// Compact, axis-less frame used as the gallery list thumbnail.
pub fn overview_frame(chart: ChartType, viewport: Viewport) -> ChartResult<RenderFrame> {
    match chart {
        ChartType::SingleBarThreshold => {
            let chart = sales_threshold_chart(NullRenderer::default(), viewport, true)?;
            Ok(chart.build_render_frame()?.flatten())
        }
        ChartType::TimeSheetBar => {
            let events = sample_data::time_sheet_last_day()?;
            let config = TimelineChartConfig::new(viewport, TimeDomain::fit_events(&events)?)
                .with_overview(true);
            let mut chart = EventTimelineChart::new(NullRenderer::default(), config)?;
            chart.set_events(events);
            Ok(chart.build_render_frame()?.flatten())
        }
    }
}

pub fn chart_descriptor(chart: ChartType) -> ChartResult<ChartDescriptor> {
    match chart {
        ChartType::SingleBarThreshold => Ok(sales_descriptor(
            &sample_data::sales_last_30_days()?,
            DEFAULT_SALES_THRESHOLD,
        )),
        ChartType::TimeSheetBar => Ok(timeline_descriptor(&sample_data::time_sheet_last_day()?)),
    }
}
