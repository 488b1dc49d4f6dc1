use smallvec::SmallVec;

use crate::core::{LaneLayout, PlotArea, TimeDomain, TimelineEvent, Viewport};
use crate::error::ChartResult;
use crate::interaction::SelectionState;
use crate::render::{
    CanvasLayerKind, CategoryColorMap, Color, LayerPrimitives, LayeredRenderFrame, LinePrimitive,
    RectPrimitive, TextHAlign, TextPrimitive, estimate_text_width_px,
};

use super::{EventDetail, TimelineStyle, project_event_bars, time_axis_ticks};

const AXIS_TICK_LENGTH_PX: f64 = 4.0;
const AXIS_LABEL_GAP_PX: f64 = 2.0;
const LANE_LABEL_GAP_PX: f64 = 6.0;
const CALLOUT_GAP_PX: f64 = 4.0;

/// Every input of one timeline draw pass.
///
/// Rendering is a pure function of this scene, so hosts can rebuild frames
/// without owning an [`super::EventTimelineChart`].
#[derive(Debug, Clone, Copy)]
pub struct TimelineScene<'a> {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub domain: TimeDomain,
    pub events: &'a [TimelineEvent],
    pub lanes: &'a LaneLayout,
    pub colors: &'a CategoryColorMap,
    pub style: &'a TimelineStyle,
    pub selection: &'a SelectionState,
    pub header: Option<&'a str>,
    pub overview: bool,
}

/// Plot rectangle for a timeline in detail or overview mode.
pub fn timeline_plot_area(
    viewport: Viewport,
    style: &TimelineStyle,
    overview: bool,
) -> ChartResult<PlotArea> {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    if overview {
        let pad = style.overview_padding_px;
        return PlotArea::new(pad, pad, width - 2.0 * pad, height - 2.0 * pad);
    }

    let top = style.header_height_px + style.plot_top_padding_px;
    PlotArea::new(
        style.plot_left_padding_px,
        top,
        width - style.plot_left_padding_px - style.plot_right_padding_px,
        height - top - style.axis_height_px,
    )
}

/// Builds every layer, overlay included.
pub fn render_timeline(scene: &TimelineScene<'_>) -> ChartResult<LayeredRenderFrame> {
    let mut frame = build_base_layers(scene)?;
    frame.replace_layer(build_overlay_layer(scene)?);
    Ok(frame)
}

/// Background, bars, header, and axes. Independent of the selection.
pub fn build_base_layers(scene: &TimelineScene<'_>) -> ChartResult<LayeredRenderFrame> {
    let style = scene.style;
    let plot = scene.plot;
    let mut frame = LayeredRenderFrame::new(scene.viewport);

    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            0.0,
            0.0,
            f64::from(scene.viewport.width),
            f64::from(scene.viewport.height),
            style.background_color,
        ),
    );

    let bars = project_event_bars(
        scene.events,
        scene.domain,
        scene.lanes,
        plot,
        style.lane_fill_ratio,
        style.min_bar_width_px,
    )?;
    for bar in &bars {
        let color = scene.colors.color_for(scene.events[bar.event_index].category());
        let radius = style
            .bar_corner_radius_px
            .min(bar.height / 2.0)
            .min(bar.width / 2.0);
        frame.push_rect(
            CanvasLayerKind::Series,
            RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, color)
                .with_corner_radius(radius),
        );
    }

    if scene.overview {
        return Ok(frame);
    }

    if let Some(header) = scene.header.filter(|header| !header.is_empty()) {
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                header,
                plot.left,
                (style.header_height_px - style.header_font_size_px).max(0.0) / 2.0,
                style.header_font_size_px,
                style.header_color,
                TextHAlign::Left,
            )
            .bold(),
        );
    }

    push_time_axis(&mut frame, scene)?;
    push_lane_labels(&mut frame, scene);
    Ok(frame)
}

fn push_time_axis(frame: &mut LayeredRenderFrame, scene: &TimelineScene<'_>) -> ChartResult<()> {
    let style = scene.style;
    let plot = scene.plot;
    let baseline = plot.bottom();

    frame.push_line(
        CanvasLayerKind::Axis,
        LinePrimitive::new(plot.left, baseline, plot.right(), baseline, 1.0, style.axis_color),
    );
    for tick in time_axis_ticks(scene.domain, plot, style.min_tick_spacing_px)? {
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(
                tick.x,
                baseline,
                tick.x,
                baseline + AXIS_TICK_LENGTH_PX,
                1.0,
                style.axis_color,
            ),
        );
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                tick.label,
                tick.x,
                baseline + AXIS_TICK_LENGTH_PX + AXIS_LABEL_GAP_PX,
                style.axis_font_size_px,
                style.axis_color,
                TextHAlign::Center,
            ),
        );
    }
    Ok(())
}

fn push_lane_labels(frame: &mut LayeredRenderFrame, scene: &TimelineScene<'_>) {
    if scene.lanes.is_empty() {
        return;
    }
    let style = scene.style;
    let plot = scene.plot;
    let band = plot.height / scene.lanes.len() as f64;
    for (lane, category) in scene.lanes.categories().enumerate() {
        if category.is_empty() {
            continue;
        }
        let center = plot.top + band * (lane as f64 + 0.5);
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                category,
                plot.right() + LANE_LABEL_GAP_PX,
                center - style.lane_label_font_size_px / 2.0,
                style.lane_label_font_size_px,
                style.axis_color,
                TextHAlign::Left,
            ),
        );
    }
}

/// Dashed midpoint rule plus detail callout for the selected event.
///
/// Empty when nothing is selected or in overview mode.
pub fn build_overlay_layer(scene: &TimelineScene<'_>) -> ChartResult<LayerPrimitives> {
    let mut layer = LayerPrimitives::empty(CanvasLayerKind::Overlay);
    if scene.overview {
        return Ok(layer);
    }
    let Some(event) = scene.selection.selected() else {
        return Ok(layer);
    };

    let style = scene.style;
    let plot = scene.plot;
    let x = scene
        .domain
        .pixel_x(event.midpoint(), plot.left, plot.width)?
        .clamp(plot.left, plot.right());

    layer.lines.push(
        LinePrimitive::new(x, plot.top, x, plot.bottom(), style.rule_width_px, style.rule_color)
            .with_dash(style.rule_dash),
    );

    let detail = EventDetail::for_event(event);
    let lines: SmallVec<[(String, f64, Color, bool); 3]> = SmallVec::from_buf([
        (
            detail.clock_in,
            style.callout_font_size_px,
            style.callout_detail_color,
            false,
        ),
        (
            detail.clock_out,
            style.callout_font_size_px,
            style.callout_detail_color,
            false,
        ),
        (
            detail.duration,
            style.callout_title_font_size_px,
            style.callout_title_color,
            true,
        ),
    ]);

    let content_width = lines
        .iter()
        .map(|(text, size, _, _)| estimate_text_width_px(text, *size))
        .fold(0.0, f64::max);
    let content_height = lines.iter().map(|(_, size, _, _)| *size).sum::<f64>()
        + style.callout_line_spacing_px * (lines.len() - 1) as f64;
    let box_width = content_width + 2.0 * style.callout_padding_x_px;
    let box_height = content_height + 2.0 * style.callout_padding_y_px;

    let max_left = (f64::from(scene.viewport.width) - box_width).max(0.0);
    let box_x = (x - box_width / 2.0).clamp(0.0, max_left);
    let box_y = (plot.top - box_height - CALLOUT_GAP_PX).max(0.0);

    layer.rects.push(
        RectPrimitive::new(
            box_x,
            box_y,
            box_width,
            box_height,
            style.callout_background_color,
        )
        .with_corner_radius(style.callout_corner_radius_px)
        .with_border(1.0, style.callout_border_color),
    );

    let mut y = box_y + style.callout_padding_y_px;
    for (text, size, color, bold) in lines {
        let mut primitive = TextPrimitive::new(
            text,
            box_x + style.callout_padding_x_px,
            y,
            size,
            color,
            TextHAlign::Left,
        );
        if bold {
            primitive = primitive.bold();
        }
        layer.texts.push(primitive);
        y += size + style.callout_line_spacing_px;
    }

    Ok(layer)
}
