use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{LinearScale, PlotArea, SalePoint, Viewport};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, Color, LayeredRenderFrame, LinePrimitive, RectPrimitive, Renderer,
    TextHAlign, TextPrimitive, estimate_text_width_px,
};

use super::validation::{validate_threshold, validate_threshold_style};
use super::{ThresholdChartConfig, ThresholdStyle};

const LABEL_PADDING_X_PX: f64 = 8.0;
const LABEL_PADDING_Y_PX: f64 = 4.0;
const AXIS_LABEL_GAP_PX: f64 = 4.0;

/// Pixel geometry of one daily sales bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaleBarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub above_threshold: bool,
}

/// Daily sales bars colored against an adjustable threshold rule.
pub struct ThresholdBarChart<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    threshold: f64,
    overview: bool,
    style: ThresholdStyle,
    sales: Vec<SalePoint>,
}

impl<R: Renderer> ThresholdBarChart<R> {
    pub fn new(renderer: R, config: ThresholdChartConfig) -> ChartResult<Self> {
        let viewport = config.viewport.validate()?;
        let style = validate_threshold_style(config.style)?;
        let threshold = validate_threshold(config.threshold)?;
        threshold_plot_area(viewport, &style, config.overview)?;

        Ok(Self {
            renderer,
            viewport,
            threshold,
            overview: config.overview,
            style,
            sales: Vec::new(),
        })
    }

    pub fn set_data(&mut self, sales: Vec<SalePoint>) {
        debug!(count = sales.len(), "set sales data");
        self.sales = sales;
    }

    #[must_use]
    pub fn data(&self) -> &[SalePoint] {
        &self.sales
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) -> ChartResult<()> {
        self.threshold = validate_threshold(threshold)?;
        Ok(())
    }

    /// Threshold text as drawn on the rule label.
    #[must_use]
    pub fn threshold_label(&self) -> String {
        format!("{:.0}", self.threshold)
    }

    #[must_use]
    pub fn style(&self) -> &ThresholdStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ThresholdStyle) -> ChartResult<()> {
        let style = validate_threshold_style(style)?;
        threshold_plot_area(self.viewport, &style, self.overview)?;
        self.style = style;
        Ok(())
    }

    pub fn set_bar_colors(&mut self, above: Color, below: Color) -> ChartResult<()> {
        above.validate()?;
        below.validate()?;
        self.style.above_color = above;
        self.style.below_color = below;
        Ok(())
    }

    #[must_use]
    pub fn above_threshold_count(&self) -> usize {
        self.sales
            .iter()
            .filter(|sale| sale.is_above(self.threshold))
            .count()
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        threshold_plot_area(self.viewport, &self.style, self.overview)
    }

    /// Upper bound of the value axis; always fits both the bars and the rule.
    #[must_use]
    pub fn value_axis_max(&self) -> f64 {
        self.sales
            .iter()
            .map(|sale| OrderedFloat(f64::from(sale.sales)))
            .max()
            .map_or(0.0, |max| max.0)
            .max(self.threshold)
            .max(1.0)
    }

    fn value_scale(&self) -> ChartResult<LinearScale> {
        LinearScale::new(0.0, self.value_axis_max())
    }

    fn value_to_y(&self, value: f64, plot: PlotArea) -> ChartResult<f64> {
        self.value_scale()?
            .domain_to_pixel(value, plot.bottom(), -plot.height)
    }

    pub fn project_sales_bars(&self) -> ChartResult<Vec<SaleBarGeometry>> {
        let plot = self.plot_area()?;
        if self.sales.is_empty() {
            return Ok(Vec::new());
        }
        let slot = plot.width / self.sales.len() as f64;
        let bar_width = slot * (1.0 - self.style.bar_gap_ratio);

        let mut projected = Vec::with_capacity(self.sales.len());
        for (index, sale) in self.sales.iter().enumerate() {
            let top = self.value_to_y(f64::from(sale.sales), plot)?;
            projected.push(SaleBarGeometry {
                x: plot.left + slot * index as f64 + (slot - bar_width) / 2.0,
                y: top,
                width: bar_width,
                height: plot.bottom() - top,
                above_threshold: sale.is_above(self.threshold),
            });
        }
        Ok(projected)
    }

    pub fn build_render_frame(&self) -> ChartResult<LayeredRenderFrame> {
        let style = &self.style;
        let plot = self.plot_area()?;
        let mut frame = LayeredRenderFrame::new(self.viewport);

        frame.push_rect(
            CanvasLayerKind::Background,
            RectPrimitive::new(
                0.0,
                0.0,
                f64::from(self.viewport.width),
                f64::from(self.viewport.height),
                style.background_color,
            ),
        );

        if !self.overview {
            self.push_axes(&mut frame, plot)?;
        }

        for bar in self.project_sales_bars()? {
            let color = if bar.above_threshold {
                style.above_color
            } else {
                style.below_color
            };
            let radius = style
                .bar_corner_radius_px
                .min(bar.width / 2.0)
                .min(bar.height / 2.0);
            frame.push_rect(
                CanvasLayerKind::Series,
                RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, color)
                    .with_corner_radius(radius),
            );
        }

        let rule_y = self.value_to_y(self.threshold, plot)?;
        frame.push_line(
            CanvasLayerKind::Overlay,
            LinePrimitive::new(
                plot.left,
                rule_y,
                plot.right(),
                rule_y,
                style.rule_width_px,
                style.rule_color,
            ),
        );

        let label = self.threshold_label();
        let font = style.threshold_label_font_size_px;
        let label_y = (rule_y - font - LABEL_PADDING_Y_PX - style.rule_width_px).max(LABEL_PADDING_Y_PX);
        frame.push_rect(
            CanvasLayerKind::Overlay,
            RectPrimitive::new(
                (plot.left - LABEL_PADDING_X_PX).max(0.0),
                label_y - LABEL_PADDING_Y_PX,
                estimate_text_width_px(&label, font) + 2.0 * LABEL_PADDING_X_PX,
                font + 2.0 * LABEL_PADDING_Y_PX,
                style.threshold_label_background_color,
            )
            .with_corner_radius(8.0),
        );
        frame.push_text(
            CanvasLayerKind::Overlay,
            TextPrimitive::new(
                label,
                plot.left,
                label_y,
                font,
                style.threshold_label_color,
                TextHAlign::Left,
            )
            .bold(),
        );

        Ok(frame)
    }

    fn push_axes(&self, frame: &mut LayeredRenderFrame, plot: PlotArea) -> ChartResult<()> {
        let style = &self.style;
        let max = self.value_axis_max();
        let ticks = style.value_tick_count;
        for step in 0..=ticks {
            let value = max * step as f64 / ticks as f64;
            let y = self.value_to_y(value, plot)?;
            frame.push_line(
                CanvasLayerKind::Axis,
                LinePrimitive::new(plot.left, y, plot.right(), y, 1.0, style.grid_color),
            );
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    format!("{value:.0}"),
                    plot.right() + AXIS_LABEL_GAP_PX,
                    y - style.axis_font_size_px / 2.0,
                    style.axis_font_size_px,
                    style.axis_color,
                    TextHAlign::Left,
                ),
            );
        }

        if self.sales.is_empty() {
            return Ok(());
        }
        let slot = plot.width / self.sales.len() as f64;
        for (index, sale) in self.sales.iter().enumerate().step_by(style.day_label_every) {
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    sale.day.format("%b %-d").to_string(),
                    plot.left + slot * (index as f64 + 0.5),
                    plot.bottom() + AXIS_LABEL_GAP_PX,
                    style.axis_font_size_px,
                    style.axis_color,
                    TextHAlign::Center,
                ),
            );
        }
        Ok(())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?.flatten();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

pub fn threshold_plot_area(
    viewport: Viewport,
    style: &ThresholdStyle,
    overview: bool,
) -> ChartResult<PlotArea> {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    if overview {
        let pad = style.overview_padding_px;
        let top = pad.max(style.plot_top_padding_px);
        return PlotArea::new(pad, top, width - 2.0 * pad, height - top - pad);
    }
    let top = style.plot_top_padding_px;
    PlotArea::new(
        style.plot_left_padding_px,
        top,
        width - style.plot_left_padding_px - style.plot_right_padding_px,
        height - top - style.axis_height_px,
    )
}
