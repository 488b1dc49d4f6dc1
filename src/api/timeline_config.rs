use serde::{Deserialize, Serialize};

use crate::core::{TimeDomain, Viewport};
use crate::render::{CategoryColorMap, Color, LineDash};

/// Visual tuning for event timelines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineStyle {
    pub background_color: Color,
    pub plot_left_padding_px: f64,
    /// Room on the trailing edge for lane labels.
    pub plot_right_padding_px: f64,
    /// Room above the plot for the selection callout.
    pub plot_top_padding_px: f64,
    pub overview_padding_px: f64,
    pub header_height_px: f64,
    pub header_font_size_px: f64,
    pub header_color: Color,
    pub axis_height_px: f64,
    pub axis_font_size_px: f64,
    pub axis_color: Color,
    pub min_tick_spacing_px: f64,
    pub lane_label_font_size_px: f64,
    /// Share of each lane band covered by its bars, in `(0, 1]`.
    pub lane_fill_ratio: f64,
    pub bar_corner_radius_px: f64,
    pub min_bar_width_px: f64,
    pub rule_width_px: f64,
    pub rule_color: Color,
    pub rule_dash: LineDash,
    pub callout_font_size_px: f64,
    pub callout_title_font_size_px: f64,
    pub callout_padding_x_px: f64,
    pub callout_padding_y_px: f64,
    pub callout_line_spacing_px: f64,
    pub callout_corner_radius_px: f64,
    pub callout_background_color: Color,
    pub callout_border_color: Color,
    pub callout_detail_color: Color,
    pub callout_title_color: Color,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            plot_left_padding_px: 8.0,
            plot_right_padding_px: 88.0,
            plot_top_padding_px: 72.0,
            overview_padding_px: 4.0,
            header_height_px: 32.0,
            header_font_size_px: 20.0,
            header_color: Color::BLACK,
            axis_height_px: 24.0,
            axis_font_size_px: 11.0,
            axis_color: Color::GRAY,
            min_tick_spacing_px: 64.0,
            lane_label_font_size_px: 12.0,
            lane_fill_ratio: 0.7,
            bar_corner_radius_px: 8.0,
            min_bar_width_px: 1.0,
            rule_width_px: 2.0,
            rule_color: Color::GRAY,
            rule_dash: LineDash::new(2.0, 2.0, 5.0),
            callout_font_size_px: 12.0,
            callout_title_font_size_px: 15.0,
            callout_padding_x_px: 10.0,
            callout_padding_y_px: 4.0,
            callout_line_spacing_px: 6.0,
            callout_corner_radius_px: 6.0,
            callout_background_color: Color::WHITE,
            callout_border_color: Color::GRAY.with_alpha(0.4),
            callout_detail_color: Color::GRAY,
            callout_title_color: Color::BLACK,
        }
    }
}

/// Bootstrap configuration for [`super::EventTimelineChart`].
///
/// Serializable so gallery sections can be declared as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineChartConfig {
    pub viewport: Viewport,
    pub domain: TimeDomain,
    /// Header reads `<prefix>: <total duration>` when set.
    #[serde(default)]
    pub header_prefix: Option<String>,
    #[serde(default)]
    pub category_order: Option<Vec<String>>,
    /// Compact rendering without header, axis, or callout.
    #[serde(default)]
    pub overview: bool,
    #[serde(default)]
    pub style: TimelineStyle,
    #[serde(default)]
    pub colors: CategoryColorMap,
}

impl TimelineChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport, domain: TimeDomain) -> Self {
        Self {
            viewport,
            domain,
            header_prefix: None,
            category_order: None,
            overview: false,
            style: TimelineStyle::default(),
            colors: CategoryColorMap::default(),
        }
    }

    #[must_use]
    pub fn with_header_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.header_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_category_order(mut self, order: Vec<String>) -> Self {
        self.category_order = Some(order);
        self
    }

    #[must_use]
    pub fn with_overview(mut self, overview: bool) -> Self {
        self.overview = overview;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: TimelineStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: CategoryColorMap) -> Self {
        self.colors = colors;
        self
    }
}
