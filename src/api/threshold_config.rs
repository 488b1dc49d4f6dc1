use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::Color;

pub const DEFAULT_SALES_THRESHOLD: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdStyle {
    pub background_color: Color,
    pub plot_left_padding_px: f64,
    /// Room on the trailing edge for value labels.
    pub plot_right_padding_px: f64,
    /// Room above the plot for the threshold label.
    pub plot_top_padding_px: f64,
    pub axis_height_px: f64,
    pub overview_padding_px: f64,
    pub above_color: Color,
    pub below_color: Color,
    /// Share of each day slot left empty between bars, in `[0, 1)`.
    pub bar_gap_ratio: f64,
    pub bar_corner_radius_px: f64,
    pub rule_color: Color,
    pub rule_width_px: f64,
    pub threshold_label_font_size_px: f64,
    pub threshold_label_color: Color,
    pub threshold_label_background_color: Color,
    pub axis_color: Color,
    pub grid_color: Color,
    pub axis_font_size_px: f64,
    pub value_tick_count: usize,
    pub day_label_every: usize,
}

impl Default for ThresholdStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            plot_left_padding_px: 12.0,
            plot_right_padding_px: 40.0,
            plot_top_padding_px: 36.0,
            axis_height_px: 24.0,
            overview_padding_px: 4.0,
            above_color: Color::ORANGE,
            below_color: Color::BLUE,
            bar_gap_ratio: 0.2,
            bar_corner_radius_px: 2.0,
            rule_color: Color::RED,
            rule_width_px: 2.0,
            threshold_label_font_size_px: 20.0,
            threshold_label_color: Color::BLACK,
            threshold_label_background_color: Color::GRAY.with_alpha(0.25),
            axis_color: Color::GRAY,
            grid_color: Color::GRAY.with_alpha(0.3),
            axis_font_size_px: 11.0,
            value_tick_count: 4,
            day_label_every: 7,
        }
    }
}

/// Bootstrap configuration for [`super::ThresholdBarChart`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub overview: bool,
    #[serde(default)]
    pub style: ThresholdStyle,
}

impl ThresholdChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            threshold: default_threshold(),
            overview: false,
            style: ThresholdStyle::default(),
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_overview(mut self, overview: bool) -> Self {
        self.overview = overview;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ThresholdStyle) -> Self {
        self.style = style;
        self
    }
}

fn default_threshold() -> f64 {
    DEFAULT_SALES_THRESHOLD
}
