use crate::core::THRESHOLD_RANGE;
use crate::error::{ChartError, ChartResult};

use super::{ThresholdStyle, TimelineStyle};

fn require_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn require_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

pub(super) fn validate_timeline_style(style: TimelineStyle) -> ChartResult<TimelineStyle> {
    for (name, value) in [
        ("plot left padding", style.plot_left_padding_px),
        ("plot right padding", style.plot_right_padding_px),
        ("plot top padding", style.plot_top_padding_px),
        ("overview padding", style.overview_padding_px),
        ("header height", style.header_height_px),
        ("axis height", style.axis_height_px),
        ("bar corner radius", style.bar_corner_radius_px),
        ("min bar width", style.min_bar_width_px),
        ("callout horizontal padding", style.callout_padding_x_px),
        ("callout vertical padding", style.callout_padding_y_px),
        ("callout line spacing", style.callout_line_spacing_px),
        ("callout corner radius", style.callout_corner_radius_px),
    ] {
        require_non_negative(name, value)?;
    }
    for (name, value) in [
        ("header font size", style.header_font_size_px),
        ("axis font size", style.axis_font_size_px),
        ("lane label font size", style.lane_label_font_size_px),
        ("min tick spacing", style.min_tick_spacing_px),
        ("rule width", style.rule_width_px),
        ("callout font size", style.callout_font_size_px),
        ("callout title font size", style.callout_title_font_size_px),
    ] {
        require_positive(name, value)?;
    }
    if !style.lane_fill_ratio.is_finite()
        || style.lane_fill_ratio <= 0.0
        || style.lane_fill_ratio > 1.0
    {
        return Err(ChartError::InvalidData(
            "lane fill ratio must be in (0, 1]".to_owned(),
        ));
    }
    style.rule_dash.validate()?;
    for color in [
        style.background_color,
        style.header_color,
        style.axis_color,
        style.rule_color,
        style.callout_background_color,
        style.callout_border_color,
        style.callout_detail_color,
        style.callout_title_color,
    ] {
        color.validate()?;
    }
    Ok(style)
}

pub(super) fn validate_threshold_style(style: ThresholdStyle) -> ChartResult<ThresholdStyle> {
    for (name, value) in [
        ("plot left padding", style.plot_left_padding_px),
        ("plot right padding", style.plot_right_padding_px),
        ("plot top padding", style.plot_top_padding_px),
        ("axis height", style.axis_height_px),
        ("overview padding", style.overview_padding_px),
        ("bar corner radius", style.bar_corner_radius_px),
    ] {
        require_non_negative(name, value)?;
    }
    for (name, value) in [
        ("rule width", style.rule_width_px),
        ("threshold label font size", style.threshold_label_font_size_px),
        ("axis font size", style.axis_font_size_px),
    ] {
        require_positive(name, value)?;
    }
    if !style.bar_gap_ratio.is_finite() || !(0.0..1.0).contains(&style.bar_gap_ratio) {
        return Err(ChartError::InvalidData(
            "bar gap ratio must be in [0, 1)".to_owned(),
        ));
    }
    if style.value_tick_count == 0 || style.day_label_every == 0 {
        return Err(ChartError::InvalidData(
            "tick and label cadence must be > 0".to_owned(),
        ));
    }
    for color in [
        style.background_color,
        style.above_color,
        style.below_color,
        style.rule_color,
        style.threshold_label_color,
        style.threshold_label_background_color,
        style.axis_color,
        style.grid_color,
    ] {
        color.validate()?;
    }
    Ok(style)
}

pub(super) fn validate_threshold(threshold: f64) -> ChartResult<f64> {
    if !threshold.is_finite() || !THRESHOLD_RANGE.contains(&threshold) {
        return Err(ChartError::InvalidThreshold(threshold));
    }
    Ok(threshold)
}
