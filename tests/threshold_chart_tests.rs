use approx::assert_abs_diff_eq;
use chart_gallery::ChartError;
use chart_gallery::api::{DEFAULT_SALES_THRESHOLD, ThresholdBarChart, ThresholdChartConfig};
use chart_gallery::core::{SalePoint, Viewport};
use chart_gallery::render::{CanvasLayerKind, Color, NullRenderer};
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 6, d).expect("valid day")
}

fn chart() -> ThresholdBarChart<NullRenderer> {
    let config = ThresholdChartConfig::new(Viewport::new(640, 320));
    let mut chart = ThresholdBarChart::new(NullRenderer::default(), config).expect("chart");
    chart.set_data(vec![
        SalePoint::new(day(1), 100),
        SalePoint::new(day(2), 150),
        SalePoint::new(day(3), 151),
        SalePoint::new(day(4), 275),
    ]);
    chart
}

#[test]
fn default_threshold_is_150() {
    let chart = chart();
    assert_eq!(chart.threshold(), DEFAULT_SALES_THRESHOLD);
    assert_eq!(chart.threshold_label(), "150");
}

#[test]
fn bars_strictly_above_threshold_use_above_color() {
    let chart = chart();
    assert_eq!(chart.above_threshold_count(), 2);

    let frame = chart.build_render_frame().expect("frame");
    let series = frame.layer(CanvasLayerKind::Series).expect("series");
    let colors: Vec<Color> = series.rects.iter().map(|rect| rect.fill_color).collect();
    assert_eq!(
        colors,
        vec![Color::BLUE, Color::BLUE, Color::ORANGE, Color::ORANGE]
    );
}

#[test]
fn moving_threshold_recolors_bars() {
    let mut chart = chart();
    chart.set_threshold(99.0).expect("threshold");
    assert_eq!(chart.above_threshold_count(), 4);
    chart.set_threshold(275.0).expect("threshold");
    assert_eq!(chart.above_threshold_count(), 0);
}

#[test]
fn threshold_outside_range_is_rejected_and_kept() {
    let mut chart = chart();
    for bad in [-1.0, 275.5, f64::NAN, f64::INFINITY] {
        let err = chart.set_threshold(bad).expect_err("invalid threshold");
        assert!(matches!(err, ChartError::InvalidThreshold(_)));
    }
    assert_eq!(chart.threshold(), DEFAULT_SALES_THRESHOLD);

    let config = ThresholdChartConfig::new(Viewport::new(640, 320)).with_threshold(400.0);
    assert!(ThresholdBarChart::new(NullRenderer::default(), config).is_err());
}

#[test]
fn rule_and_label_sit_in_overlay_layer() {
    let chart = chart();
    let plot = chart.plot_area().expect("plot");
    let frame = chart.build_render_frame().expect("frame");
    let overlay = frame.layer(CanvasLayerKind::Overlay).expect("overlay");

    assert_eq!(overlay.lines.len(), 1);
    let rule = overlay.lines[0];
    assert_eq!(rule.color, Color::RED);
    assert_eq!(rule.y1, rule.y2);
    assert!(rule.y1 > plot.top && rule.y1 < plot.bottom());

    assert_eq!(overlay.texts.len(), 1);
    assert_eq!(overlay.texts[0].text, "150");
    assert!(overlay.texts[0].bold);
}

#[test]
fn value_axis_always_fits_threshold() {
    let mut chart = chart();
    assert_eq!(chart.value_axis_max(), 275.0);

    chart.set_data(vec![SalePoint::new(day(1), 20)]);
    assert_eq!(chart.value_axis_max(), DEFAULT_SALES_THRESHOLD);

    chart.set_data(Vec::new());
    assert!(chart.project_sales_bars().expect("bars").is_empty());
}

#[test]
fn taller_bars_reach_higher() {
    let chart = chart();
    let bars = chart.project_sales_bars().expect("bars");
    assert_eq!(bars.len(), 4);
    assert!(bars[3].y < bars[0].y);
    assert!(bars.windows(2).all(|pair| pair[0].x < pair[1].x));
    let plot = chart.plot_area().expect("plot");
    for bar in &bars {
        assert_abs_diff_eq!(bar.y + bar.height, plot.bottom(), epsilon = 1e-9);
    }
}

#[test]
fn render_reports_primitives_to_renderer() {
    let mut chart = chart();
    chart.render().expect("render");
    let renderer = chart.into_renderer();
    assert_eq!(renderer.render_count, 1);
    // background, four bars, rule label background
    assert_eq!(renderer.last_rect_count, 6);
}

#[test]
fn threshold_label_box_is_drawn_above_grid_lines() {
    let chart = chart();
    let frame = chart.build_render_frame().expect("frame").flatten();
    let bands = frame.bands();

    let grid_band = bands
        .iter()
        .position(|band| band.lines.len() > 1)
        .expect("grid band");
    let label_band = bands
        .iter()
        .position(|band| band.texts.iter().any(|text| text.text == "150"))
        .expect("label band");

    assert!(grid_band < label_band);
    assert_eq!(bands[label_band].rects.len(), 1);
    assert_eq!(bands[label_band].lines.len(), 1);
    assert_eq!(bands.len(), 4);
}
