#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chart_gallery::ChartError;
use chart_gallery::core::Viewport;
use chart_gallery::gallery::{sales_threshold_chart, time_sheet_day_chart};
use chart_gallery::render::{CairoContextRenderer, CairoRenderer};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_time_sheet_with_callout() {
    let renderer = CairoRenderer::new(720, 320).expect("renderer");
    let mut chart = time_sheet_day_chart(renderer, Viewport::new(720, 320)).expect("chart");
    chart.render().expect("render");
    let base = chart.renderer().last_stats();
    assert_eq!(base.rects_drawn, 5);

    chart.select_at_viewport_x(300.0).expect("select");
    chart.render().expect("overlay render");
    let stats = chart.renderer().last_stats();
    assert_eq!(stats.rects_drawn, base.rects_drawn + 1);
    assert_eq!(stats.texts_drawn, base.texts_drawn + 3);
}

#[test]
fn cairo_renderer_writes_png_preview() {
    let renderer = CairoRenderer::new(300, 100).expect("renderer");
    let mut chart =
        sales_threshold_chart(renderer, Viewport::new(300, 100), true).expect("chart");
    chart.render().expect("render");

    let mut png = Vec::new();
    chart.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut renderer = CairoRenderer::new(720, 320).expect("renderer");
    let chart = time_sheet_day_chart(
        chart_gallery::render::NullRenderer::default(),
        Viewport::new(720, 320),
    )
    .expect("chart");
    let frame = chart.build_render_frame().expect("frame").flatten();

    let surface = ImageSurface::create(Format::ARgb32, 720, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");
    assert_eq!(renderer.last_stats().rects_drawn, frame.rects.len());
}
