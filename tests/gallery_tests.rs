use chart_gallery::api::{AxisDescriptor, ChartDescriptor};
use chart_gallery::core::Viewport;
use chart_gallery::gallery::{
    ChartCategory, ChartType, PreviewCache, chart_descriptor, chart_types_in,
    displayed_categories, time_sheet_day_chart, time_sheet_week_chart,
};
use chart_gallery::render::NullRenderer;

#[test]
fn all_filter_lists_every_bar_chart() {
    assert_eq!(displayed_categories(ChartCategory::All), vec![ChartCategory::Bar]);
    let charts: Vec<ChartType> = chart_types_in(ChartCategory::Bar).collect();
    assert_eq!(
        charts,
        vec![ChartType::SingleBarThreshold, ChartType::TimeSheetBar]
    );
    assert_eq!(
        "timeSheetBar".parse::<ChartType>().expect("known id"),
        ChartType::TimeSheetBar
    );
}

#[test]
fn preview_cache_holds_axis_less_frames_for_every_chart() {
    let cache = PreviewCache::build(Viewport::new(300, 100)).expect("previews");
    assert_eq!(cache.len(), ChartType::ALL_CASES.len());

    let time_sheet = cache.get(ChartType::TimeSheetBar).expect("time sheet");
    assert_eq!(time_sheet.rects.len(), 5);
    assert!(time_sheet.lines.is_empty());
    assert!(time_sheet.texts.is_empty());

    let sales = cache.get(ChartType::SingleBarThreshold).expect("sales");
    // background, thirty bars, rule label background
    assert_eq!(sales.rects.len(), 32);
    assert_eq!(sales.lines.len(), 1);

    for (_, frame) in cache.iter() {
        assert_eq!(frame.viewport, cache.viewport());
        frame.validate().expect("valid preview");
    }
}

#[test]
fn sample_time_sheets_report_day_and_week_totals() {
    let day = time_sheet_day_chart(NullRenderer::default(), Viewport::new(720, 320))
        .expect("day chart");
    assert_eq!(day.header_title().as_deref(), Some("Day total: 26h 30m"));

    let week = time_sheet_week_chart(NullRenderer::default(), Viewport::new(720, 320))
        .expect("week chart");
    assert_eq!(week.events().len(), 12);
    assert!(
        week.header_title()
            .is_some_and(|title| title.starts_with("Week total: "))
    );
}

#[test]
fn time_sheet_descriptor_lists_departments_and_shifts() {
    let descriptor = chart_descriptor(ChartType::TimeSheetBar).expect("descriptor");
    assert_eq!(descriptor.title, "Timesheet by department");
    match &descriptor.x_axis {
        AxisDescriptor::Categorical { category_order, .. } => assert_eq!(
            category_order,
            &vec!["Counter", "Bread", "Butchery", "Vegetables"]
        ),
        other => panic!("unexpected x axis: {other:?}"),
    }
    let points = &descriptor.series[0].data_points;
    assert_eq!(points.len(), 4);
    assert_eq!(
        points[1].label.as_deref(),
        Some("Clock in: 8:00 AM, Clock out: 2:00 PM")
    );
    assert_eq!(points[1].y, 6.0 * 3_600.0);
}

#[test]
fn sales_descriptor_survives_json_contract() {
    let descriptor = chart_descriptor(ChartType::SingleBarThreshold).expect("descriptor");
    assert_eq!(descriptor.summary.as_deref(), Some("Sale threshold: 150"));
    assert_eq!(descriptor.series[0].data_points.len(), 30);

    let json = descriptor.to_json_contract_v1_pretty().expect("json");
    assert!(json.contains("\"schema_version\": 1"));
    let parsed = ChartDescriptor::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, descriptor);
}
