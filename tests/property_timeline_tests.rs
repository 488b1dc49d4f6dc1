use chart_gallery::api::{EventTimelineChart, TimelineChartConfig};
use chart_gallery::core::{TimeDomain, TimelineEvent, Viewport, total_duration};
use chart_gallery::render::NullRenderer;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 6, 13, 0, 0, 0)
        .single()
        .expect("valid base")
}

fn event_strategy() -> impl Strategy<Value = TimelineEvent> {
    (
        prop::sample::select(vec!["Bread", "Butchery", "Counter", "Vegetables"]),
        0i64..86_400,
        0i64..36_000,
    )
        .prop_map(|(category, start, len)| {
            let start = base() + TimeDelta::seconds(start);
            TimelineEvent::new(category, start, start + TimeDelta::seconds(len))
                .expect("generated event")
        })
}

fn events_and_permutation() -> impl Strategy<Value = (Vec<TimelineEvent>, Vec<TimelineEvent>)> {
    prop::collection::vec(event_strategy(), 0..32).prop_flat_map(|events| {
        let permuted = Just(events.clone()).prop_shuffle();
        (Just(events), permuted)
    })
}

proptest! {
    #[test]
    fn pixel_time_round_trip_property(
        start_offset in 0i64..1_000_000,
        span in 60i64..2_000_000,
        factor in 0.0f64..1.0,
        plot_width in 10.0f64..4_000.0
    ) {
        let start = base() + TimeDelta::seconds(start_offset);
        let domain = TimeDomain::new(start, start + TimeDelta::seconds(span)).expect("domain");
        let px = factor * plot_width;

        let time = domain.time_at(px, 0.0, plot_width).expect("time");
        let recovered = domain.pixel_x(time, 0.0, plot_width).expect("pixel");

        // One microsecond of rounding is far below a pixel for these spans.
        prop_assert!((recovered - px).abs() <= 1e-3);
    }

    #[test]
    fn total_duration_ignores_order_property(
        (events, permuted) in events_and_permutation()
    ) {
        prop_assert_eq!(total_duration(&permuted), total_duration(&events));
    }

    #[test]
    fn replacing_events_always_clears_selection_property(
        first in prop::collection::vec(event_strategy(), 1..16),
        second in prop::collection::vec(event_strategy(), 0..16),
        factor in 0.0f64..1.0
    ) {
        let domain = TimeDomain::new(base(), base() + TimeDelta::days(2)).expect("domain");
        let config = TimelineChartConfig::new(Viewport::new(1000, 320), domain);
        let mut chart = EventTimelineChart::new(NullRenderer::default(), config).expect("chart");
        let plot_width = chart.plot_area().expect("plot").width;

        chart.set_events(first);
        chart.select_at(factor * plot_width, plot_width).expect("select");
        chart.set_events(second);

        prop_assert!(chart.selected_event().is_none());
    }

    #[test]
    fn hit_is_first_containing_event_property(
        events in prop::collection::vec(event_strategy(), 1..24),
        factor in 0.0f64..1.0
    ) {
        let domain = TimeDomain::new(base(), base() + TimeDelta::days(2)).expect("domain");
        let config = TimelineChartConfig::new(Viewport::new(1000, 320), domain);
        let mut chart = EventTimelineChart::new(NullRenderer::default(), config).expect("chart");
        let plot_width = chart.plot_area().expect("plot").width;
        chart.set_events(events.clone());

        let px = factor * plot_width;
        let time = domain.time_at(px, 0.0, plot_width).expect("time");
        let expected = events.iter().position(|event| event.contains(time));

        chart.select_at(px, plot_width).expect("select");
        prop_assert_eq!(chart.selection().selected_index(), expected);
    }
}
