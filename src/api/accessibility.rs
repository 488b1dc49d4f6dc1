use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{LaneLayout, SalePoint, TimelineEvent, format_duration};

use super::format_short_time;

/// Non-visual description of a chart for assistive technologies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub title: String,
    pub summary: Option<String>,
    pub x_axis: AxisDescriptor,
    pub y_axis: AxisDescriptor,
    pub series: Vec<SeriesDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AxisDescriptor {
    Categorical {
        title: String,
        category_order: Vec<String>,
    },
    Numeric {
        title: String,
        range: (f64, f64),
        gridline_positions: Vec<f64>,
        /// Spoken form of the range bounds.
        range_labels: (String, String),
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub name: String,
    pub is_continuous: bool,
    pub data_points: Vec<DataPointDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPointDescriptor {
    pub x: String,
    pub y: f64,
    pub label: Option<String>,
}

/// Describes a time sheet: departments on x, shift durations (seconds) on y.
#[must_use]
pub fn timeline_descriptor(events: &[TimelineEvent]) -> ChartDescriptor {
    let durations = events
        .iter()
        .map(|event| event.duration().num_seconds() as f64);
    let min = durations.clone().map(OrderedFloat).min().map_or(0.0, |v| v.0);
    let max = durations.map(OrderedFloat).max().map_or(0.0, |v| v.0);

    let lanes = LaneLayout::from_events(events, None);
    let data_points = events
        .iter()
        .map(|event| DataPointDescriptor {
            x: event.category().to_owned(),
            y: event.duration().num_seconds() as f64,
            label: Some(format!(
                "Clock in: {}, Clock out: {}",
                format_short_time(event.start()),
                format_short_time(event.end())
            )),
        })
        .collect();

    ChartDescriptor {
        title: "Timesheet by department".to_owned(),
        summary: None,
        x_axis: AxisDescriptor::Categorical {
            title: "Department".to_owned(),
            category_order: lanes.categories().map(str::to_owned).collect(),
        },
        y_axis: AxisDescriptor::Numeric {
            title: "Duration".to_owned(),
            range: (min, max),
            gridline_positions: Vec::new(),
            range_labels: (
                format_duration(chrono::TimeDelta::seconds(min as i64)),
                format_duration(chrono::TimeDelta::seconds(max as i64)),
            ),
        },
        series: vec![SeriesDescriptor {
            name: "Timesheet Example".to_owned(),
            is_continuous: false,
            data_points,
        }],
    }
}

/// Describes daily sales relative to a threshold.
#[must_use]
pub fn sales_descriptor(sales: &[SalePoint], threshold: f64) -> ChartDescriptor {
    let max = sales
        .iter()
        .map(|sale| sale.sales)
        .max()
        .map_or(0.0, f64::from);
    let data_points = sales
        .iter()
        .map(|sale| {
            let side = if sale.is_above(threshold) {
                "Above"
            } else {
                "Below"
            };
            DataPointDescriptor {
                x: sale.day.format("%A, %B %-d, %Y").to_string(),
                y: f64::from(sale.sales),
                label: Some(format!("{} sold. {side} threshold", sale.sales)),
            }
        })
        .collect();

    ChartDescriptor {
        title: "Daily sales".to_owned(),
        summary: Some(format!("Sale threshold: {}", threshold.trunc() as i64)),
        x_axis: AxisDescriptor::Categorical {
            title: "Day".to_owned(),
            category_order: sales
                .iter()
                .map(|sale| sale.day.format("%A, %B %-d, %Y").to_string())
                .collect(),
        },
        y_axis: AxisDescriptor::Numeric {
            title: "Sales".to_owned(),
            range: (0.0, max),
            gridline_positions: vec![threshold],
            range_labels: ("0".to_owned(), format!("{max:.0}")),
        },
        series: vec![SeriesDescriptor {
            name: "Sales".to_owned(),
            is_continuous: false,
            data_points,
        }],
    }
}

/// Fallback descriptor for charts that do not describe themselves.
#[must_use]
pub fn empty_descriptor() -> ChartDescriptor {
    let axis = AxisDescriptor::Numeric {
        title: String::new(),
        range: (0.0, 0.0),
        gridline_positions: Vec::new(),
        range_labels: (String::new(), String::new()),
    };
    ChartDescriptor {
        title: String::new(),
        summary: None,
        x_axis: axis.clone(),
        y_axis: axis,
        series: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisDescriptor, sales_descriptor, timeline_descriptor};
    use crate::core::{SalePoint, TimelineEvent};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn timeline_descriptor_reports_duration_range_and_labels() {
        let events = vec![
            TimelineEvent::new(
                "Bread",
                Utc.with_ymd_and_hms(2022, 6, 13, 8, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2022, 6, 13, 14, 0, 0).unwrap(),
            )
            .expect("event"),
            TimelineEvent::new(
                "Butchery",
                Utc.with_ymd_and_hms(2022, 6, 13, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2022, 6, 13, 17, 0, 0).unwrap(),
            )
            .expect("event"),
        ];
        let descriptor = timeline_descriptor(&events);

        match &descriptor.y_axis {
            AxisDescriptor::Numeric {
                range,
                range_labels,
                ..
            } => {
                assert_eq!(*range, (6.0 * 3600.0, 8.0 * 3600.0));
                assert_eq!(range_labels.0, "6h 00m");
                assert_eq!(range_labels.1, "8h 00m");
            }
            other => panic!("unexpected y axis: {other:?}"),
        }
        let points = &descriptor.series[0].data_points;
        assert_eq!(points.len(), 2);
        assert_eq!(
            points[0].label.as_deref(),
            Some("Clock in: 8:00 AM, Clock out: 2:00 PM")
        );
    }

    #[test]
    fn sales_descriptor_labels_threshold_side() {
        let day = NaiveDate::from_ymd_opt(2022, 6, 1).expect("date");
        let descriptor = sales_descriptor(
            &[SalePoint::new(day, 120), SalePoint::new(day, 180)],
            150.0,
        );
        let labels: Vec<_> = descriptor.series[0]
            .data_points
            .iter()
            .filter_map(|point| point.label.clone())
            .collect();
        assert_eq!(labels, vec!["120 sold. Below threshold", "180 sold. Above threshold"]);
        assert_eq!(descriptor.summary.as_deref(), Some("Sale threshold: 150"));
    }
}
