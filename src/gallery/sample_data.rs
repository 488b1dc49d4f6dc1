//! Fixed data sets shown by the gallery.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};

use crate::core::{SalePoint, TimeDomain, TimelineEvent};
use crate::error::{ChartError, ChartResult};

fn date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> ChartResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or_else(|| {
            ChartError::InvalidData(format!(
                "invalid sample date {year}-{month:02}-{day:02} {hour:02}:{minute:02}"
            ))
        })
}

fn shift(
    category: &str,
    day: u32,
    (in_hour, in_minute): (u32, u32),
    (out_hour, out_minute): (u32, u32),
) -> ChartResult<TimelineEvent> {
    TimelineEvent::new(
        category,
        date(2022, 6, day, in_hour, in_minute)?,
        date(2022, 6, day, out_hour, out_minute)?,
    )
}

/// Store opening hours on Monday, June 13, 2022.
pub fn opening_hours() -> ChartResult<TimeDomain> {
    TimeDomain::new(date(2022, 6, 13, 5, 0)?, date(2022, 6, 13, 22, 0)?)
}

/// Monday morning through Saturday evening of week 24, 2022.
pub fn work_week() -> ChartResult<TimeDomain> {
    TimeDomain::new(date(2022, 6, 13, 5, 0)?, date(2022, 6, 18, 20, 0)?)
}

pub fn time_sheet_last_day() -> ChartResult<Vec<TimelineEvent>> {
    Ok(vec![
        shift("Counter", 13, (5, 30), (9, 30))?,
        shift("Bread", 13, (8, 0), (14, 0))?,
        shift("Butchery", 13, (9, 0), (17, 0))?,
        shift("Vegetables", 13, (13, 0), (21, 30))?,
    ])
}

pub fn time_sheet_last_week() -> ChartResult<Vec<TimelineEvent>> {
    Ok(vec![
        shift("Counter", 13, (5, 30), (9, 30))?,
        shift("Bread", 13, (8, 0), (14, 0))?,
        shift("Butchery", 13, (9, 0), (17, 0))?,
        shift("Vegetables", 13, (13, 0), (21, 30))?,
        shift("Bread", 14, (6, 0), (12, 15))?,
        shift("Counter", 14, (12, 0), (20, 0))?,
        shift("Butchery", 15, (7, 45), (16, 0))?,
        shift("Vegetables", 15, (10, 0), (18, 30))?,
        shift("Counter", 16, (5, 0), (13, 0))?,
        shift("Bread", 16, (13, 30), (19, 45))?,
        shift("Butchery", 17, (8, 0), (16, 30))?,
        shift("Vegetables", 18, (9, 15), (19, 0))?,
    ])
}

/// Thirty consecutive days of sales ending Sunday, June 12, 2022.
pub fn sales_last_30_days() -> ChartResult<Vec<SalePoint>> {
    const WEEKLY_BASE: [u32; 7] = [95, 140, 180, 205, 160, 120, 235];

    let last_day = NaiveDate::from_ymd_opt(2022, 6, 12)
        .ok_or_else(|| ChartError::InvalidData("invalid sample sales date".to_owned()))?;
    let first_day = last_day - TimeDelta::days(29);

    (0..30u32)
        .map(|offset| {
            let day = first_day
                .checked_add_signed(TimeDelta::days(i64::from(offset)))
                .ok_or_else(|| ChartError::InvalidData("sales date overflow".to_owned()))?;
            let sales = WEEKLY_BASE[(offset % 7) as usize] + (offset * 13) % 40;
            Ok(SalePoint::new(day, sales))
        })
        .collect()
}
