use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Range accepted by threshold controls.
pub const THRESHOLD_RANGE: RangeInclusive<f64> = 0.0..=275.0;

/// Units sold on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalePoint {
    pub day: NaiveDate,
    pub sales: u32,
}

impl SalePoint {
    #[must_use]
    pub fn new(day: NaiveDate, sales: u32) -> Self {
        Self { day, sales }
    }

    /// Strictly above the integer part of `threshold`.
    #[must_use]
    pub fn is_above(self, threshold: f64) -> bool {
        i64::from(self.sales) > threshold.trunc() as i64
    }
}
