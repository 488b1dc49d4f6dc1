use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartCategory {
    /// Filter value meaning "no filter"; never a section of its own.
    All,
    Bar,
}

impl ChartCategory {
    pub const ALL_CASES: [Self; 2] = [Self::All, Self::Bar];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Bar => "bar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    SingleBarThreshold,
    TimeSheetBar,
}

impl ChartType {
    pub const ALL_CASES: [Self; 2] = [Self::SingleBarThreshold, Self::TimeSheetBar];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SingleBarThreshold => "singleBarThreshold",
            Self::TimeSheetBar => "timeSheetBar",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SingleBarThreshold => "Single Bar Threshold",
            Self::TimeSheetBar => "Time Sheet Bar",
        }
    }

    #[must_use]
    pub const fn category(self) -> ChartCategory {
        match self {
            Self::SingleBarThreshold | Self::TimeSheetBar => ChartCategory::Bar,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::ALL_CASES
            .into_iter()
            .find(|chart| chart.id() == id)
            .ok_or_else(|| ChartError::UnknownChartType(id.to_owned()))
    }
}

/// Section categories shown for a filter; `All` expands to every real category.
#[must_use]
pub fn displayed_categories(filter: ChartCategory) -> Vec<ChartCategory> {
    ChartCategory::ALL_CASES
        .into_iter()
        .filter(|category| match filter {
            ChartCategory::All => *category != ChartCategory::All,
            _ => *category == filter,
        })
        .collect()
}

pub fn chart_types_in(category: ChartCategory) -> impl Iterator<Item = ChartType> {
    ChartType::ALL_CASES
        .into_iter()
        .filter(move |chart| chart.category() == category)
}

#[cfg(test)]
mod tests {
    use super::{ChartCategory, ChartType, chart_types_in, displayed_categories};
    use crate::error::ChartError;

    #[test]
    fn ids_round_trip_and_unknown_ids_fail() {
        for chart in ChartType::ALL_CASES {
            assert_eq!(chart.id().parse::<ChartType>().expect("known id"), chart);
        }
        let err = "pieChart".parse::<ChartType>().expect_err("unknown id");
        assert!(matches!(err, ChartError::UnknownChartType(id) if id == "pieChart"));
    }

    #[test]
    fn all_filter_never_lists_itself() {
        assert_eq!(displayed_categories(ChartCategory::All), vec![ChartCategory::Bar]);
        assert_eq!(displayed_categories(ChartCategory::Bar), vec![ChartCategory::Bar]);
    }

    #[test]
    fn bar_category_holds_both_charts() {
        let charts: Vec<_> = chart_types_in(ChartCategory::Bar).collect();
        assert_eq!(
            charts,
            vec![ChartType::SingleBarThreshold, ChartType::TimeSheetBar]
        );
        assert_eq!(chart_types_in(ChartCategory::All).count(), 0);
    }
}
