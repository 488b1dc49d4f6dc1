use indexmap::IndexSet;

use crate::core::TimelineEvent;

/// Row assignment for category lanes.
///
/// Lanes follow an explicit category order when one is supplied, then any
/// remaining categories in first-seen input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaneLayout {
    categories: IndexSet<String>,
}

impl LaneLayout {
    #[must_use]
    pub fn from_events(events: &[TimelineEvent], explicit_order: Option<&[String]>) -> Self {
        let mut categories = IndexSet::new();
        if let Some(order) = explicit_order {
            for category in order {
                categories.insert(category.clone());
            }
        }
        for event in events {
            if !categories.contains(event.category()) {
                categories.insert(event.category().to_owned());
            }
        }
        Self { categories }
    }

    #[must_use]
    pub fn lane_of(&self, category: &str) -> Option<usize> {
        self.categories.get_index_of(category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::LaneLayout;
    use crate::core::TimelineEvent;
    use chrono::{TimeZone, Utc};

    fn event(category: &str, hour: u32) -> TimelineEvent {
        TimelineEvent::new(
            category,
            Utc.with_ymd_and_hms(2022, 6, 13, hour, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2022, 6, 13, hour + 1, 0, 0).unwrap(),
        )
        .expect("event")
    }

    #[test]
    fn lanes_follow_first_seen_order() {
        let events = vec![
            event("Counter", 6),
            event("Bread", 7),
            event("Counter", 9),
            event("Vegetables", 10),
        ];
        let lanes = LaneLayout::from_events(&events, None);
        assert_eq!(
            lanes.categories().collect::<Vec<_>>(),
            vec!["Counter", "Bread", "Vegetables"]
        );
        assert_eq!(lanes.lane_of("Bread"), Some(1));
        assert_eq!(lanes.lane_of("Butchery"), None);
    }

    #[test]
    fn explicit_order_wins_and_unlisted_categories_are_appended() {
        let events = vec![event("Counter", 6), event("Bread", 7), event("Butchery", 8)];
        let order = vec!["Bread".to_owned(), "Vegetables".to_owned()];
        let lanes = LaneLayout::from_events(&events, Some(&order));
        assert_eq!(
            lanes.categories().collect::<Vec<_>>(),
            vec!["Bread", "Vegetables", "Counter", "Butchery"]
        );
    }
}
