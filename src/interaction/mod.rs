use serde::{Deserialize, Serialize};

use crate::core::TimelineEvent;

/// Single-selection state of an event timeline.
///
/// `NoSelection` is the initial state. Only hit-tests and event-list
/// replacement move between states.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    NoSelection,
    Selected {
        /// Position of the event in the chart's input order.
        index: usize,
        event: TimelineEvent,
    },
}

/// Whether a selection update changed what the overlay shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionChange {
    Unchanged,
    Changed,
}

impl SelectionState {
    #[must_use]
    pub fn selected(&self) -> Option<&TimelineEvent> {
        match self {
            Self::NoSelection => None,
            Self::Selected { event, .. } => Some(event),
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::NoSelection => None,
            Self::Selected { index, .. } => Some(*index),
        }
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }

    /// Applies the outcome of a hit-test: a hit selects, a miss clears.
    pub fn apply_hit(&mut self, hit: Option<(usize, &TimelineEvent)>) -> SelectionChange {
        let next = match hit {
            Some((index, event)) => Self::Selected {
                index,
                event: event.clone(),
            },
            None => Self::NoSelection,
        };
        if *self == next {
            return SelectionChange::Unchanged;
        }
        *self = next;
        SelectionChange::Changed
    }

    pub fn clear(&mut self) -> SelectionChange {
        self.apply_hit(None)
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectionChange, SelectionState};
    use crate::core::TimelineEvent;
    use chrono::{TimeZone, Utc};

    fn bread() -> TimelineEvent {
        TimelineEvent::new(
            "Bread",
            Utc.with_ymd_and_hms(2022, 6, 13, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2022, 6, 13, 14, 0, 0).unwrap(),
        )
        .expect("event")
    }

    #[test]
    fn hit_selects_and_miss_clears() {
        let event = bread();
        let mut state = SelectionState::default();
        assert!(!state.is_selected());

        assert_eq!(state.apply_hit(Some((0, &event))), SelectionChange::Changed);
        assert_eq!(state.selected(), Some(&event));
        assert_eq!(state.selected_index(), Some(0));

        assert_eq!(state.apply_hit(None), SelectionChange::Changed);
        assert_eq!(state, SelectionState::NoSelection);
    }

    #[test]
    fn repeated_hit_on_same_event_is_unchanged() {
        let event = bread();
        let mut state = SelectionState::default();
        state.apply_hit(Some((0, &event)));
        assert_eq!(
            state.apply_hit(Some((0, &event))),
            SelectionChange::Unchanged
        );
        assert_eq!(state.clear(), SelectionChange::Changed);
        assert_eq!(state.clear(), SelectionChange::Unchanged);
    }
}
