//! Duplicate suppression for host-published bar snapshots.

use std::{cell::RefCell, rc::Rc};

use system_bars_contract::SystemBarInfo;

#[derive(Debug, Clone, Default)]
/// Tracks the last snapshot a change source published and flags real transitions.
///
/// Cloning shares the same tracking state.
pub struct BarChangeTracker {
    last_known: Rc<RefCell<Option<SystemBarInfo>>>,
}

impl BarChangeTracker {
    /// Records `info` and returns whether it differs from the previously observed snapshot.
    ///
    /// The first observation always counts as a change.
    pub fn observe(&self, info: &SystemBarInfo) -> bool {
        let mut last = self.last_known.borrow_mut();
        let changed = last.as_ref() != Some(info);
        *last = Some(*info);
        changed
    }

    /// Returns the most recently observed snapshot, if any.
    pub fn last_known(&self) -> Option<SystemBarInfo> {
        *self.last_known.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_counts_as_a_change() {
        let tracker = BarChangeTracker::default();
        assert_eq!(tracker.last_known(), None);
        assert!(tracker.observe(&SystemBarInfo::fallback()));
        assert_eq!(tracker.last_known(), Some(SystemBarInfo::fallback()));
    }

    #[test]
    fn identical_consecutive_snapshots_are_suppressed() {
        let tracker = BarChangeTracker::default();
        assert!(tracker.observe(&SystemBarInfo::mock()));
        assert!(!tracker.observe(&SystemBarInfo::mock()));
        assert!(!tracker.observe(&SystemBarInfo::mock()));
    }

    #[test]
    fn any_field_transition_counts_as_a_change() {
        let tracker = BarChangeTracker::default();
        let base = SystemBarInfo::mock();
        assert!(tracker.observe(&base));

        let hidden = SystemBarInfo {
            is_bar_visible: false,
            ..base
        };
        assert!(tracker.observe(&hidden));

        let denser = SystemBarInfo {
            density: 2.0,
            ..hidden
        };
        assert!(tracker.observe(&denser));
        assert_eq!(tracker.last_known(), Some(denser));
    }
}
