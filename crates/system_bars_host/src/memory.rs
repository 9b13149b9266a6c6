//! Drivable in-memory system-bar host for tests and simulated runtimes.

use std::{cell::RefCell, rc::Rc};

use system_bars_contract::{BarServiceError, SystemBarInfo};
use tracing::{debug, warn};

use crate::{
    change::BarChangeTracker,
    listeners::{BarChangeListeners, BarSubscription},
    service::{BarChangeHandler, SystemBarsFuture, SystemBarsService},
};

#[derive(Debug, Clone, Default)]
/// In-memory service standing in for a native measurement host.
///
/// A change source drives it through [`MemorySystemBars::publish`]; subscribers observe the
/// same ordering guarantees a real host provides. Cloning shares the same state, so a
/// runtime can hand clones to the registry while keeping one for publishing.
pub struct MemorySystemBars {
    current: Rc<RefCell<SystemBarInfo>>,
    listeners: BarChangeListeners,
    tracker: BarChangeTracker,
}

impl MemorySystemBars {
    /// Feeds one host measurement into the service.
    ///
    /// The snapshot is sanitized, compared against the last published state, stored as
    /// current, and dispatched to every listener in registration order before this method
    /// returns. Returns whether a change was dispatched; identical consecutive snapshots
    /// are suppressed.
    pub fn publish(&self, info: SystemBarInfo) -> bool {
        let sanitized = info.sanitized();
        if sanitized != info {
            warn!(?info, "clamped out-of-range bar measurements before publishing");
        }
        if !self.tracker.observe(&sanitized) {
            debug!("bar state unchanged; suppressing duplicate dispatch");
            return false;
        }
        *self.current.borrow_mut() = sanitized;
        debug!(
            listener_count = self.listeners.len(),
            bar_height = sanitized.bar_height,
            visible = sanitized.is_bar_visible,
            "dispatching bar change"
        );
        self.listeners.emit(&sanitized);
        true
    }
}

impl SystemBarsService for MemorySystemBars {
    fn bar_info<'a>(&'a self) -> SystemBarsFuture<'a, Result<SystemBarInfo, BarServiceError>> {
        Box::pin(async move { Ok(*self.current.borrow()) })
    }

    fn subscribe<'a>(
        &'a self,
        handler: BarChangeHandler,
    ) -> SystemBarsFuture<'a, Result<BarSubscription, BarServiceError>> {
        Box::pin(async move { Ok(self.listeners.subscribe(handler)) })
    }

    fn unsubscribe_all<'a>(&'a self) -> SystemBarsFuture<'a, ()> {
        Box::pin(async move {
            let removed = self.listeners.remove_all();
            debug!(removed, "cleared bar listeners");
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn recording_handler(log: &Rc<RefCell<Vec<(u32, f64)>>>, id: u32) -> BarChangeHandler {
        let log = Rc::clone(log);
        Rc::new(move |info: &SystemBarInfo| {
            log.borrow_mut().push((id, info.bar_height));
        })
    }

    #[test]
    fn publish_dispatches_in_registration_order_before_returning() {
        let bars = MemorySystemBars::default();
        let bars_obj: &dyn SystemBarsService = &bars;
        let log = Rc::new(RefCell::new(Vec::new()));

        let _first = block_on(bars_obj.subscribe(recording_handler(&log, 1))).expect("subscribe");
        let _second = block_on(bars_obj.subscribe(recording_handler(&log, 2))).expect("subscribe");
        let _third = block_on(bars_obj.subscribe(recording_handler(&log, 3))).expect("subscribe");

        assert!(bars.publish(SystemBarInfo::mock()));
        assert_eq!(
            log.borrow().as_slice(),
            &[(1, 20.0), (2, 20.0), (3, 20.0)]
        );
    }

    #[test]
    fn publish_suppresses_identical_consecutive_snapshots() {
        let bars = MemorySystemBars::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let _subscription =
            block_on(bars.subscribe(recording_handler(&log, 1))).expect("subscribe");

        assert!(bars.publish(SystemBarInfo::mock()));
        assert!(!bars.publish(SystemBarInfo::mock()));
        assert_eq!(log.borrow().len(), 1);

        let hidden = SystemBarInfo {
            is_bar_visible: false,
            bar_height: 0.0,
            ..SystemBarInfo::mock()
        };
        assert!(bars.publish(hidden));
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn publish_sanitizes_measurements_before_dispatch() {
        let bars = MemorySystemBars::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let _subscription =
            block_on(bars.subscribe(recording_handler(&log, 1))).expect("subscribe");

        let raw = SystemBarInfo {
            bar_height: -48.0,
            device_height: f64::NAN,
            density: 0.0,
            is_bar_visible: true,
            is_gesture_navigation: false,
        };
        assert!(bars.publish(raw));

        assert_eq!(log.borrow().as_slice(), &[(1, 0.0)]);
        let info = block_on(bars.bar_info()).expect("bar info");
        assert_eq!(info.device_height, 0.0);
        assert_eq!(info.density, 1.0);
        assert!(info.is_bar_visible);
    }

    #[test]
    fn bar_info_reflects_the_latest_published_snapshot() {
        let bars = MemorySystemBars::default();
        let bars_obj: &dyn SystemBarsService = &bars;

        assert_eq!(
            block_on(bars_obj.bar_info()).expect("bar info"),
            SystemBarInfo::fallback()
        );

        bars.publish(SystemBarInfo::mock());
        assert_eq!(
            block_on(bars_obj.bar_info()).expect("bar info"),
            SystemBarInfo::mock()
        );
    }

    #[test]
    fn unsubscribe_all_prevents_future_delivery() {
        let bars = MemorySystemBars::default();
        let bars_obj: &dyn SystemBarsService = &bars;
        let log = Rc::new(RefCell::new(Vec::new()));

        let _subscription =
            block_on(bars_obj.subscribe(recording_handler(&log, 1))).expect("subscribe");
        block_on(bars_obj.unsubscribe_all());

        assert!(bars.publish(SystemBarInfo::mock()));
        assert!(log.borrow().is_empty());
    }
}
