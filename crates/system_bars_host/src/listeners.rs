//! Ordered change-listener collection and caller-owned subscription handles.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use system_bars_contract::{BarSubscriptionToken, SystemBarInfo};

use crate::service::BarChangeHandler;

#[derive(Clone, Default)]
/// Shared ordered collection of registered bar-change listeners.
///
/// Cloning shares the same underlying registrations. Emission walks a snapshot of the
/// collection, so a handler may subscribe or unsubscribe mid-dispatch without disturbing
/// the in-flight delivery.
pub struct BarChangeListeners {
    entries: Rc<RefCell<Vec<(BarSubscriptionToken, BarChangeHandler)>>>,
    next_token: Rc<Cell<u64>>,
}

impl BarChangeListeners {
    /// Registers a handler and returns its caller-owned subscription.
    pub fn subscribe(&self, handler: BarChangeHandler) -> BarSubscription {
        let token = BarSubscriptionToken(self.next_token.get());
        self.next_token.set(token.0 + 1);
        self.entries.borrow_mut().push((token, handler));
        BarSubscription {
            token,
            listeners: self.clone(),
        }
    }

    /// Removes one registration; an absent token is a no-op.
    pub fn remove(&self, token: BarSubscriptionToken) {
        self.entries.borrow_mut().retain(|(t, _)| *t != token);
    }

    /// Removes every registration and returns how many were present.
    pub fn remove_all(&self) -> usize {
        let mut entries = self.entries.borrow_mut();
        let removed = entries.len();
        entries.clear();
        removed
    }

    /// Invokes every registered handler with `info`, in registration order.
    pub fn emit(&self, info: &SystemBarInfo) {
        let snapshot = self.entries.borrow().clone();
        for (_, handler) in snapshot {
            handler(info);
        }
    }

    /// Returns the number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl std::fmt::Debug for BarChangeListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarChangeListeners")
            .field("len", &self.len())
            .finish()
    }
}

/// Caller-owned handle for one registered change listener.
///
/// Dropping the handle removes exactly its own registration. A handle that outlives a bulk
/// [`BarChangeListeners::remove_all`] is stale; dropping it is harmless.
#[derive(Debug)]
pub struct BarSubscription {
    token: BarSubscriptionToken,
    listeners: BarChangeListeners,
}

impl BarSubscription {
    /// Returns the registration token backing this subscription.
    pub fn token(&self) -> BarSubscriptionToken {
        self.token
    }

    /// Removes the registration immediately; dropping the handle does the same.
    pub fn unsubscribe(&self) {
        self.listeners.remove(self.token);
    }
}

impl Drop for BarSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
