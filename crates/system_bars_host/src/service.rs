//! System-bar service contract and baseline host implementations.

use std::{future::Future, pin::Pin, rc::Rc};

use system_bars_contract::{BarServiceError, SystemBarInfo};
use tracing::debug;

use crate::listeners::{BarChangeListeners, BarSubscription};

/// Object-safe boxed future used by [`SystemBarsService`] async methods.
pub type SystemBarsFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Change callback invoked once per detected bar-state transition.
pub type BarChangeHandler = Rc<dyn Fn(&SystemBarInfo)>;

/// Host service exposing system-bar geometry and change notification.
pub trait SystemBarsService {
    /// Resolves one complete snapshot of the current bar state.
    ///
    /// The snapshot reflects host state at resolution time; repeated calls are independent
    /// reads with no side effects. Fails with a platform-unavailable error when the host
    /// cannot be queried from the current context.
    fn bar_info<'a>(&'a self) -> SystemBarsFuture<'a, Result<SystemBarInfo, BarServiceError>>;

    /// Registers a handler for the change event identified on the wire by
    /// [`system_bars_contract::BAR_INFO_CHANGED_EVENT`] and resolves with its caller-owned
    /// subscription.
    ///
    /// The handler runs zero or more times, once per detected change, in the order changes
    /// occur. Dropping the returned subscription removes the registration. Fails with a
    /// platform-unavailable error instead of handing out a subscription that could never
    /// fire.
    fn subscribe<'a>(
        &'a self,
        handler: BarChangeHandler,
    ) -> SystemBarsFuture<'a, Result<BarSubscription, BarServiceError>>;

    /// Removes every registered change handler.
    ///
    /// Always succeeds; a call with no active listeners is a no-op.
    fn unsubscribe_all<'a>(&'a self) -> SystemBarsFuture<'a, ()>;
}

#[derive(Debug, Clone, Default)]
/// Fallback service for hosts without a reserved system-bar region (browser targets and
/// desktop shells).
///
/// Reports a constant empty snapshot, accepts listener registrations it will never fire,
/// and never fails.
pub struct NoopSystemBars {
    listeners: BarChangeListeners,
}

impl SystemBarsService for NoopSystemBars {
    fn bar_info<'a>(&'a self) -> SystemBarsFuture<'a, Result<SystemBarInfo, BarServiceError>> {
        Box::pin(async { Ok(SystemBarInfo::fallback()) })
    }

    fn subscribe<'a>(
        &'a self,
        handler: BarChangeHandler,
    ) -> SystemBarsFuture<'a, Result<BarSubscription, BarServiceError>> {
        Box::pin(async move {
            let subscription = self.listeners.subscribe(handler);
            debug!(
                token = subscription.token().0,
                "registered bar listener on a host without a change source"
            );
            Ok(subscription)
        })
    }

    fn unsubscribe_all<'a>(&'a self) -> SystemBarsFuture<'a, ()> {
        Box::pin(async move {
            let removed = self.listeners.remove_all();
            debug!(removed, "cleared bar listeners");
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Service standing in when a host runtime is expected but not attached.
///
/// Rejects queries and subscriptions instead of handing out stale snapshots or dead
/// handles; clearing listeners still succeeds because there is nothing to clear.
pub struct UnavailableSystemBars;

impl UnavailableSystemBars {
    fn unavailable() -> BarServiceError {
        BarServiceError::platform_unavailable(
            "system-bar measurements are only available when a host runtime is attached",
        )
    }
}

impl SystemBarsService for UnavailableSystemBars {
    fn bar_info<'a>(&'a self) -> SystemBarsFuture<'a, Result<SystemBarInfo, BarServiceError>> {
        Box::pin(async { Err(Self::unavailable()) })
    }

    fn subscribe<'a>(
        &'a self,
        _handler: BarChangeHandler,
    ) -> SystemBarsFuture<'a, Result<BarSubscription, BarServiceError>> {
        Box::pin(async { Err(Self::unavailable()) })
    }

    fn unsubscribe_all<'a>(&'a self) -> SystemBarsFuture<'a, ()> {
        Box::pin(async {})
    }
}
