//! Compile-time plugin registry mapping registration identifiers to service factories.

use std::rc::Rc;

use system_bars_contract::{BarServiceError, CANONICAL_PLUGIN_NAME, LEGACY_PLUGIN_NAME};
use tracing::debug;

use crate::service::{NoopSystemBars, SystemBarsService};

/// Factory constructing one service implementation.
pub type BarPluginFactory = fn() -> Rc<dyn SystemBarsService>;

/// One named service implementation available to hosts.
#[derive(Debug, Clone, Copy)]
pub struct BarPluginEntry {
    /// Stable registration identifier hosts resolve by.
    pub name: &'static str,
    /// Human-readable summary shown in diagnostics.
    pub description: &'static str,
    /// Factory constructing the implementation.
    pub factory: BarPluginFactory,
}

fn noop_system_bars() -> Rc<dyn SystemBarsService> {
    Rc::new(NoopSystemBars::default())
}

/// Implementations registered before any host-specific wiring runs.
///
/// Both contract revision names resolve to the fallback service, so a host that never
/// overrides them still serves the full contract.
pub const BUILTIN_BAR_PLUGINS: &[BarPluginEntry] = &[
    BarPluginEntry {
        name: CANONICAL_PLUGIN_NAME,
        description: "Fallback system-bar service reporting an empty bar",
        factory: noop_system_bars,
    },
    BarPluginEntry {
        name: LEGACY_PLUGIN_NAME,
        description: "Deprecated registration name resolving to the fallback service",
        factory: noop_system_bars,
    },
];

/// Registry resolving registration identifiers to service implementations.
///
/// Hosts seed it with the builtin table, override the entries for platforms they actually
/// measure, and resolve once at startup; callers keep the returned handle and clone it
/// where needed.
#[derive(Debug, Clone)]
pub struct SystemBarsRegistry {
    entries: Vec<BarPluginEntry>,
}

impl SystemBarsRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a registry seeded with [`BUILTIN_BAR_PLUGINS`].
    pub fn with_builtins() -> Self {
        Self {
            entries: BUILTIN_BAR_PLUGINS.to_vec(),
        }
    }

    /// Registers an implementation, replacing any entry with the same name.
    pub fn register(&mut self, entry: BarPluginEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == entry.name) {
            debug!(name = entry.name, "replacing registered bar plugin");
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    /// Instantiates the implementation registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns a platform-unavailable error naming `name` when nothing is registered under
    /// it.
    pub fn resolve(&self, name: &str) -> Result<Rc<dyn SystemBarsService>, BarServiceError> {
        let entry = self.entries.iter().find(|e| e.name == name).ok_or_else(|| {
            let registered = self.registered_names();
            BarServiceError::platform_unavailable(format!(
                "no system-bar implementation registered under '{name}' (registered: {registered})"
            ))
        })?;
        Ok((entry.factory)())
    }

    /// Resolves the active implementation: the canonical registration name first, then the
    /// deprecated one.
    ///
    /// # Errors
    ///
    /// Returns a platform-unavailable error naming both revision identifiers when neither
    /// is registered.
    pub fn resolve_active(&self) -> Result<Rc<dyn SystemBarsService>, BarServiceError> {
        self.resolve(CANONICAL_PLUGIN_NAME)
            .or_else(|_| self.resolve(LEGACY_PLUGIN_NAME))
            .map_err(|_| {
                let registered = self.registered_names();
                BarServiceError::platform_unavailable(format!(
                    "no system-bar implementation registered under \
                     '{CANONICAL_PLUGIN_NAME}' or '{LEGACY_PLUGIN_NAME}' \
                     (registered: {registered})"
                ))
            })
    }

    /// Lists registered names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    fn registered_names(&self) -> String {
        if self.entries.is_empty() {
            "none".to_string()
        } else {
            self.names().join(", ")
        }
    }
}

impl Default for SystemBarsRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
