//! Host-side system-bar services: the async contract, listener machinery, change tracking,
//! and the compile-time plugin registry.
//!
//! This crate is the API-first boundary for bar state. Application code resolves an
//! implementation through [`SystemBarsRegistry`] once at startup and talks to it purely
//! through [`SystemBarsService`]; native measurement hosts live behind that trait and stay
//! out of application crates.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod change;
pub mod density;
pub mod listeners;
pub mod memory;
pub mod registry;
pub mod service;

pub use change::BarChangeTracker;
pub use density::Density;
pub use listeners::{BarChangeListeners, BarSubscription};
pub use memory::MemorySystemBars;
pub use registry::{BarPluginEntry, BarPluginFactory, SystemBarsRegistry, BUILTIN_BAR_PLUGINS};
pub use service::{
    BarChangeHandler, NoopSystemBars, SystemBarsFuture, SystemBarsService, UnavailableSystemBars,
};
