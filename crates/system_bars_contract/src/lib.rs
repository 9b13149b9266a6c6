//! Shared system-bar contracts used by host implementations, the plugin registry, and
//! application-facing bindings.
//!
//! This crate is intentionally runtime-agnostic. It defines the serializable bar snapshot,
//! the deprecated wire shapes older hosts still speak, registration identifiers, subscription
//! tokens, and the service error surface without depending on host runtime internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

/// Registration identifier of the current contract revision.
pub const CANONICAL_PLUGIN_NAME: &str = "NavigationBarInfo";
/// Registration identifier of the deprecated query-only contract revision.
pub const LEGACY_PLUGIN_NAME: &str = "SystemBars";
/// Change-event name delivered to subscribers.
pub const BAR_INFO_CHANGED_EVENT: &str = "barInfoChanged";
/// Change-event name emitted by older hosts; kept as a deprecated alias.
pub const LEGACY_BAR_INFO_CHANGED_EVENT: &str = "navigationBarInfoChanged";

/// Immutable snapshot of system-bar geometry and visibility.
///
/// Measurements are device-independent units (`px / density`). A snapshot is complete and
/// internally consistent at the moment it is produced and is never updated in place; hosts
/// publish a fresh value instead.
///
/// Deserialization accepts the field names of both earlier contract revisions as aliases, so
/// payloads produced by older hosts decode into this canonical shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemBarInfo {
    /// Bar height, zero whenever the bar occupies no screen space.
    #[serde(alias = "heightInDp", alias = "navigationBarHeight")]
    pub bar_height: f64,
    /// Total device display height in the same units.
    #[serde(alias = "navigationBarDeviceHeight")]
    pub device_height: f64,
    /// Display pixel-density scale factor, always positive.
    pub density: f64,
    /// Whether the bar currently occupies screen space.
    #[serde(alias = "isNavigationBarVisible")]
    pub is_bar_visible: bool,
    /// Whether the device navigates by gestures instead of a button bar.
    pub is_gesture_navigation: bool,
}

impl SystemBarInfo {
    /// Snapshot reported by hosts without a reserved system-bar region.
    pub const fn fallback() -> Self {
        Self {
            bar_height: 0.0,
            device_height: 0.0,
            density: 1.0,
            is_bar_visible: false,
            is_gesture_navigation: false,
        }
    }

    /// Representative snapshot used by simulated hosts: a visible 20-unit bar with
    /// three-button navigation.
    pub const fn mock() -> Self {
        Self {
            bar_height: 20.0,
            device_height: 20.0,
            density: 1.0,
            is_bar_visible: true,
            is_gesture_navigation: false,
        }
    }

    /// Returns a copy with every measurement forced back inside the contract invariants:
    /// negative or non-finite heights become `0.0`, a non-positive or non-finite density
    /// becomes `1.0`.
    ///
    /// Raw window metrics can report transient out-of-range values mid-rotation, so hosts
    /// sanitize before publishing.
    pub fn sanitized(self) -> Self {
        Self {
            bar_height: clamp_measurement(self.bar_height),
            device_height: clamp_measurement(self.device_height),
            density: if self.density.is_finite() && self.density > 0.0 {
                self.density
            } else {
                1.0
            },
            ..self
        }
    }
}

impl Default for SystemBarInfo {
    fn default() -> Self {
        Self::fallback()
    }
}

fn clamp_measurement(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Wire shape of the deprecated `SystemBars` contract revision.
///
/// Hosts still speaking that revision serialize snapshots through this type; everything else
/// uses [`SystemBarInfo`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySystemBarInfo {
    /// Bar height in device-independent units.
    pub navigation_bar_height: f64,
    /// Device display height in device-independent units.
    pub navigation_bar_device_height: f64,
    /// Display pixel-density scale factor.
    pub density: f64,
    /// Whether the bar currently occupies screen space.
    pub is_navigation_bar_visible: bool,
    /// Whether the device navigates by gestures instead of a button bar.
    pub is_gesture_navigation: bool,
}

impl From<SystemBarInfo> for LegacySystemBarInfo {
    fn from(info: SystemBarInfo) -> Self {
        Self {
            navigation_bar_height: info.bar_height,
            navigation_bar_device_height: info.device_height,
            density: info.density,
            is_navigation_bar_visible: info.is_bar_visible,
            is_gesture_navigation: info.is_gesture_navigation,
        }
    }
}

impl From<LegacySystemBarInfo> for SystemBarInfo {
    fn from(legacy: LegacySystemBarInfo) -> Self {
        Self {
            bar_height: legacy.navigation_bar_height,
            device_height: legacy.navigation_bar_device_height,
            density: legacy.density,
            is_bar_visible: legacy.is_navigation_bar_visible,
            is_gesture_navigation: legacy.is_gesture_navigation,
        }
    }
}

/// Opaque registration token identifying one change-event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BarSubscriptionToken(pub u64);

/// Structured service error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarServiceErrorCode {
    /// The host platform cannot be queried from the current context.
    PlatformUnavailable,
}

/// Error emitted when a host implementation cannot serve the contract.
///
/// Surfaced to the caller as-is; implementations never retry internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarServiceError {
    /// Error category.
    pub code: BarServiceErrorCode,
    /// Human-readable message naming the missing host context.
    pub message: String,
}

impl BarServiceError {
    /// Creates a platform-unavailable error.
    pub fn platform_unavailable(message: impl Into<String>) -> Self {
        Self {
            code: BarServiceErrorCode::PlatformUnavailable,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for BarServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            BarServiceErrorCode::PlatformUnavailable => {
                write!(f, "platform unavailable: {}", self.message)
            }
        }
    }
}

impl std::error::Error for BarServiceError {}
