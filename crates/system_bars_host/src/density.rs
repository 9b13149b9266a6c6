//! Pixel-density conversion between physical pixels and device-independent units.

use system_bars_contract::SystemBarInfo;

/// Display pixel-density scale factor usable for unit conversion.
///
/// Construction repairs a degenerate factor (non-positive or non-finite) to `1.0`, so
/// conversions never divide by zero and a broken host report degrades to pass-through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f64);

impl Density {
    /// Creates a density from a raw host-reported factor.
    pub fn new(factor: f64) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            Self(1.0)
        }
    }

    /// Returns the scale factor.
    pub fn factor(self) -> f64 {
        self.0
    }

    /// Converts physical pixels to device-independent units, rounded to the nearest whole
    /// unit.
    pub fn dp_from_px(self, px: f64) -> f64 {
        (px / self.0).round()
    }

    /// Converts device-independent units to physical pixels, rounded to the nearest whole
    /// pixel.
    pub fn px_from_dp(self, dp: f64) -> f64 {
        (dp * self.0).round()
    }

    /// Builds a bar snapshot from raw physical-pixel measurements.
    ///
    /// The result is sanitized: a negative or non-finite measurement clamps to zero.
    pub fn snapshot_from_physical(
        self,
        bar_height_px: f64,
        device_height_px: f64,
        is_bar_visible: bool,
        is_gesture_navigation: bool,
    ) -> SystemBarInfo {
        SystemBarInfo {
            bar_height: self.dp_from_px(bar_height_px),
            device_height: self.dp_from_px(device_height_px),
            density: self.0,
            is_bar_visible,
            is_gesture_navigation,
        }
        .sanitized()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<SystemBarInfo> for Density {
    fn from(info: SystemBarInfo) -> Self {
        Self::new(info.density)
    }
}
