// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for overlay tuning values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Settle Delay Bounds
// =============================================================================

/// Settle delay bounds (0 to 5000 milliseconds).
pub mod settle_bounds {
    /// Minimum settle delay in milliseconds.
    pub const MIN_MS: u32 = 0;
    /// Maximum settle delay in milliseconds.
    pub const MAX_MS: u32 = 5_000;
    /// Default settle delay in milliseconds.
    pub const DEFAULT_MS: u32 = 500;
}

// =============================================================================
// SettleDelay
// =============================================================================

/// Wait between the host reporting "PiP exited" and the overlay re-applying
/// immersive window state.
///
/// The host reports the exit before the window geometry has stabilized;
/// flags applied earlier are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleDelay(u32);

impl SettleDelay {
    /// Creates a new settle delay, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u32) -> Self {
        Self(millis.clamp(settle_bounds::MIN_MS, settle_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for SettleDelay {
    fn default() -> Self {
        Self(settle_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Swipe Threshold Bounds
// =============================================================================

/// Swipe threshold bounds, as a fraction of the window height.
pub mod swipe_bounds {
    /// Minimum ratio.
    pub const MIN_RATIO: f32 = 0.05;
    /// Maximum ratio.
    pub const MAX_RATIO: f32 = 0.95;
    /// Default ratio.
    pub const DEFAULT_RATIO: f32 = 0.3;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Vertical distance a top-to-bottom swipe must travel to dismiss the
/// overlay, expressed as a fraction of the host window height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold ratio, clamping to valid range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self::default();
        }
        Self(ratio.clamp(swipe_bounds::MIN_RATIO, swipe_bounds::MAX_RATIO))
    }

    /// Returns the ratio.
    #[must_use]
    pub fn ratio(self) -> f32 {
        self.0
    }

    /// Returns the distance in pixels for a window of the given height.
    #[must_use]
    pub fn distance_for(self, window_height: f32) -> f32 {
        window_height.max(0.0) * self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT_RATIO)
    }
}
