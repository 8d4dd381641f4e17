// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Session**: Construction parameters of a fullscreen session
//! - **Picture-in-Picture**: Settle delay after leaving PiP
//! - **Gesture**: Swipe-to-dismiss threshold
//! - **Event Bus**: Broadcast channel capacity

use crate::domain::ui::newtypes::{settle_bounds, swipe_bounds};

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Lock the host to landscape when fullscreen opens.
pub const DEFAULT_FORCE_LANDSCAPE: bool = true;

/// Let the host enter PiP on its own when the user leaves.
pub const DEFAULT_PIP_ON_LEAVE: bool = true;

// ==========================================================================
// Picture-in-Picture Defaults
// ==========================================================================

/// Default wait after PiP exit before immersive state is re-applied.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = settle_bounds::DEFAULT_MS;

/// Minimum settle delay.
pub const MIN_SETTLE_DELAY_MS: u32 = settle_bounds::MIN_MS;

/// Maximum settle delay.
pub const MAX_SETTLE_DELAY_MS: u32 = settle_bounds::MAX_MS;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default swipe-to-dismiss distance, as a fraction of window height.
pub const DEFAULT_SWIPE_THRESHOLD_RATIO: f32 = swipe_bounds::DEFAULT_RATIO;

/// Minimum swipe threshold ratio.
pub const MIN_SWIPE_THRESHOLD_RATIO: f32 = swipe_bounds::MIN_RATIO;

/// Maximum swipe threshold ratio.
pub const MAX_SWIPE_THRESHOLD_RATIO: f32 = swipe_bounds::MAX_RATIO;

// ==========================================================================
// Event Bus Defaults
// ==========================================================================

/// Events buffered per subscriber before it starts lagging.
pub const DEFAULT_EVENT_BUS_CAPACITY: usize = 64;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Settle delay validation
    assert!(MAX_SETTLE_DELAY_MS >= MIN_SETTLE_DELAY_MS);
    assert!(DEFAULT_SETTLE_DELAY_MS >= MIN_SETTLE_DELAY_MS);
    assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_SETTLE_DELAY_MS);

    // Swipe threshold validation
    assert!(MIN_SWIPE_THRESHOLD_RATIO > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_RATIO < 1.0);
    assert!(DEFAULT_SWIPE_THRESHOLD_RATIO >= MIN_SWIPE_THRESHOLD_RATIO);
    assert!(DEFAULT_SWIPE_THRESHOLD_RATIO <= MAX_SWIPE_THRESHOLD_RATIO);

    // Event bus validation
    assert!(DEFAULT_EVENT_BUS_CAPACITY > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_defaults_match_plugin_defaults() {
        assert!(DEFAULT_FORCE_LANDSCAPE);
        assert!(DEFAULT_PIP_ON_LEAVE);
    }

    #[test]
    fn settle_delay_defaults_are_valid() {
        assert_eq!(DEFAULT_SETTLE_DELAY_MS, 500);
        assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_SETTLE_DELAY_MS);
    }

    #[test]
    fn swipe_threshold_defaults_are_valid() {
        assert_eq!(DEFAULT_SWIPE_THRESHOLD_RATIO, 0.3);
        assert!(DEFAULT_SWIPE_THRESHOLD_RATIO > MIN_SWIPE_THRESHOLD_RATIO);
        assert!(DEFAULT_SWIPE_THRESHOLD_RATIO < MAX_SWIPE_THRESHOLD_RATIO);
    }
}
