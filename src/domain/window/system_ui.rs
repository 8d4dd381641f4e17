// SPDX-License-Identifier: MPL-2.0
//! System-UI visibility bitmask.
//!
//! The bit values match the host's legacy `SYSTEM_UI_FLAG_*` constants.
//! Two presets are used by the overlay:
//!
//! - [`SystemUiFlags::IMMERSIVE_STICKY_MODE`]: bars hidden, revealed only
//!   transiently by an edge swipe, then hidden again.
//! - [`SystemUiFlags::EDGE_TO_EDGE_MODE`]: content laid out under the bars,
//!   bars visible.

use std::fmt;

/// Bitmask of system-UI visibility flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SystemUiFlags(u32);

impl SystemUiFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Hide the navigation bar.
    pub const HIDE_NAVIGATION: Self = Self(0x0000_0002);
    /// Hide the status bar.
    pub const FULLSCREEN: Self = Self(0x0000_0004);
    /// Keep content insets stable while bars come and go.
    pub const LAYOUT_STABLE: Self = Self(0x0000_0100);
    /// Lay content out as if the navigation bar were hidden.
    pub const LAYOUT_HIDE_NAVIGATION: Self = Self(0x0000_0200);
    /// Lay content out as if the status bar were hidden.
    pub const LAYOUT_FULLSCREEN: Self = Self(0x0000_0400);
    /// Bars reappear transiently on edge swipe and auto-hide again.
    pub const IMMERSIVE_STICKY: Self = Self(0x0000_1000);

    /// Flag combination applied when entering fullscreen.
    ///
    /// Must stay on the legacy flags: the inset-controller API leaves the
    /// navigation bar visible after the first touch on some devices.
    pub const IMMERSIVE_STICKY_MODE: Self = Self(
        Self::IMMERSIVE_STICKY.0
            | Self::LAYOUT_STABLE.0
            | Self::LAYOUT_HIDE_NAVIGATION.0
            | Self::LAYOUT_FULLSCREEN.0
            | Self::HIDE_NAVIGATION.0
            | Self::FULLSCREEN.0,
    );

    /// Flag combination applied when leaving fullscreen.
    pub const EDGE_TO_EDGE_MODE: Self = Self(
        Self::LAYOUT_STABLE.0 | Self::LAYOUT_HIDE_NAVIGATION.0 | Self::LAYOUT_FULLSCREEN.0,
    );

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if the mask keeps both system bars hidden.
    #[must_use]
    pub const fn hides_system_bars(self) -> bool {
        self.contains(Self(Self::HIDE_NAVIGATION.0 | Self::FULLSCREEN.0))
    }
}

impl fmt::Debug for SystemUiFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SystemUiFlags({:#06x})", self.bits())
    }
}
