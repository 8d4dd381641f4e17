// SPDX-License-Identifier: MPL-2.0
//! Requested screen orientation.

/// Orientation requested by the host window.
///
/// The overlay snapshots this value when it opens and writes it back
/// unchanged when it exits, so every variant must survive a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// No preference; the system picks.
    #[default]
    Unspecified,
    /// Fixed portrait.
    Portrait,
    /// Fixed landscape.
    Landscape,
    /// Portrait family, rotatable by the user between both directions.
    UserPortrait,
    /// Landscape family, rotatable by the user between both directions.
    UserLandscape,
    /// Follows the user's rotation preference.
    User,
    /// Follows the physical sensor.
    Sensor,
    /// Locked to whatever the current rotation is.
    Locked,
}
