// SPDX-License-Identifier: MPL-2.0
//! Video newtypes.

use std::fmt;

// =============================================================================
// VideoSize
// =============================================================================

/// Decoded video dimensions in pixels.
///
/// Players report `0x0` until the first frame has been decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VideoSize {
    pub width: u32,
    pub height: u32,
}

impl VideoSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true once both dimensions are known.
    #[must_use]
    pub fn is_known(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

// =============================================================================
// SurfaceHandle
// =============================================================================

/// Identifies a video rendering surface.
///
/// The surface itself belongs to the view layer; the overlay only passes
/// this handle through the ownership protocol.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(u64);

impl SurfaceHandle {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surface#{}", self.0)
    }
}

// =============================================================================
// MediaItem
// =============================================================================

/// The item a player transitioned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub media_id: String,
}

impl MediaItem {
    #[must_use]
    pub fn new(media_id: impl Into<String>) -> Self {
        Self {
            media_id: media_id.into(),
        }
    }
}
