// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains the values the overlay reads from the player.
//! They are independent of any player engine or view implementation.

pub mod newtypes;
pub mod playback;

// Re-export commonly used types
pub use newtypes::{MediaItem, SurfaceHandle, VideoSize};
pub use playback::{PlaybackState, TransitionReason};
