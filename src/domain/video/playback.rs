// SPDX-License-Identifier: MPL-2.0
//! Player state reported through playback events.

/// Playback state of the player engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No media prepared.
    #[default]
    Idle,
    /// Waiting for data before playback can continue.
    Buffering,
    /// Able to play from the current position.
    Ready,
    /// Reached the end of the media.
    Ended,
}

/// Why the player moved to another media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionReason {
    /// The current item started over.
    Repeat,
    /// The previous item finished.
    Auto,
    /// A seek moved to another item.
    Seek,
    /// The playlist was replaced or edited.
    PlaylistChanged,
}
