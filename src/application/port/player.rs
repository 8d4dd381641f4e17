// SPDX-License-Identifier: MPL-2.0
//! Player port definition.
//!
//! The overlay never constructs or drives the player engine. It pauses it,
//! reads a couple of values, and listens to its events.

use crate::domain::video::{MediaItem, PlaybackState, TransitionReason, VideoSize};
use std::sync::Arc;

/// Token returned by [`Player::add_listener`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Port for the shared media player.
pub trait Player: Send + Sync {
    /// Pauses playback. No-op when already paused.
    fn pause(&self);

    /// Current decoded video size, `0x0` until known.
    fn video_size(&self) -> VideoSize;

    /// Whether the current media item is a live stream.
    fn is_live(&self) -> bool;

    /// Registers a listener for playback events.
    ///
    /// Events are delivered synchronously on the thread that produced them.
    /// Implementations must tolerate [`Player::remove_listener`] being
    /// called from inside a callback.
    fn add_listener(&self, listener: Arc<dyn PlayerListener>) -> ListenerId;

    /// Unregisters a listener. Unknown ids are ignored.
    fn remove_listener(&self, id: ListenerId);
}

/// Receiver of player events. Every method defaults to a no-op.
pub trait PlayerListener: Send + Sync {
    fn on_is_playing_changed(&self, _is_playing: bool) {}

    fn on_media_item_transition(&self, _item: Option<&MediaItem>, _reason: TransitionReason) {}

    fn on_playback_state_changed(&self, _state: PlaybackState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the traits are object-safe
    fn _assert_object_safe(_: &dyn Player, _: &dyn PlayerListener) {}

    struct Silent;
    impl PlayerListener for Silent {}

    #[test]
    fn listener_methods_default_to_noop() {
        let listener = Silent;
        listener.on_is_playing_changed(true);
        listener.on_media_item_transition(None, TransitionReason::Auto);
        listener.on_playback_state_changed(PlaybackState::Ready);
    }
}
