// SPDX-License-Identifier: MPL-2.0
//! In-memory player.

use crate::application::port::{ListenerId, Player, PlayerListener};
use crate::domain::video::{MediaItem, PlaybackState, TransitionReason, VideoSize};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Player with scripted state. `emit_*` methods deliver events to the
/// registered listeners on the calling thread.
#[derive(Default)]
pub struct HeadlessPlayer {
    live: AtomicBool,
    video_size: Mutex<VideoSize>,
    pause_count: AtomicUsize,
    next_listener: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, Arc<dyn PlayerListener>)>>,
}

impl HeadlessPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_live(&self, live: bool) {
        self.live.store(live, Ordering::SeqCst);
    }

    pub fn set_video_size(&self, size: VideoSize) {
        *self.video_size.lock() = size;
    }

    pub fn pause_count(&self) -> usize {
        self.pause_count.load(Ordering::SeqCst)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn emit_is_playing_changed(&self, is_playing: bool) {
        for listener in self.snapshot() {
            listener.on_is_playing_changed(is_playing);
        }
    }

    pub fn emit_media_item_transition(&self, item: Option<MediaItem>, reason: TransitionReason) {
        for listener in self.snapshot() {
            listener.on_media_item_transition(item.as_ref(), reason);
        }
    }

    pub fn emit_playback_state_changed(&self, state: PlaybackState) {
        for listener in self.snapshot() {
            listener.on_playback_state_changed(state);
        }
    }

    // Listeners may unregister from inside a callback.
    fn snapshot(&self) -> Vec<Arc<dyn PlayerListener>> {
        self.listeners
            .lock()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect()
    }
}

impl Player for HeadlessPlayer {
    fn pause(&self) {
        self.pause_count.fetch_add(1, Ordering::SeqCst);
    }

    fn video_size(&self) -> VideoSize {
        *self.video_size.lock()
    }

    fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    fn add_listener(&self, listener: Arc<dyn PlayerListener>) -> ListenerId {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().push((id, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.lock().retain(|(existing, _)| *existing != id);
    }
}
