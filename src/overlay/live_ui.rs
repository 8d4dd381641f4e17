// SPDX-License-Identifier: MPL-2.0
//! Live/VOD control visibility.
//!
//! Whether content is live is decided by the player; this adapter only
//! mirrors it onto the controls.

use crate::application::port::{Control, PlayerControls};
use parking_lot::Mutex;
use std::sync::Arc;

/// Kind of content currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Live,
    Vod,
}

impl StreamKind {
    #[must_use]
    pub fn from_is_live(is_live: bool) -> Self {
        if is_live {
            Self::Live
        } else {
            Self::Vod
        }
    }
}

pub struct LiveUiAdapter {
    controls: Arc<dyn PlayerControls>,
    current: Mutex<Option<StreamKind>>,
}

impl LiveUiAdapter {
    pub fn new(controls: Arc<dyn PlayerControls>) -> Self {
        Self {
            controls,
            current: Mutex::new(None),
        }
    }

    /// Last applied kind, `None` before the first update.
    #[must_use]
    pub fn current(&self) -> Option<StreamKind> {
        *self.current.lock()
    }

    /// Live hides seeking and time controls and shows the live indicator;
    /// VOD does the opposite.
    pub fn set_live_ui_enabled(&self, enabled: bool) {
        for control in Control::SEEK_CONTROLS {
            self.controls.set_control_visible(control, !enabled);
        }
        self.controls
            .set_control_visible(Control::LiveIndicator, enabled);
        *self.current.lock() = Some(StreamKind::from_is_live(enabled));
    }

    pub fn on_media_item_transition(&self, is_live: bool) {
        self.set_live_ui_enabled(is_live);
    }

    /// Re-derives live/VOD and hides track skipping, which never applies
    /// to a single-item fullscreen session.
    pub fn on_playback_state_changed(&self, is_live: bool) {
        self.set_live_ui_enabled(is_live);
        for control in Control::SKIP_CONTROLS {
            self.controls.set_control_visible(control, false);
        }
    }
}
