// SPDX-License-Identifier: MPL-2.0
//! Fullscreen player view port definition.

use crate::domain::video::SurfaceHandle;

/// Individually toggled elements of the fullscreen player view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    FastForward,
    Rewind,
    /// Time bar spanning every window of a multi-window timeline.
    MultiWindowTimeBar,
    /// Scrub/seek bar.
    Progress,
    /// Position and remaining-time labels.
    TimeLabels,
    LiveIndicator,
    Next,
    Previous,
    ExitButton,
    PipButton,
}

impl Control {
    /// Controls that only make sense for seekable (non-live) content.
    pub const SEEK_CONTROLS: [Self; 5] = [
        Self::FastForward,
        Self::Rewind,
        Self::MultiWindowTimeBar,
        Self::Progress,
        Self::TimeLabels,
    ];

    /// Track-skip controls.
    pub const SKIP_CONTROLS: [Self; 2] = [Self::Next, Self::Previous];
}

/// Port for the view that hosts the rendering surface and its controls.
pub trait PlayerControls: Send + Sync {
    /// Surface the view renders into.
    fn surface(&self) -> SurfaceHandle;

    /// Shows or hides a control. Views lacking the control ignore the call.
    fn set_control_visible(&self, control: Control, visible: bool);

    /// Hides the whole on-screen controller.
    fn hide_controller(&self);

    /// Prevents the screen from dimming while `true`.
    fn set_keep_screen_on(&self, keep_on: bool);
}
