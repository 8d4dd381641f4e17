// SPDX-License-Identifier: MPL-2.0
//! Host window port definition.

use crate::domain::pip::AspectRatio;
use crate::domain::window::{Orientation, SystemUiFlags};
use thiserror::Error;

/// Errors reported by the host window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host cannot enter PiP at all (platform too old, feature disabled).
    #[error("Picture-in-picture is not supported by the host")]
    PictureInPictureUnsupported,

    /// The host refused this particular request (wrong state, bad params).
    #[error("Picture-in-picture request rejected: {0}")]
    PictureInPictureRejected(String),
}

/// Port for the window hosting the overlay.
pub trait HostWindow: Send + Sync {
    /// Orientation currently requested by the host.
    fn requested_orientation(&self) -> Orientation;

    fn set_requested_orientation(&self, orientation: Orientation);

    /// Whether the root view fits inside the system bars (`true`) or
    /// extends underneath them (`false`).
    fn set_decor_fits_system_windows(&self, fits: bool);

    /// Replaces the system-UI visibility mask.
    fn set_system_ui_visibility(&self, flags: SystemUiFlags);

    /// Window height in pixels.
    fn window_height(&self) -> f32;

    /// Whether [`HostWindow::enter_picture_in_picture`] can succeed at all.
    fn supports_picture_in_picture(&self) -> bool;

    /// Asks the host to move into PiP with the given aspect ratio.
    ///
    /// Success only means the request was accepted; the actual mode change
    /// is published later on the event bus.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the host refuses the request.
    fn enter_picture_in_picture(&self, aspect_ratio: AspectRatio) -> Result<(), HostError>;
}
