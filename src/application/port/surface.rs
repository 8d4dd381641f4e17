// SPDX-License-Identifier: MPL-2.0
//! Rendering-surface ownership port.
//!
//! The player renders into exactly one surface at a time. A view takes the
//! surface with [`SurfaceOwnership::take_ownership`] and hands it back with
//! [`SurfaceOwnership::release_player_view`], at which point the player
//! reattaches the embedded view. If someone else takes the surface first,
//! the player calls [`ViewController::on_ownership_lost`] on the previous
//! owner.

use crate::domain::video::SurfaceHandle;
use std::sync::Arc;

/// Port for the player side of the ownership handoff.
pub trait SurfaceOwnership: Send + Sync {
    /// Makes `controller` the exclusive owner of `surface`.
    ///
    /// The embedded view stops rendering. Any previous owner is notified
    /// through [`ViewController::on_ownership_lost`].
    fn take_ownership(&self, surface: SurfaceHandle, controller: Arc<dyn ViewController>);

    /// Returns `surface` to the player. Ignored if `surface` is not the
    /// current owner's.
    fn release_player_view(&self, surface: SurfaceHandle);
}

/// Capability a surface owner exposes back to the player.
pub trait ViewController: Send + Sync {
    /// The player reclaimed the surface for another view.
    fn on_ownership_lost(&self);

    /// Leaves fullscreen, releasing the surface.
    fn exit_fullscreen(&self);

    /// Requests PiP for the current video.
    fn enter_picture_in_picture(&self);

    fn is_fullscreen(&self) -> bool;

    /// Whether the host should enter PiP on its own when the user leaves.
    fn should_pip_automatically(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn SurfaceOwnership, _: &dyn ViewController) {}
}
