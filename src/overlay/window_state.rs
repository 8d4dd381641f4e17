// SPDX-License-Identifier: MPL-2.0
//! Immersive window state of the host.

use crate::application::port::HostWindow;
use crate::domain::window::{Orientation, SystemUiFlags};
use std::sync::Arc;

/// Toggles the host between immersive fullscreen and its resting state.
///
/// Both directions are plain writes to the host, so calling either one
/// repeatedly is harmless.
pub struct WindowStateManager {
    host: Arc<dyn HostWindow>,
    prior_orientation: Orientation,
}

impl WindowStateManager {
    /// Snapshots the host's current orientation for [`Self::exit_immersive`].
    pub fn capture(host: Arc<dyn HostWindow>) -> Self {
        let prior_orientation = host.requested_orientation();
        Self {
            host,
            prior_orientation,
        }
    }

    /// Orientation the host had before the session started.
    #[must_use]
    pub fn prior_orientation(&self) -> Orientation {
        self.prior_orientation
    }

    /// Hides the system bars, optionally locking to the landscape family.
    pub fn enter_immersive(&self, lock_landscape: bool) {
        if lock_landscape {
            self.host
                .set_requested_orientation(Orientation::UserLandscape);
        }
        self.host.set_decor_fits_system_windows(false);
        self.apply(SystemUiFlags::IMMERSIVE_STICKY_MODE);
    }

    /// Restores the snapshot orientation and switches to edge-to-edge.
    pub fn exit_immersive(&self) {
        self.host.set_requested_orientation(self.prior_orientation);
        self.host.set_decor_fits_system_windows(true);
        self.apply(SystemUiFlags::EDGE_TO_EDGE_MODE);
    }

    fn apply(&self, flags: SystemUiFlags) {
        tracing::debug!(
            ?flags,
            bars_hidden = flags.hides_system_bars(),
            "applying system UI visibility"
        );
        self.host.set_system_ui_visibility(flags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::headless::{HeadlessHost, HostCall};

    fn manager(initial: Orientation) -> (Arc<HeadlessHost>, WindowStateManager) {
        let host = Arc::new(HeadlessHost::new(initial));
        let manager = WindowStateManager::capture(host.clone());
        (host, manager)
    }

    #[test]
    fn enter_with_landscape_lock() {
        let (host, manager) = manager(Orientation::Portrait);
        manager.enter_immersive(true);

        assert_eq!(
            host.calls(),
            vec![
                HostCall::SetOrientation(Orientation::UserLandscape),
                HostCall::SetDecorFitsSystemWindows(false),
                HostCall::SetSystemUi(SystemUiFlags::IMMERSIVE_STICKY_MODE),
            ]
        );
    }

    #[test]
    fn enter_without_lock_keeps_orientation() {
        let (host, manager) = manager(Orientation::Sensor);
        manager.enter_immersive(false);

        assert_eq!(host.orientation(), Orientation::Sensor);
        assert_eq!(host.system_ui(), SystemUiFlags::IMMERSIVE_STICKY_MODE);
        assert!(!host.decor_fits_system_windows());
    }

    #[test]
    fn exit_restores_snapshot() {
        let (host, manager) = manager(Orientation::Portrait);
        manager.enter_immersive(true);
        manager.exit_immersive();

        assert_eq!(manager.prior_orientation(), Orientation::Portrait);
        assert_eq!(host.orientation(), Orientation::Portrait);
        assert!(host.decor_fits_system_windows());
        assert_eq!(host.system_ui(), SystemUiFlags::EDGE_TO_EDGE_MODE);
    }

    #[test]
    fn toggling_twice_is_stable() {
        let (host, manager) = manager(Orientation::User);
        manager.enter_immersive(true);
        manager.enter_immersive(true);
        assert_eq!(host.orientation(), Orientation::UserLandscape);

        manager.exit_immersive();
        manager.exit_immersive();
        assert_eq!(host.orientation(), Orientation::User);
        assert_eq!(host.system_ui(), SystemUiFlags::EDGE_TO_EDGE_MODE);
    }
}
