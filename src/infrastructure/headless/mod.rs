// SPDX-License-Identifier: MPL-2.0
//! Headless adapters.
//!
//! In-memory implementations of every port. They keep the state a real
//! platform would end up in and record what the overlay asked for, which
//! makes them usable both for simulation and for assertions.
//!
//! [`HeadlessRig`] bundles one of each together with an [`EventBus`].

pub mod controls;
pub mod host;
pub mod ownership;
pub mod player;

pub use controls::HeadlessControls;
pub use host::{HeadlessHost, HostCall, DEFAULT_WINDOW_HEIGHT};
pub use ownership::HeadlessOwnership;
pub use player::HeadlessPlayer;

use crate::application::port::PlayerControls;
use crate::domain::video::SurfaceHandle;
use crate::domain::window::Orientation;
use crate::event_bus::EventBus;
use crate::overlay::{FullscreenOverlay, OverlayOptions, OverlayPorts};
use std::sync::Arc;

/// One headless adapter per port, plus the bus.
#[derive(Clone)]
pub struct HeadlessRig {
    pub player: Arc<HeadlessPlayer>,
    pub ownership: Arc<HeadlessOwnership>,
    pub host: Arc<HeadlessHost>,
    pub controls: Arc<HeadlessControls>,
    pub bus: EventBus,
}

impl HeadlessRig {
    /// Rig whose host starts in portrait.
    pub fn new() -> Self {
        Self::with_orientation(Orientation::Portrait)
    }

    pub fn with_orientation(orientation: Orientation) -> Self {
        Self {
            player: Arc::new(HeadlessPlayer::new()),
            ownership: Arc::new(HeadlessOwnership::new()),
            host: Arc::new(HeadlessHost::new(orientation)),
            controls: Arc::new(HeadlessControls::with_fresh_surface()),
            bus: EventBus::default(),
        }
    }

    pub fn ports(&self) -> OverlayPorts {
        OverlayPorts {
            player: self.player.clone(),
            ownership: self.ownership.clone(),
            host: self.host.clone(),
            controls: self.controls.clone(),
        }
    }

    /// Same player, host, ownership and bus; a new view with its own
    /// surface. Models a second fullscreen request.
    pub fn with_new_view(&self) -> Self {
        Self {
            controls: Arc::new(HeadlessControls::with_fresh_surface()),
            ..self.clone()
        }
    }

    /// Surface of this rig's view.
    pub fn controls_surface(&self) -> SurfaceHandle {
        self.controls.surface()
    }

    /// Opens a session on this rig.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn open(&self, options: OverlayOptions) -> Arc<FullscreenOverlay> {
        FullscreenOverlay::open(self.ports(), options, &self.bus)
    }
}

impl Default for HeadlessRig {
    fn default() -> Self {
        Self::new()
    }
}
