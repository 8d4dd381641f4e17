// SPDX-License-Identifier: MPL-2.0
//! Rendering-surface ownership on the session side.
//!
//! The coordinator enforces the handoff protocol: one acquire, then one
//! release. Anything else is refused with a [`SurfaceError`].

use crate::application::port::{SurfaceOwnership, ViewController};
use crate::domain::video::SurfaceHandle;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

/// Violations of the acquire-once, release-once protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("surface already acquired by this session")]
    AlreadyAcquired,

    #[error("surface is not owned by this session")]
    NotOwned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ownership {
    Idle,
    Owned(SurfaceHandle),
    Released,
}

pub struct SurfaceCoordinator {
    ownership: Arc<dyn SurfaceOwnership>,
    state: Mutex<Ownership>,
}

impl SurfaceCoordinator {
    pub fn new(ownership: Arc<dyn SurfaceOwnership>) -> Self {
        Self {
            ownership,
            state: Mutex::new(Ownership::Idle),
        }
    }

    /// Takes `surface` from the player on behalf of `controller`.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::AlreadyAcquired`] if this coordinator already
    /// acquired once, even if it has released since.
    pub fn acquire(
        &self,
        surface: SurfaceHandle,
        controller: Arc<dyn ViewController>,
    ) -> Result<(), SurfaceError> {
        {
            let mut state = self.state.lock();
            if *state != Ownership::Idle {
                return Err(SurfaceError::AlreadyAcquired);
            }
            *state = Ownership::Owned(surface);
        }
        tracing::debug!(?surface, "taking surface ownership");
        self.ownership.take_ownership(surface, controller);
        Ok(())
    }

    /// Hands the surface back to the player, which reattaches the
    /// embedded view.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::NotOwned`] if nothing was acquired or the surface
    /// was already released.
    pub fn release(&self) -> Result<SurfaceHandle, SurfaceError> {
        let surface = {
            let mut state = self.state.lock();
            match *state {
                Ownership::Owned(surface) => {
                    *state = Ownership::Released;
                    surface
                }
                Ownership::Idle | Ownership::Released => return Err(SurfaceError::NotOwned),
            }
        };
        tracing::debug!(?surface, "releasing surface ownership");
        self.ownership.release_player_view(surface);
        Ok(surface)
    }
}
