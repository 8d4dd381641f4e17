// SPDX-License-Identifier: MPL-2.0
//! In-memory surface ownership.

use crate::application::port::{SurfaceOwnership, ViewController};
use crate::domain::video::SurfaceHandle;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Owner {
    surface: SurfaceHandle,
    controller: Arc<dyn ViewController>,
}

/// Player-side ownership bookkeeping. The embedded view renders whenever
/// no one else owns the surface.
pub struct HeadlessOwnership {
    owner: Mutex<Option<Owner>>,
    release_count: AtomicUsize,
}

impl HeadlessOwnership {
    pub fn new() -> Self {
        Self {
            owner: Mutex::new(None),
            release_count: AtomicUsize::new(0),
        }
    }

    pub fn embedded_rendering(&self) -> bool {
        self.owner.lock().is_none()
    }

    pub fn owner_surface(&self) -> Option<SurfaceHandle> {
        self.owner.lock().as_ref().map(|owner| owner.surface)
    }

    /// Number of accepted `release_player_view` calls.
    pub fn release_count(&self) -> usize {
        self.release_count.load(Ordering::SeqCst)
    }

    /// The embedded view takes the surface back without asking.
    pub fn reclaim(&self) {
        let previous = self.owner.lock().take();
        if let Some(previous) = previous {
            previous.controller.on_ownership_lost();
        }
    }
}

impl Default for HeadlessOwnership {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceOwnership for HeadlessOwnership {
    fn take_ownership(&self, surface: SurfaceHandle, controller: Arc<dyn ViewController>) {
        let previous = self.owner.lock().replace(Owner {
            surface,
            controller,
        });
        if let Some(previous) = previous {
            previous.controller.on_ownership_lost();
        }
    }

    fn release_player_view(&self, surface: SurfaceHandle) {
        let released = {
            let mut owner = self.owner.lock();
            let is_owner = owner
                .as_ref()
                .is_some_and(|current| current.surface == surface);
            if is_owner {
                owner.take()
            } else {
                None
            }
        };
        if released.is_some() {
            self.release_count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
