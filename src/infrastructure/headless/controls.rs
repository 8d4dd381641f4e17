// SPDX-License-Identifier: MPL-2.0
//! In-memory player view controls.

use crate::application::port::{Control, PlayerControls};
use crate::domain::video::SurfaceHandle;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

static NEXT_SURFACE: AtomicU64 = AtomicU64::new(1);

/// View that remembers the last visibility set for each control.
#[derive(Debug)]
pub struct HeadlessControls {
    surface: SurfaceHandle,
    visibility: Mutex<HashMap<Control, bool>>,
    hide_controller_count: AtomicUsize,
    keep_screen_on: AtomicBool,
}

impl HeadlessControls {
    pub fn new(surface: SurfaceHandle) -> Self {
        Self {
            surface,
            visibility: Mutex::new(HashMap::new()),
            hide_controller_count: AtomicUsize::new(0),
            keep_screen_on: AtomicBool::new(false),
        }
    }

    /// Controls with a process-unique surface.
    pub fn with_fresh_surface() -> Self {
        Self::new(SurfaceHandle::new(
            NEXT_SURFACE.fetch_add(1, Ordering::Relaxed),
        ))
    }

    /// Last visibility set for `control`, `None` if never touched.
    pub fn is_visible(&self, control: Control) -> Option<bool> {
        self.visibility.lock().get(&control).copied()
    }

    pub fn hide_controller_count(&self) -> usize {
        self.hide_controller_count.load(Ordering::SeqCst)
    }

    pub fn keep_screen_on(&self) -> bool {
        self.keep_screen_on.load(Ordering::SeqCst)
    }
}

impl PlayerControls for HeadlessControls {
    fn surface(&self) -> SurfaceHandle {
        self.surface
    }

    fn set_control_visible(&self, control: Control, visible: bool) {
        self.visibility.lock().insert(control, visible);
    }

    fn hide_controller(&self) {
        self.hide_controller_count.fetch_add(1, Ordering::SeqCst);
    }

    fn set_keep_screen_on(&self, keep_on: bool) {
        self.keep_screen_on.store(keep_on, Ordering::SeqCst);
    }
}
