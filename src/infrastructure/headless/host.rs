// SPDX-License-Identifier: MPL-2.0
//! In-memory host window.

use crate::application::port::{HostError, HostWindow};
use crate::domain::pip::AspectRatio;
use crate::domain::window::{Orientation, SystemUiFlags};
use parking_lot::Mutex;

/// Default window height of a headless host, in pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 1080.0;

/// A write the overlay made to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCall {
    SetOrientation(Orientation),
    SetDecorFitsSystemWindows(bool),
    SetSystemUi(SystemUiFlags),
    EnterPictureInPicture(AspectRatio),
}

#[derive(Debug)]
struct HostState {
    orientation: Orientation,
    decor_fits_system_windows: bool,
    system_ui: SystemUiFlags,
    window_height: f32,
    pip_supported: bool,
    pip_failure: Option<HostError>,
    calls: Vec<HostCall>,
}

/// Host window that records every call and keeps the resulting state.
#[derive(Debug)]
pub struct HeadlessHost {
    state: Mutex<HostState>,
}

impl HeadlessHost {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            state: Mutex::new(HostState {
                orientation,
                decor_fits_system_windows: true,
                system_ui: SystemUiFlags::NONE,
                window_height: DEFAULT_WINDOW_HEIGHT,
                pip_supported: true,
                pip_failure: None,
                calls: Vec::new(),
            }),
        }
    }

    pub fn set_window_height(&self, height: f32) {
        self.state.lock().window_height = height;
    }

    pub fn set_pip_supported(&self, supported: bool) {
        self.state.lock().pip_supported = supported;
    }

    /// Makes every following PiP request fail with `failure`.
    pub fn fail_pip_with(&self, failure: Option<HostError>) {
        self.state.lock().pip_failure = failure;
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    pub fn orientation(&self) -> Orientation {
        self.state.lock().orientation
    }

    pub fn decor_fits_system_windows(&self) -> bool {
        self.state.lock().decor_fits_system_windows
    }

    pub fn system_ui(&self) -> SystemUiFlags {
        self.state.lock().system_ui
    }

    /// How many times the immersive-sticky preset was applied.
    pub fn immersive_applications(&self) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| **call == HostCall::SetSystemUi(SystemUiFlags::IMMERSIVE_STICKY_MODE))
            .count()
    }

    /// Aspect ratios of accepted and rejected PiP requests, in order.
    pub fn pip_requests(&self) -> Vec<AspectRatio> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::EnterPictureInPicture(ratio) => Some(*ratio),
                _ => None,
            })
            .collect()
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new(Orientation::Portrait)
    }
}

impl HostWindow for HeadlessHost {
    fn requested_orientation(&self) -> Orientation {
        self.state.lock().orientation
    }

    fn set_requested_orientation(&self, orientation: Orientation) {
        let mut state = self.state.lock();
        state.orientation = orientation;
        state.calls.push(HostCall::SetOrientation(orientation));
    }

    fn set_decor_fits_system_windows(&self, fits: bool) {
        let mut state = self.state.lock();
        state.decor_fits_system_windows = fits;
        state.calls.push(HostCall::SetDecorFitsSystemWindows(fits));
    }

    fn set_system_ui_visibility(&self, flags: SystemUiFlags) {
        let mut state = self.state.lock();
        state.system_ui = flags;
        state.calls.push(HostCall::SetSystemUi(flags));
    }

    fn window_height(&self) -> f32 {
        self.state.lock().window_height
    }

    fn supports_picture_in_picture(&self) -> bool {
        self.state.lock().pip_supported
    }

    fn enter_picture_in_picture(&self, aspect_ratio: AspectRatio) -> Result<(), HostError> {
        let mut state = self.state.lock();
        state
            .calls
            .push(HostCall::EnterPictureInPicture(aspect_ratio));
        if !state.pip_supported {
            return Err(HostError::PictureInPictureUnsupported);
        }
        match &state.pip_failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}
