// SPDX-License-Identifier: MPL-2.0
//! Integration tests for exit racing PiP work on a multi-thread runtime.

use fullscreen_overlay::application::port::{HostError, HostWindow};
use fullscreen_overlay::domain::pip::{AspectRatio, PipModeChanged};
use fullscreen_overlay::domain::ui::SettleDelay;
use fullscreen_overlay::domain::window::{Orientation, SystemUiFlags};
use fullscreen_overlay::infrastructure::{HeadlessHost, HeadlessRig, HostCall};
use fullscreen_overlay::overlay::{OverlayOptions, OverlayPorts};
use fullscreen_overlay::FullscreenOverlay;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Host that blocks inside the next landscape lock once armed.
struct StallingHost {
    inner: Arc<HeadlessHost>,
    armed: AtomicBool,
    stalled: AtomicBool,
}

impl StallingHost {
    fn new(inner: Arc<HeadlessHost>) -> Self {
        Self {
            inner,
            armed: AtomicBool::new(false),
            stalled: AtomicBool::new(false),
        }
    }

    fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    fn stalled(&self) -> bool {
        self.stalled.load(Ordering::SeqCst)
    }
}

impl HostWindow for StallingHost {
    fn requested_orientation(&self) -> Orientation {
        self.inner.requested_orientation()
    }

    fn set_requested_orientation(&self, orientation: Orientation) {
        if orientation == Orientation::UserLandscape && self.armed.swap(false, Ordering::SeqCst) {
            self.stalled.store(true, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(300));
        }
        self.inner.set_requested_orientation(orientation);
    }

    fn set_decor_fits_system_windows(&self, fits: bool) {
        self.inner.set_decor_fits_system_windows(fits);
    }

    fn set_system_ui_visibility(&self, flags: SystemUiFlags) {
        self.inner.set_system_ui_visibility(flags);
    }

    fn window_height(&self) -> f32 {
        self.inner.window_height()
    }

    fn supports_picture_in_picture(&self) -> bool {
        self.inner.supports_picture_in_picture()
    }

    fn enter_picture_in_picture(&self, aspect_ratio: AspectRatio) -> Result<(), HostError> {
        self.inner.enter_picture_in_picture(aspect_ratio)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn exit_during_restore_leaves_window_edge_to_edge() {
    let rig = HeadlessRig::new();
    let host = Arc::new(StallingHost::new(rig.host.clone()));
    let ports = OverlayPorts {
        host: host.clone(),
        ..rig.ports()
    };
    let options = OverlayOptions {
        force_landscape: false,
        settle_delay: SettleDelay::from_millis(0),
        ..OverlayOptions::default()
    };
    let session = FullscreenOverlay::open(ports, options, &rig.bus);
    rig.host.clear_calls();

    host.arm();
    rig.bus.publish(PipModeChanged::returned());
    for _ in 0..2_000 {
        if host.stalled() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    assert!(host.stalled());

    session.exit();

    assert!(session.is_released());
    assert_eq!(rig.host.orientation(), Orientation::Portrait);
    assert!(rig.host.decor_fits_system_windows());
    assert_eq!(rig.host.system_ui(), SystemUiFlags::EDGE_TO_EDGE_MODE);
    assert_eq!(
        rig.host.calls().last(),
        Some(&HostCall::SetSystemUi(SystemUiFlags::EDGE_TO_EDGE_MODE))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn restore_after_exit_touches_nothing() {
    let rig = HeadlessRig::new();
    let options = OverlayOptions {
        settle_delay: SettleDelay::from_millis(0),
        ..OverlayOptions::default()
    };
    let session = rig.open(options);
    session.exit();
    rig.host.clear_calls();

    rig.bus.publish(PipModeChanged::returned());
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(rig.host.calls().is_empty());
    assert_eq!(rig.host.orientation(), Orientation::Portrait);
}
