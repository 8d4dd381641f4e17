// SPDX-License-Identifier: MPL-2.0
use fullscreen_overlay::application::port::ViewController;
use fullscreen_overlay::config::{self, OverlayConfig, DEFAULT_SETTLE_DELAY_MS};
use fullscreen_overlay::domain::pip::PipModeChanged;
use fullscreen_overlay::domain::window::Orientation;
use fullscreen_overlay::infrastructure::HeadlessRig;
use fullscreen_overlay::overlay::{OverlayOptions, TouchEvent};
use std::time::Duration;
use tempfile::tempdir;

#[tokio::test(start_paused = true)]
async fn test_session_options_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("overlay.toml");

    // 1. Persist a config that turns the landscape lock and auto-PiP off
    let initial_config = OverlayConfig {
        force_landscape: false,
        pip_on_leave: false,
        settle_delay_ms: 200,
        swipe_threshold_ratio: 0.5,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let options = OverlayOptions::from(&loaded);

    // 2. Open a session with it
    let rig = HeadlessRig::with_orientation(Orientation::Portrait);
    rig.host.set_window_height(1000.0);
    let session = rig.open(options);

    assert_eq!(rig.host.orientation(), Orientation::Portrait);
    assert!(!session.should_pip_automatically());

    // 3. Settle delay comes from the file
    rig.host.clear_calls();
    rig.bus.publish(PipModeChanged::returned());
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
    tokio::time::advance(Duration::from_millis(201)).await;
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
    assert_eq!(rig.host.immersive_applications(), 1);
    assert_eq!(rig.host.orientation(), Orientation::UserLandscape);

    // 4. Swipe threshold comes from the file: 40% of 1000px is not enough
    session.on_touch(TouchEvent::Down { x: 0.0, y: 0.0 });
    session.on_touch(TouchEvent::Up { x: 0.0, y: 400.0 });
    assert!(!session.is_released());

    session.on_touch(TouchEvent::Down { x: 0.0, y: 0.0 });
    session.on_touch(TouchEvent::Up { x: 0.0, y: 600.0 });
    assert!(session.is_released());
    assert_eq!(rig.host.orientation(), Orientation::Portrait);

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("overlay.toml");
    std::fs::write(&path, "force_landscape = false\n").expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let options = OverlayOptions::from(&loaded);

    assert!(!options.force_landscape);
    assert!(options.pip_on_leave);
    assert_eq!(options.settle_delay.as_millis(), DEFAULT_SETTLE_DELAY_MS);
}
