// SPDX-License-Identifier: MPL-2.0
//! Integration tests for PiP notifications arriving on the event bus.
//!
//! These run on a paused Tokio clock so the settle delay can be stepped
//! through deterministically.

use fullscreen_overlay::domain::pip::{LifecycleState, PipModeChanged};
use fullscreen_overlay::domain::ui::SettleDelay;
use fullscreen_overlay::domain::window::Orientation;
use fullscreen_overlay::infrastructure::HeadlessRig;
use fullscreen_overlay::overlay::OverlayOptions;
use fullscreen_overlay::PluginEvent;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Lets the PiP listener task run until it blocks again.
async fn drain() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

async fn advance_ms(millis: u64) {
    tokio::time::advance(Duration::from_millis(millis)).await;
    drain().await;
}

#[tokio::test(start_paused = true)]
async fn pip_events_update_membership() {
    let rig = HeadlessRig::new();
    let session = rig.open(OverlayOptions::default());

    rig.bus.publish(PipModeChanged::entered());
    drain().await;
    assert!(session.is_in_pip());

    rig.bus.publish(PipModeChanged::returned());
    drain().await;
    assert!(!session.is_in_pip());
}

#[tokio::test(start_paused = true)]
async fn leaving_pip_restores_fullscreen_after_settle_delay() {
    let rig = HeadlessRig::new();
    let session = rig.open(OverlayOptions::default());
    rig.bus.publish(PipModeChanged::entered());
    drain().await;
    rig.host.clear_calls();

    rig.bus.publish(PipModeChanged::returned());
    drain().await;
    assert_eq!(rig.host.immersive_applications(), 0);

    advance_ms(499).await;
    assert_eq!(rig.host.immersive_applications(), 0);

    advance_ms(2).await;
    assert_eq!(rig.host.immersive_applications(), 1);
    assert_eq!(rig.host.orientation(), Orientation::UserLandscape);
    assert!(!session.is_released());
}

#[tokio::test(start_paused = true)]
async fn restore_forces_landscape_regardless_of_options() {
    let rig = HeadlessRig::with_orientation(Orientation::Sensor);
    let options = OverlayOptions {
        force_landscape: false,
        ..OverlayOptions::default()
    };
    let _session = rig.open(options);
    assert_eq!(rig.host.orientation(), Orientation::Sensor);

    rig.bus
        .publish(PipModeChanged::new(false, LifecycleState::Resumed));
    drain().await;
    advance_ms(501).await;

    assert_eq!(rig.host.orientation(), Orientation::UserLandscape);
}

#[tokio::test(start_paused = true)]
async fn exit_after_pip_closes_instead_of_restoring() {
    let rig = HeadlessRig::with_orientation(Orientation::Portrait);
    let session = rig.open(OverlayOptions::default());
    let exits = Arc::new(AtomicUsize::new(0));
    let counter = exits.clone();
    session.set_on_exit(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    session.enter_picture_in_picture_with_exit(true);
    rig.bus.publish(PipModeChanged::entered());
    drain().await;
    assert!(!session.is_released());
    rig.host.clear_calls();

    rig.bus.publish(PipModeChanged::returned());
    drain().await;

    assert!(session.is_released());
    assert_eq!(exits.load(Ordering::SeqCst), 1);
    assert_eq!(rig.host.orientation(), Orientation::Portrait);
    assert!(rig.ownership.embedded_rendering());

    advance_ms(1_000).await;
    assert_eq!(rig.host.immersive_applications(), 0);
}

#[tokio::test(start_paused = true)]
async fn exit_during_settle_delay_abandons_restore() {
    let rig = HeadlessRig::new();
    let session = rig.open(OverlayOptions::default());

    rig.bus.publish(PipModeChanged::returned());
    drain().await;
    advance_ms(200).await;

    session.exit();
    rig.host.clear_calls();

    advance_ms(1_000).await;
    assert!(rig.host.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn created_state_pauses_playback() {
    let rig = HeadlessRig::new();
    let session = rig.open(OverlayOptions::default());

    rig.bus
        .publish(PipModeChanged::new(true, LifecycleState::Created));
    drain().await;
    assert_eq!(rig.player.pause_count(), 1);
    assert!(session.is_in_pip());

    rig.bus
        .publish(PipModeChanged::new(false, LifecycleState::Created));
    drain().await;
    assert_eq!(rig.player.pause_count(), 2);
    assert!(!session.is_in_pip());
}

#[tokio::test(start_paused = true)]
async fn other_lifecycle_states_do_not_pause() {
    let rig = HeadlessRig::new();
    let _session = rig.open(OverlayOptions::default());

    for state in [
        LifecycleState::Started,
        LifecycleState::Resumed,
        LifecycleState::Paused,
        LifecycleState::Destroyed,
    ] {
        rig.bus.publish(PipModeChanged::new(true, state));
    }
    drain().await;

    assert_eq!(rig.player.pause_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn events_after_exit_are_ignored() {
    let rig = HeadlessRig::new();
    let session = rig.open(OverlayOptions::default());
    session.exit();
    rig.host.clear_calls();

    rig.bus
        .publish(PipModeChanged::new(false, LifecycleState::Created));
    drain().await;
    advance_ms(1_000).await;

    assert_eq!(rig.player.pause_count(), 0);
    assert!(!session.is_in_pip());
    assert!(rig.host.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn unrelated_bus_events_are_ignored() {
    let rig = HeadlessRig::new();
    let session = rig.open(OverlayOptions::default());
    rig.host.clear_calls();

    rig.bus.publish(PluginEvent::UserLeaveHint);
    rig.bus.publish(PluginEvent::AttachedToActivity);
    rig.bus.publish(PluginEvent::DetachedFromActivity);
    drain().await;
    advance_ms(1_000).await;

    assert!(rig.host.calls().is_empty());
    assert!(!session.is_in_pip());
    assert!(!session.is_released());
}

#[tokio::test(start_paused = true)]
async fn settle_delay_is_configurable() {
    let rig = HeadlessRig::new();
    let options = OverlayOptions {
        settle_delay: SettleDelay::from_millis(100),
        ..OverlayOptions::default()
    };
    let _session = rig.open(options);
    rig.host.clear_calls();

    rig.bus.publish(PipModeChanged::returned());
    drain().await;
    advance_ms(99).await;
    assert_eq!(rig.host.immersive_applications(), 0);

    advance_ms(2).await;
    assert_eq!(rig.host.immersive_applications(), 1);
}

#[tokio::test(start_paused = true)]
async fn notifications_wait_behind_a_pending_restore() {
    let rig = HeadlessRig::new();
    let session = rig.open(OverlayOptions::default());
    rig.host.clear_calls();

    rig.bus.publish(PipModeChanged::returned());
    rig.bus.publish(PipModeChanged::entered());
    drain().await;
    assert!(!session.is_in_pip());

    advance_ms(501).await;
    assert_eq!(rig.host.immersive_applications(), 1);
    assert!(session.is_in_pip());
}

#[tokio::test(start_paused = true)]
async fn bus_stays_subscribed_until_exit() {
    let rig = HeadlessRig::new();
    let session = rig.open(OverlayOptions::default());
    assert_eq!(rig.bus.subscriber_count(), 1);

    session.exit();
    drain().await;

    assert_eq!(rig.bus.subscriber_count(), 0);
}
