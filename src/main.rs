// SPDX-License-Identifier: MPL-2.0
//! `overlay-sim`: runs a scripted fullscreen session against the headless
//! adapters and prints what the overlay asked of the host.

use fullscreen_overlay::config;
use fullscreen_overlay::domain::pip::{LifecycleState, PipModeChanged};
use fullscreen_overlay::domain::ui::SettleDelay;
use fullscreen_overlay::domain::video::{PlaybackState, VideoSize};
use fullscreen_overlay::infrastructure::HeadlessRig;
use fullscreen_overlay::overlay::{OverlayOptions, TouchEvent};
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy)]
enum Scenario {
    Swipe,
    PipReturn,
    PipExit,
    OwnershipLost,
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "swipe" => Ok(Self::Swipe),
            "pip-return" => Ok(Self::PipReturn),
            "pip-exit" => Ok(Self::PipExit),
            "ownership-lost" => Ok(Self::OwnershipLost),
            other => Err(format!("unknown scenario: {other}")),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), pico_args::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fullscreen_overlay=debug")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let loaded = config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "could not load overlay config, using defaults");
        config::OverlayConfig::default()
    });
    let mut options = OverlayOptions::from(&loaded);
    if args.contains("--no-landscape") {
        options.force_landscape = false;
    }
    if args.contains("--no-pip") {
        options.pip_on_leave = false;
    }
    if let Some(millis) = args.opt_value_from_str::<_, u32>("--settle-ms")? {
        options.settle_delay = SettleDelay::from_millis(millis);
    }
    let live = args.contains("--live");
    let scenario: Scenario = args
        .opt_free_from_str()?
        .unwrap_or(Scenario::Swipe);

    let rig = HeadlessRig::new();
    rig.player.set_live(live);
    rig.player.set_video_size(VideoSize::new(1920, 1080));

    let session = rig.open(options);
    session.set_on_exit(|| tracing::info!("exit listener called"));
    rig.player
        .emit_playback_state_changed(PlaybackState::Ready);
    rig.player.emit_is_playing_changed(true);

    let settle = options.settle_delay.as_duration() + Duration::from_millis(50);
    match scenario {
        Scenario::Swipe => {
            session.on_touch(TouchEvent::Down { x: 200.0, y: 50.0 });
            session.on_touch(TouchEvent::Move { x: 210.0, y: 900.0 });
            session.on_touch(TouchEvent::Up { x: 210.0, y: 950.0 });
        }
        Scenario::PipReturn => {
            session.on_pip_button();
            rig.bus.publish(PipModeChanged::entered());
            rig.bus
                .publish(PipModeChanged::new(false, LifecycleState::Resumed));
            tokio::time::sleep(settle).await;
            session.on_exit_button();
        }
        Scenario::PipExit => {
            session.enter_picture_in_picture_with_exit(true);
            rig.bus.publish(PipModeChanged::entered());
            rig.bus.publish(PipModeChanged::returned());
            tokio::time::sleep(settle).await;
        }
        Scenario::OwnershipLost => {
            rig.ownership.reclaim();
        }
    }

    for call in rig.host.calls() {
        println!("{call:?}");
    }
    let system_ui = rig.host.system_ui();
    println!(
        "system_ui={:?} bars_hidden={} released={} embedded_rendering={} pauses={}",
        system_ui,
        system_ui.hides_system_bars(),
        session.is_released(),
        rig.ownership.embedded_rendering(),
        rig.player.pause_count()
    );
    Ok(())
}
