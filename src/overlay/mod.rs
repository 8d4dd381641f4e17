// SPDX-License-Identifier: MPL-2.0
//! Fullscreen overlay session.
//!
//! A [`FullscreenOverlay`] is opened when the user asks for fullscreen and
//! lives until [`FullscreenOverlay::exit`]. While open it:
//!
//! - keeps the host window immersive ([`window_state`])
//! - owns the shared rendering surface ([`surface`])
//! - mirrors live/VOD onto the controls ([`live_ui`])
//! - follows PiP notifications from the event bus ([`pip`])
//! - dismisses itself on a top-to-bottom swipe ([`gesture`])
//!
//! Exit can be reached from the swipe, the exit and fullscreen buttons,
//! the player reclaiming the surface, and the PiP listener. All of them
//! funnel into the same teardown, which runs once.
//!
//! # Example
//!
//! ```ignore
//! let bus = EventBus::default();
//! let session = FullscreenOverlay::open(ports, OverlayOptions::default(), &bus);
//! session.set_on_exit(|| println!("back to embedded view"));
//! session.on_touch(TouchEvent::Down { x: 0.0, y: 0.0 });
//! session.on_touch(TouchEvent::Up { x: 0.0, y: 900.0 }); // exits
//! ```

pub mod gesture;
pub mod live_ui;
pub mod pip;
pub mod surface;
pub mod window_state;

pub use gesture::{Swipe, SwipeDetector, TouchEvent};
pub use live_ui::{LiveUiAdapter, StreamKind};
pub use pip::{PipFollowUp, PipLifecycle, PipReaction};
pub use surface::{SurfaceCoordinator, SurfaceError};
pub use window_state::WindowStateManager;

use crate::application::port::{
    Control, HostWindow, ListenerId, Player, PlayerControls, PlayerListener, SurfaceOwnership,
    ViewController,
};
use crate::config::{OverlayConfig, DEFAULT_FORCE_LANDSCAPE, DEFAULT_PIP_ON_LEAVE};
use crate::domain::pip::{AspectRatio, PipModeChanged};
use crate::domain::ui::{SettleDelay, SwipeThreshold};
use crate::domain::video::{MediaItem, PlaybackState, TransitionReason};
use crate::domain::window::Orientation;
use crate::event_bus::EventBus;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tokio_util::sync::CancellationToken;

/// Callback run once when the session exits.
pub type ExitListener = Box<dyn FnOnce() + Send>;

/// Construction parameters of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayOptions {
    /// Lock the host to landscape on open.
    pub force_landscape: bool,
    /// Let the host enter PiP on its own when the user leaves.
    pub pip_on_leave: bool,
    pub settle_delay: SettleDelay,
    pub swipe_threshold: SwipeThreshold,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            force_landscape: DEFAULT_FORCE_LANDSCAPE,
            pip_on_leave: DEFAULT_PIP_ON_LEAVE,
            settle_delay: SettleDelay::default(),
            swipe_threshold: SwipeThreshold::default(),
        }
    }
}

impl From<&OverlayConfig> for OverlayOptions {
    fn from(config: &OverlayConfig) -> Self {
        Self {
            force_landscape: config.force_landscape,
            pip_on_leave: config.pip_on_leave,
            settle_delay: SettleDelay::from_millis(config.settle_delay_ms),
            swipe_threshold: SwipeThreshold::new(config.swipe_threshold_ratio),
        }
    }
}

/// Collaborators a session talks to.
#[derive(Clone)]
pub struct OverlayPorts {
    pub player: Arc<dyn Player>,
    pub ownership: Arc<dyn SurfaceOwnership>,
    pub host: Arc<dyn HostWindow>,
    pub controls: Arc<dyn PlayerControls>,
}

pub struct FullscreenOverlay {
    options: OverlayOptions,
    player: Arc<dyn Player>,
    host: Arc<dyn HostWindow>,
    controls: Arc<dyn PlayerControls>,
    window: WindowStateManager,
    surface: SurfaceCoordinator,
    live_ui: LiveUiAdapter,
    pip: PipLifecycle,
    swipe: Mutex<SwipeDetector>,
    on_exit: Mutex<Option<ExitListener>>,
    player_listener: Mutex<Option<ListenerId>>,
    /// Held across the released check and the window writes that depend
    /// on it. `released` only flips to true under this lock.
    window_guard: Mutex<()>,
    released: AtomicBool,
    cancel: CancellationToken,
}

impl FullscreenOverlay {
    /// Opens a session: goes immersive, takes the surface, wires the
    /// controls, and starts listening to the player and to `bus`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime, since the PiP listener is
    /// spawned onto the current one.
    pub fn open(ports: OverlayPorts, options: OverlayOptions, bus: &EventBus) -> Arc<Self> {
        let window = WindowStateManager::capture(ports.host.clone());
        let swipe_distance = options
            .swipe_threshold
            .distance_for(ports.host.window_height());

        let session = Arc::new(Self {
            options,
            window,
            surface: SurfaceCoordinator::new(ports.ownership),
            live_ui: LiveUiAdapter::new(ports.controls.clone()),
            pip: PipLifecycle::new(),
            swipe: Mutex::new(SwipeDetector::new(swipe_distance)),
            on_exit: Mutex::new(None),
            player_listener: Mutex::new(None),
            window_guard: Mutex::new(()),
            released: AtomicBool::new(false),
            cancel: CancellationToken::new(),
            player: ports.player,
            host: ports.host,
            controls: ports.controls,
        });
        tracing::info!(
            force_landscape = options.force_landscape,
            pip_on_leave = options.pip_on_leave,
            settle_delay_ms = options.settle_delay.as_millis(),
            "opening fullscreen overlay"
        );

        session.window.enter_immersive(options.force_landscape);

        let controller: Arc<dyn ViewController> = session.clone();
        if let Err(err) = session
            .surface
            .acquire(session.controls.surface(), controller)
        {
            tracing::warn!(%err, "could not take the rendering surface");
        }

        session
            .controls
            .set_control_visible(Control::ExitButton, true);
        if session.host.supports_picture_in_picture() {
            session.controls.set_control_visible(Control::PipButton, true);
        }

        session
            .live_ui
            .set_live_ui_enabled(session.player.is_live());
        let listener = Arc::new(SessionPlayerListener {
            session: Arc::downgrade(&session),
        });
        *session.player_listener.lock() = Some(session.player.add_listener(listener));

        pip::spawn_listener(
            Arc::downgrade(&session),
            bus.subscribe(),
            session.cancel.clone(),
            options.settle_delay.as_duration(),
        );

        session
    }

    /// Sets the callback run when the session exits, replacing any
    /// previous one.
    pub fn set_on_exit(&self, listener: impl FnOnce() + Send + 'static) {
        *self.on_exit.lock() = Some(Box::new(listener));
    }

    #[must_use]
    pub fn options(&self) -> OverlayOptions {
        self.options
    }

    #[must_use]
    pub fn prior_orientation(&self) -> Orientation {
        self.window.prior_orientation()
    }

    /// Last PiP membership reported on the event bus.
    #[must_use]
    pub fn is_in_pip(&self) -> bool {
        self.pip.is_in_pip()
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn stream_kind(&self) -> Option<StreamKind> {
        self.live_ui.current()
    }

    /// Leaves fullscreen: restores the window, runs the exit listener and
    /// hands the surface back. Only the first call does anything.
    pub fn exit(&self) {
        {
            let _window = self.window_guard.lock();
            if self.released.swap(true, Ordering::SeqCst) {
                tracing::debug!("fullscreen overlay already released");
                return;
            }
            tracing::info!("exiting fullscreen overlay");
            self.window.exit_immersive();
        }

        let listener = self.on_exit.lock().take();
        if let Some(listener) = listener {
            listener();
        }
        self.release();
    }

    fn release(&self) {
        if let Err(err) = self.surface.release() {
            tracing::warn!(%err, "surface release skipped");
        }
        self.cancel.cancel();
        let listener = self.player_listener.lock().take();
        if let Some(id) = listener {
            self.player.remove_listener(id);
        }
    }

    /// Requests PiP; leaving it later closes the session when `exit_after`.
    pub fn enter_picture_in_picture_with_exit(&self, exit_after: bool) {
        self.pip.set_exit_after_pip(exit_after);
        self.request_picture_in_picture();
    }

    fn request_picture_in_picture(&self) {
        if self.is_released() {
            return;
        }
        if !self.host.supports_picture_in_picture() {
            tracing::warn!("picture-in-picture requested but not supported by the host");
            return;
        }

        let aspect_ratio = AspectRatio::for_video(self.player.video_size());
        tracing::debug!(%aspect_ratio, "entering picture-in-picture");
        match self.host.enter_picture_in_picture(aspect_ratio) {
            Ok(()) => self.controls.hide_controller(),
            Err(err) => tracing::warn!(%err, "picture-in-picture request failed"),
        }
    }

    // -------------------------------------------------------------------------
    // User input
    // -------------------------------------------------------------------------

    /// Feeds a touch on the video surface to the swipe detector.
    pub fn on_touch(&self, event: TouchEvent) {
        if self.is_released() {
            return;
        }
        let swipe = self.swipe.lock().on_touch(event);
        if swipe == Some(Swipe::TopToBottom) {
            self.exit();
        }
    }

    pub fn on_exit_button(&self) {
        self.player.pause();
        self.exit();
    }

    /// The player's own fullscreen toggle, which here means "leave".
    pub fn on_fullscreen_button(&self) {
        self.player.pause();
        self.exit();
    }

    pub fn on_pip_button(&self) {
        self.request_picture_in_picture();
    }

    // -------------------------------------------------------------------------
    // Player events
    // -------------------------------------------------------------------------

    fn on_is_playing_changed(&self, is_playing: bool) {
        if self.is_released() {
            return;
        }
        self.controls.set_keep_screen_on(is_playing);
    }

    fn on_media_item_transition(&self) {
        if self.is_released() {
            return;
        }
        self.live_ui.on_media_item_transition(self.player.is_live());
    }

    fn on_playback_state_changed(&self) {
        if self.is_released() {
            return;
        }
        self.live_ui.on_playback_state_changed(self.player.is_live());
    }

    // -------------------------------------------------------------------------
    // PiP events
    // -------------------------------------------------------------------------

    pub(crate) fn handle_pip_event(&self, event: &PipModeChanged) -> PipFollowUp {
        let reaction = {
            let _window = self.window_guard.lock();
            if self.is_released() {
                return PipFollowUp::None;
            }
            tracing::debug!(
                in_pip = event.is_in_picture_in_picture_mode,
                lifecycle = ?event.lifecycle_state,
                "picture-in-picture mode changed"
            );

            let reaction = self.pip.on_mode_changed(event);
            if reaction.pause {
                self.player.pause();
            }
            reaction
        };
        match reaction.follow_up {
            PipFollowUp::Exit => {
                self.exit();
                PipFollowUp::None
            }
            other => other,
        }
    }

    /// Leaving PiP drops the immersive flags; put them back, always in
    /// landscape.
    pub(crate) fn restore_fullscreen_after_pip(&self) {
        let _window = self.window_guard.lock();
        if self.is_released() {
            return;
        }
        self.window.enter_immersive(true);
    }
}

impl ViewController for FullscreenOverlay {
    fn on_ownership_lost(&self) {
        tracing::debug!("surface ownership lost");
        self.exit();
    }

    fn exit_fullscreen(&self) {
        self.exit();
    }

    fn enter_picture_in_picture(&self) {
        self.request_picture_in_picture();
    }

    fn is_fullscreen(&self) -> bool {
        true
    }

    fn should_pip_automatically(&self) -> bool {
        self.options.pip_on_leave
    }
}

/// Forwards player events without keeping the session alive.
struct SessionPlayerListener {
    session: Weak<FullscreenOverlay>,
}

impl PlayerListener for SessionPlayerListener {
    fn on_is_playing_changed(&self, is_playing: bool) {
        if let Some(session) = self.session.upgrade() {
            session.on_is_playing_changed(is_playing);
        }
    }

    fn on_media_item_transition(&self, _item: Option<&MediaItem>, _reason: TransitionReason) {
        if let Some(session) = self.session.upgrade() {
            session.on_media_item_transition();
        }
    }

    fn on_playback_state_changed(&self, _state: PlaybackState) {
        if let Some(session) = self.session.upgrade() {
            session.on_playback_state_changed();
        }
    }
}
