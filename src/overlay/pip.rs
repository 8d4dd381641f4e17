// SPDX-License-Identifier: MPL-2.0
//! Picture-in-Picture lifecycle.
//!
//! [`PipLifecycle`] is the state machine over the two PiP flags. It decides
//! what a notification means; [`spawn_listener`] runs the bus subscription
//! and carries out the decisions on the session, including the settle
//! delay before fullscreen is restored.

use super::FullscreenOverlay;
use crate::domain::pip::PipModeChanged;
use crate::event_bus::PluginEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Weak;
use std::time::Duration;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio_util::sync::CancellationToken;

/// What to do after a PiP notification has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipFollowUp {
    /// Nothing further.
    None,
    /// Tear the session down.
    Exit,
    /// Re-apply immersive fullscreen once the window has settled.
    RestoreFullscreen,
}

/// Reaction to one PiP notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipReaction {
    /// Pause playback now.
    pub pause: bool,
    pub follow_up: PipFollowUp,
}

#[derive(Debug, Default)]
pub struct PipLifecycle {
    is_in_pip: AtomicBool,
    exit_after_pip: AtomicBool,
}

impl PipLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last PiP membership reported by the host.
    #[must_use]
    pub fn is_in_pip(&self) -> bool {
        self.is_in_pip.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn exit_after_pip(&self) -> bool {
        self.exit_after_pip.load(Ordering::SeqCst)
    }

    /// Requests that leaving PiP closes the session instead of restoring
    /// fullscreen.
    pub fn set_exit_after_pip(&self, exit_after: bool) {
        self.exit_after_pip.store(exit_after, Ordering::SeqCst);
    }

    /// Records a notification and decides the reaction.
    ///
    /// A `Created` lifecycle state pauses regardless of PiP membership. On
    /// leaving PiP the one-shot exit request is consumed.
    pub fn on_mode_changed(&self, event: &PipModeChanged) -> PipReaction {
        self.is_in_pip
            .store(event.is_in_picture_in_picture_mode, Ordering::SeqCst);

        let pause = event.lifecycle_state.requires_pause();
        let follow_up = if event.is_in_picture_in_picture_mode {
            PipFollowUp::None
        } else if self.exit_after_pip.swap(false, Ordering::SeqCst) {
            PipFollowUp::Exit
        } else {
            PipFollowUp::RestoreFullscreen
        };

        PipReaction { pause, follow_up }
    }
}

/// Consumes PiP notifications for `session` until `cancel` fires, the bus
/// closes, or the session is dropped.
///
/// Notifications are handled one at a time; a pending settle delay holds
/// back the next one. Cancellation during the delay abandons it silently.
pub(crate) fn spawn_listener(
    session: Weak<FullscreenOverlay>,
    mut events: broadcast::Receiver<PluginEvent>,
    cancel: CancellationToken,
    settle_delay: Duration,
) {
    tokio::spawn(async move {
        loop {
            let received = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                received = events.recv() => received,
            };

            let event = match received {
                Ok(event) => match event.as_pip_mode_changed() {
                    Some(event) => event,
                    None => continue,
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "PiP listener lagged behind the event bus");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let follow_up = match session.upgrade() {
                Some(session) => session.handle_pip_event(&event),
                None => break,
            };
            if follow_up != PipFollowUp::RestoreFullscreen {
                continue;
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(settle_delay) => {}
            }
            match session.upgrade() {
                Some(session) => session.restore_fullscreen_after_pip(),
                None => break,
            }
        }
        tracing::debug!("PiP listener stopped");
    });
}
