// SPDX-License-Identifier: MPL-2.0
//! Plugin-wide event bus.
//!
//! Host lifecycle notifications are published here by whoever owns the
//! host binding and fanned out to every subscriber. A fullscreen session
//! subscribes when it opens and only looks at
//! [`PluginEvent::PictureInPictureModeChanged`].

use crate::config::DEFAULT_EVENT_BUS_CAPACITY;
use crate::domain::pip::PipModeChanged;
use tokio::sync::broadcast;

/// Notifications carried by the bus.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginEvent {
    /// The host entered or left PiP.
    PictureInPictureModeChanged(PipModeChanged),
    /// The plugin was attached to a host activity.
    AttachedToActivity,
    /// The plugin was detached from its host activity.
    DetachedFromActivity,
    /// The user is leaving the host (home button, app switch).
    UserLeaveHint,
}

impl PluginEvent {
    /// Returns the PiP payload if this is a PiP mode change.
    #[must_use]
    pub fn as_pip_mode_changed(&self) -> Option<PipModeChanged> {
        match self {
            Self::PictureInPictureModeChanged(event) => Some(*event),
            _ => None,
        }
    }
}

impl From<PipModeChanged> for PluginEvent {
    fn from(event: PipModeChanged) -> Self {
        Self::PictureInPictureModeChanged(event)
    }
}

/// Multi-producer, multi-consumer bus. Cloning shares the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<PluginEvent>,
}

impl EventBus {
    /// Creates a bus buffering `capacity` events per subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an event. Returns how many subscribers will see it.
    pub fn publish(&self, event: impl Into<PluginEvent>) -> usize {
        // Err only means nobody is listening.
        self.sender.send(event.into()).unwrap_or(0)
    }

    /// Subscribes to events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PluginEvent> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUS_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pip::LifecycleState;

    #[test]
    fn publish_without_subscribers_returns_zero() {
        let bus = EventBus::default();
        assert_eq!(bus.publish(PluginEvent::UserLeaveHint), 0);
    }

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let bus = EventBus::default();
        let mut first = bus.subscribe();
        let mut second = bus.clone().subscribe();

        let event = PipModeChanged::new(true, LifecycleState::Started);
        assert_eq!(bus.publish(event), 2);

        assert_eq!(
            first.recv().await.unwrap(),
            PluginEvent::PictureInPictureModeChanged(event)
        );
        assert_eq!(second.recv().await.unwrap().as_pip_mode_changed(), Some(event));
    }

    #[test]
    fn only_pip_events_expose_payload() {
        assert!(PluginEvent::AttachedToActivity.as_pip_mode_changed().is_none());
        assert!(PluginEvent::DetachedFromActivity.as_pip_mode_changed().is_none());
    }

    #[test]
    fn subscriber_count_tracks_receivers() {
        let bus = EventBus::new(4);
        let receiver = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        drop(receiver);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
