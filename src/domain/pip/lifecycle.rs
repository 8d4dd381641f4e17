// SPDX-License-Identifier: MPL-2.0
//! PiP mode change notification.

/// Lifecycle state of the host activity at the time of a PiP notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Host exists but is not visible. Reported while it is being torn
    /// down or recreated behind a PiP window.
    Created,
    /// Host is visible.
    Started,
    /// Host is visible and focused.
    Resumed,
    /// Host is visible but lost focus.
    Paused,
    /// Host is gone.
    Destroyed,
}

impl LifecycleState {
    /// Returns true when the host is no longer visible and playback must
    /// not continue from it.
    #[must_use]
    pub fn requires_pause(self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Published by the host whenever its PiP membership changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipModeChanged {
    /// Whether the host is now in PiP mode.
    pub is_in_picture_in_picture_mode: bool,
    /// Host lifecycle state when the change was reported.
    pub lifecycle_state: LifecycleState,
}

impl PipModeChanged {
    #[must_use]
    pub fn new(is_in_picture_in_picture_mode: bool, lifecycle_state: LifecycleState) -> Self {
        Self {
            is_in_picture_in_picture_mode,
            lifecycle_state,
        }
    }

    /// PiP entered while the host is visible.
    #[must_use]
    pub fn entered() -> Self {
        Self::new(true, LifecycleState::Started)
    }

    /// PiP left and the host is back in the foreground.
    #[must_use]
    pub fn returned() -> Self {
        Self::new(false, LifecycleState::Resumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_created_requires_pause() {
        assert!(LifecycleState::Created.requires_pause());
        for state in [
            LifecycleState::Started,
            LifecycleState::Resumed,
            LifecycleState::Paused,
            LifecycleState::Destroyed,
        ] {
            assert!(!state.requires_pause(), "{state:?}");
        }
    }

    #[test]
    fn helpers_build_expected_events() {
        assert!(PipModeChanged::entered().is_in_picture_in_picture_mode);
        let back = PipModeChanged::returned();
        assert!(!back.is_in_picture_in_picture_mode);
        assert_eq!(back.lifecycle_state, LifecycleState::Resumed);
    }
}
