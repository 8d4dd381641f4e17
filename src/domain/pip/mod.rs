// SPDX-License-Identifier: MPL-2.0
//! Picture-in-Picture domain types.
//!
//! - [`AspectRatio`]: reduced rational handed to the host when requesting PiP
//! - [`LifecycleState`] and [`PipModeChanged`]: the notification the host
//!   publishes whenever PiP membership changes

pub mod aspect_ratio;
pub mod lifecycle;

pub use aspect_ratio::AspectRatio;
pub use lifecycle::{LifecycleState, PipModeChanged};
