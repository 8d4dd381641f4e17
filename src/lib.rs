// SPDX-License-Identifier: MPL-2.0
//! `fullscreen_overlay` moves a playing video into an immersive fullscreen
//! overlay and back, and carries it through Picture-in-Picture.
//!
//! The overlay coordinates collaborators it does not own: the host window,
//! the media player, the rendering-surface handoff, and the plugin event
//! bus. Each is reached through a port in [`application::port`]; the
//! session itself lives in [`overlay`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod event_bus;
pub mod infrastructure;
pub mod overlay;

pub use event_bus::{EventBus, PluginEvent};
pub use overlay::{FullscreenOverlay, OverlayOptions, OverlayPorts};
