// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the capabilities the overlay consumes. Platform
//! bindings implement them; [`crate::infrastructure::headless`] provides
//! in-memory implementations.
//!
//! # Available Ports
//!
//! - [`player`]: Playback commands, queries and event listeners
//! - [`surface`]: Rendering-surface ownership handoff
//! - [`host`]: Host window (orientation, system UI, PiP entry)
//! - [`view`]: On-screen controls of the fullscreen player view
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Traits are `Send + Sync`: the PiP listener runs on a spawned task
//! - Every call is synchronous; the host is expected to dispatch onto its
//!   UI thread where needed

pub mod host;
pub mod player;
pub mod surface;
pub mod view;

// Re-export main types for convenience
pub use host::{HostError, HostWindow};
pub use player::{ListenerId, Player, PlayerListener};
pub use surface::{SurfaceOwnership, ViewController};
pub use view::{Control, PlayerControls};
