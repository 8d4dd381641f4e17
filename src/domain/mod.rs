// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Value types with ZERO external dependencies.
//!
//! This module contains pure domain types and the rules attached to them.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`pip`]: Picture-in-Picture types ([`AspectRatio`](pip::AspectRatio),
//!   [`PipModeChanged`](pip::PipModeChanged))
//! - [`ui`]: Overlay tuning values ([`SettleDelay`](ui::SettleDelay),
//!   [`SwipeThreshold`](ui::SwipeThreshold))
//! - [`video`]: Player-facing types ([`PlaybackState`](video::PlaybackState),
//!   [`VideoSize`](video::VideoSize), [`SurfaceHandle`](video::SurfaceHandle))
//! - [`window`]: Host window types ([`Orientation`](window::Orientation),
//!   [`SystemUiFlags`](window::SystemUiFlags))

pub mod pip;
pub mod ui;
pub mod video;
pub mod window;
