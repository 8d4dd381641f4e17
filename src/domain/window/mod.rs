// SPDX-License-Identifier: MPL-2.0
//! Host window domain types.
//!
//! This module contains the values the overlay writes to (and reads from)
//! the host window: the requested screen orientation and the system-UI
//! visibility bitmask.

pub mod orientation;
pub mod system_ui;

pub use orientation::Orientation;
pub use system_ui::SystemUiFlags;
