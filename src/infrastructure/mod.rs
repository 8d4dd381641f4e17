// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`headless`]: In-memory player, host window, ownership and controls
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Platform bindings live outside this crate and implement the same ports

pub mod headless;

// Re-export main types for convenience
pub use headless::{
    HeadlessControls, HeadlessHost, HeadlessOwnership, HeadlessPlayer, HeadlessRig, HostCall,
};
