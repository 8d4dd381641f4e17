// SPDX-License-Identifier: MPL-2.0
//! Application layer - collaborator contracts.
//!
//! - [`port`]: Trait definitions (interfaces) for every collaborator the
//!   fullscreen overlay talks to
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The overlay controller only ever sees the ports
//!
//! # Example
//!
//! ```ignore
//! use fullscreen_overlay::application::port::{HostWindow, Player};
//!
//! // A platform binding implements the port traits
//! struct ActivityWindow { /* ... */ }
//! impl HostWindow for ActivityWindow { /* ... */ }
//! ```

pub mod port;
