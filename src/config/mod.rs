// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay configuration, including loading and saving
//! it to an `overlay.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use fullscreen_overlay::config::{self, OverlayConfig};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.settle_delay_ms = 750;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/overlay.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.settle_delay_ms, 750);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "overlay.toml";
const APP_NAME: &str = "FullscreenOverlay";

/// Persisted overlay settings. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub force_landscape: bool,
    pub pip_on_leave: bool,
    pub settle_delay_ms: u32,
    pub swipe_threshold_ratio: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            force_landscape: DEFAULT_FORCE_LANDSCAPE,
            pip_on_leave: DEFAULT_PIP_ON_LEAVE,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            swipe_threshold_ratio: DEFAULT_SWIPE_THRESHOLD_RATIO,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<OverlayConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(OverlayConfig::default())
}

pub fn save(config: &OverlayConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<OverlayConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid overlay config, using defaults");
            Ok(OverlayConfig::default())
        }
    }
}

pub fn save_to_path(config: &OverlayConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
