//! Game settings
//!
//! Read once at startup from `pong.json` in the working directory. The
//! physics constants in `consts` are not configurable.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::renderer::Color;

/// Default settings file, relative to the working directory
pub const SETTINGS_FILE: &str = "pong.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Draw colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLUE,
            foreground: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub window_title: String,
    pub palette: Palette,
    /// Balls in play (clamped to `1..=MAX_BALLS`)
    pub ball_count: usize,
    /// Seed for extra ball velocities
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Pong".to_string(),
            palette: Palette::default(),
            ball_count: 1,
            seed: 0,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `pong.json`, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            log::info!("No {} found, using default settings", SETTINGS_FILE);
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", SETTINGS_FILE);
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }
}
