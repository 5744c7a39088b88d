// SPDX-License-Identifier: MPL-2.0
//! Persisted user preferences for the controls, stored in `settings.toml`
//! under the platform config directory.
//!
//! Every field is optional; anything missing falls back to the built-in
//! defaults. A file that does not parse is logged and replaced by defaults.
//!
//! ```toml
//! [general]
//! language = "fr"
//!
//! [controls]
//! fps = 24.0
//! looping = false
//! slider_color = "#3366ff"
//! show_speed_controls = false
//! frame_clock = "interval"
//! ```
//!
//! ```no_run
//! use video_time_controls::config;
//!
//! let mut settings = config::load().unwrap_or_default();
//! settings.controls.fps = Some(24.0);
//! config::save(&settings).expect("settings directory is writable");
//! ```

mod defaults;

pub use defaults::*;

use crate::controls::FrameClockPreference;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "VideoTimeControls";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub controls: ControlsPreferences,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub language: Option<String>,
}

/// User-level defaults applied on top of the built-in control options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsPreferences {
    #[serde(default)]
    pub fps: Option<f64>,
    #[serde(default)]
    pub play_on_load: Option<bool>,
    #[serde(default)]
    pub looping: Option<bool>,
    #[serde(default)]
    pub slider_color: Option<String>,
    #[serde(default)]
    pub show_timestamps: Option<bool>,
    #[serde(default)]
    pub show_speed_controls: Option<bool>,
    #[serde(default)]
    pub show_fullscreen_controls: Option<bool>,
    #[serde(default)]
    pub frame_clock: FrameClockPreference,
}

impl Default for ControlsPreferences {
    fn default() -> Self {
        Self {
            fps: Some(DEFAULT_FPS),
            play_on_load: Some(true),
            looping: Some(true),
            slider_color: Some(DEFAULT_SLIDER_COLOR.to_string()),
            show_timestamps: Some(true),
            show_speed_controls: Some(true),
            show_fullscreen_controls: Some(true),
            frame_clock: FrameClockPreference::default(),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = settings_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = settings_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_controls() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.controls.fps = Some(30.0);
        config.controls.show_speed_controls = Some(false);
        config.controls.frame_clock = FrameClockPreference::Interval;

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.general.language.is_none());
        assert_eq!(loaded.controls, ControlsPreferences::default());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
            .expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.controls.fps, Some(DEFAULT_FPS));
        assert_eq!(loaded.controls.frame_clock, FrameClockPreference::Auto);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
