// SPDX-License-Identifier: MPL-2.0
//! Construction and reload options of the controls.

use super::device::DeviceClass;
use super::fullscreen::FullscreenCapabilities;
use super::update_loop::FrameClockPreference;
use crate::config::{ControlsPreferences, CONTROLS_ID_PREFIX, DEFAULT_FPS, DEFAULT_SLIDER_COLOR};

/// Options recognized when building [`VideoTimeControls`](super::VideoTimeControls).
///
/// Only `video_id` is required; [`ControlsConfig::new`] fills every other
/// field with its default.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsConfig {
    /// Identifier of the host video surface the controls are mounted on.
    pub video_id: String,
    /// Identifier of the controls container. Generated when `None`.
    pub id: Option<String>,
    pub fps: f64,
    pub play_on_load: bool,
    /// Loop flag applied to the surface; `None` means loop.
    pub looping: Option<bool>,
    /// Per-frame capture time labels.
    pub capture_times: Option<Vec<String>>,
    /// Start of the synthesized capture times, in ms since the epoch.
    pub start_time_ms: Option<f64>,
    /// Accent color of the scrubber's filled range (name or `#rrggbb`).
    pub slider_color: String,
    pub show_timestamps: bool,
    pub show_speed_controls: bool,
    pub show_fullscreen_controls: bool,
    /// Reserved: seconds to hold the first frame. Stored, no behavior yet.
    pub start_dwell: f64,
    /// Reserved: seconds to hold the last frame. Stored, no behavior yet.
    pub end_dwell: f64,
    pub frame_clock: FrameClockPreference,
    /// Whether the host delivers display refresh ticks.
    pub display_refresh_available: bool,
    /// Device class override. When `None`, derived from `user_agent`, or
    /// from the platform when that is unset too.
    pub device: Option<DeviceClass>,
    /// User agent of an embedding web view, if any.
    pub user_agent: Option<String>,
    pub fullscreen: FullscreenCapabilities,
}

impl ControlsConfig {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            id: None,
            fps: DEFAULT_FPS,
            play_on_load: true,
            looping: None,
            capture_times: None,
            start_time_ms: None,
            slider_color: DEFAULT_SLIDER_COLOR.to_string(),
            show_timestamps: true,
            show_speed_controls: true,
            show_fullscreen_controls: true,
            start_dwell: 0.0,
            end_dwell: 0.0,
            frame_clock: FrameClockPreference::default(),
            display_refresh_available: true,
            device: None,
            user_agent: None,
            fullscreen: FullscreenCapabilities::native_window(),
        }
    }

    /// Applies persisted user preferences over the current values.
    #[must_use]
    pub fn with_preferences(mut self, preferences: &ControlsPreferences) -> Self {
        if let Some(fps) = preferences.fps {
            self.fps = fps;
        }
        if let Some(play_on_load) = preferences.play_on_load {
            self.play_on_load = play_on_load;
        }
        if preferences.looping.is_some() {
            self.looping = preferences.looping;
        }
        if let Some(color) = &preferences.slider_color {
            self.slider_color.clone_from(color);
        }
        if let Some(show) = preferences.show_timestamps {
            self.show_timestamps = show;
        }
        if let Some(show) = preferences.show_speed_controls {
            self.show_speed_controls = show;
        }
        if let Some(show) = preferences.show_fullscreen_controls {
            self.show_fullscreen_controls = show;
        }
        self.frame_clock = preferences.frame_clock;
        self
    }

    /// Device class the controls lay themselves out for.
    #[must_use]
    pub fn device_class(&self) -> DeviceClass {
        self.device
            .or_else(|| self.user_agent.as_deref().map(DeviceClass::from_user_agent))
            .unwrap_or_else(DeviceClass::detect)
    }

    /// Container id, generating a timestamped one when none was given.
    #[must_use]
    pub fn container_id(&self) -> String {
        self.id.clone().unwrap_or_else(|| {
            format!(
                "{}{}",
                CONTROLS_ID_PREFIX,
                chrono::Utc::now().timestamp_millis()
            )
        })
    }
}

/// Options for [`VideoTimeControls::load_new_video`](super::VideoTimeControls::load_new_video).
///
/// Unset fields keep their current values.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    pub src: String,
    pub fps: Option<f64>,
    pub play_on_load: Option<bool>,
    pub looping: Option<bool>,
}

impl LoadOptions {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            fps: None,
            play_on_load: None,
            looping: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ControlsConfig::new("video");
        assert_eq!(config.video_id, "video");
        assert_eq!(config.fps, 12.0);
        assert!(config.play_on_load);
        assert_eq!(config.looping, None);
        assert_eq!(config.slider_color, "red");
        assert!(config.show_timestamps);
        assert!(config.show_speed_controls);
        assert!(config.show_fullscreen_controls);
        assert_eq!(config.start_dwell, 0.0);
    }

    #[test]
    fn user_agent_decides_the_device_class() {
        let config = ControlsConfig {
            user_agent: Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)".into()),
            ..ControlsConfig::new("video")
        };
        assert_eq!(config.device_class(), DeviceClass::Mobile);

        let config = ControlsConfig {
            user_agent: Some("Mozilla/5.0 (X11; CrOS x86_64 14541.0.0) Android".into()),
            ..ControlsConfig::new("video")
        };
        assert_eq!(config.device_class(), DeviceClass::Desktop);
    }

    #[test]
    fn explicit_device_wins_over_user_agent() {
        let config = ControlsConfig {
            device: Some(DeviceClass::Desktop),
            user_agent: Some("Mozilla/5.0 (Linux; Android 14; Pixel 8)".into()),
            ..ControlsConfig::new("video")
        };
        assert_eq!(config.device_class(), DeviceClass::Desktop);
    }

    #[test]
    fn generated_id_has_prefix() {
        let id = ControlsConfig::new("video").container_id();
        assert!(id.starts_with(CONTROLS_ID_PREFIX));
        assert!(id[CONTROLS_ID_PREFIX.len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn explicit_id_is_kept() {
        let config = ControlsConfig {
            id: Some("timeline".into()),
            ..ControlsConfig::new("video")
        };
        assert_eq!(config.container_id(), "timeline");
    }

    #[test]
    fn preferences_override_defaults() {
        let preferences = ControlsPreferences {
            fps: Some(24.0),
            play_on_load: Some(false),
            looping: Some(false),
            slider_color: Some("#3366ff".into()),
            show_timestamps: None,
            show_speed_controls: Some(false),
            show_fullscreen_controls: None,
            frame_clock: FrameClockPreference::Interval,
        };
        let config = ControlsConfig::new("video").with_preferences(&preferences);
        assert_eq!(config.fps, 24.0);
        assert!(!config.play_on_load);
        assert_eq!(config.looping, Some(false));
        assert_eq!(config.slider_color, "#3366ff");
        assert!(config.show_timestamps);
        assert!(!config.show_speed_controls);
        assert_eq!(config.frame_clock, FrameClockPreference::Interval);
    }
}
