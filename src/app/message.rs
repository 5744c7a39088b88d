// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::controls;
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the controls instance.
    Controls(controls::Message),
    /// A native event routed to the controls, tagged with its window.
    Routed {
        window: window::Id,
        message: controls::Message,
    },
    /// Clock tick advancing the synthetic clip.
    ClipFrame(Instant),
    /// Mode the window reported after a switch or resize.
    WindowMode(window::Mode),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    pub fps: Option<f64>,
    /// Length of the synthetic clip in seconds.
    pub duration: Option<f64>,
    /// Start of the synthesized capture times, in ms since the epoch.
    pub start_time_ms: Option<f64>,
    /// Per-frame capture time labels.
    pub capture_times: Option<Vec<String>>,
    pub no_autoplay: bool,
    pub no_loop: bool,
    /// Forces the fill-viewport fullscreen strategy.
    pub fill_screen: bool,
    pub hide_timestamps: bool,
    pub hide_speed: bool,
    pub hide_fullscreen: bool,
    /// User agent used to pick the desktop or touch layout.
    pub user_agent: Option<String>,
    /// Persist the preference flags to `settings.toml` on startup.
    pub save_settings: bool,
}
