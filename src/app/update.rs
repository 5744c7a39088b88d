// SPDX-License-Identifier: MPL-2.0
//! Side effects requested by the controls.

use super::Message;
use crate::controls::{self, Effect};
use iced::keyboard::Key;
use iced::{window, Task};

/// Turns a controls [`Effect`] into a window task.
///
/// Native fullscreen changes are followed by a query of the window mode; the
/// controls only flip their state once the reported mode differs from theirs
/// (see [`fullscreen_change`]).
pub fn apply_effect(effect: Effect, window_id: Option<window::Id>) -> Task<Message> {
    let mode = match effect {
        Effect::None => return Task::none(),
        Effect::EnterFullscreen => window::Mode::Fullscreen,
        Effect::ExitFullscreen => window::Mode::Windowed,
    };

    let Some(window_id) = window_id else {
        tracing::warn!(?mode, "no window known yet, fullscreen request dropped");
        return Task::none();
    };

    window::set_mode(window_id, mode).chain(query_mode(window_id))
}

/// Asks the window for its current mode.
pub fn query_mode(window_id: window::Id) -> Task<Message> {
    window::mode(window_id).map(Message::WindowMode)
}

/// The change message to send the controls when the window reports `mode`,
/// or `None` when they already agree.
#[must_use]
pub fn fullscreen_change(
    mode: window::Mode,
    controls_fullscreen: bool,
) -> Option<controls::Message> {
    let window_fullscreen = mode == window::Mode::Fullscreen;
    (window_fullscreen != controls_fullscreen).then_some(controls::Message::FullscreenChanged)
}

/// Whether `key` asks the demo to load the next synthetic clip.
#[must_use]
pub fn is_next_clip_key(key: &Key) -> bool {
    matches!(key.as_ref(), Key::Character(c) if c.eq_ignore_ascii_case("n"))
}

/// Source name of the `index`-th synthetic clip.
#[must_use]
pub fn clip_source(index: u32) -> String {
    format!("synthetic://pattern/{index}")
}
