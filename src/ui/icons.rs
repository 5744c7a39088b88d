// SPDX-License-Identifier: MPL-2.0
//! Controls bar icons.
//!
//! Icons are small white SVG documents embedded in the binary. Handles are
//! cached with `OnceLock` so every frame reuses the parsed document.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let play_button = button(icons::sized(icons::play(), 24.0));
//! ```

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const PLAY_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#ffffff" d="M7 4.5v15l12.5-7.5z"/></svg>"##;

const PAUSE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#ffffff" d="M6 4.5h4v15H6zM14 4.5h4v15h-4z"/></svg>"##;

const FULLSCREEN_ON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="none" stroke="#ffffff" stroke-width="2" d="M4 9V4h5M15 4h5v5M20 15v5h-5M9 20H4v-5"/></svg>"##;

const FULLSCREEN_OFF_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="none" stroke="#ffffff" stroke-width="2" d="M9 4v5H4M20 9h-5V4M15 20v-5h5M4 15h5v5"/></svg>"##;

define_icon!(play, PLAY_SVG, "Play icon: triangle pointing right.");
define_icon!(pause, PAUSE_SVG, "Pause icon: two vertical bars.");
define_icon!(
    fullscreen_on,
    FULLSCREEN_ON_SVG,
    "Enter fullscreen icon: four outward corners."
);
define_icon!(
    fullscreen_off,
    FULLSCREEN_OFF_SVG,
    "Exit fullscreen icon: four inward corners."
);

/// Sets a square icon size.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
