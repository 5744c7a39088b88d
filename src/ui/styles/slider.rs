// SPDX-License-Identifier: MPL-2.0
//! Scrubber style and accent color parsing.

use crate::ui::design_tokens::{border, opacity, palette, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Named colors accepted for the scrubber accent.
const NAMED_COLORS: [(&str, Color); 12] = [
    ("red", Color::from_rgb(1.0, 0.0, 0.0)),
    ("green", Color::from_rgb(0.0, 0.502, 0.0)),
    ("blue", Color::from_rgb(0.0, 0.0, 1.0)),
    ("yellow", Color::from_rgb(1.0, 1.0, 0.0)),
    ("orange", Color::from_rgb(1.0, 0.647, 0.0)),
    ("purple", Color::from_rgb(0.502, 0.0, 0.502)),
    ("magenta", Color::from_rgb(1.0, 0.0, 1.0)),
    ("cyan", Color::from_rgb(0.0, 1.0, 1.0)),
    ("white", Color::WHITE),
    ("black", Color::BLACK),
    ("gray", Color::from_rgb(0.502, 0.502, 0.502)),
    ("grey", Color::from_rgb(0.502, 0.502, 0.502)),
];

/// Parses a color name or a `#rgb`/`#rrggbb` hex string.
///
/// ```
/// use video_time_controls::ui::styles::slider::parse_color;
/// use iced::Color;
///
/// assert_eq!(parse_color("red"), Some(Color::from_rgb(1.0, 0.0, 0.0)));
/// assert_eq!(parse_color("#00ff00"), Some(Color::from_rgb8(0, 255, 0)));
/// assert_eq!(parse_color("chartreuse-ish"), None);
/// ```
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, color)| *color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut digits = hex.chars().filter_map(|c| c.to_digit(16));
            let mut channel = || digits.next().map(|v| (v * 17) as u8);
            Some(Color::from_rgb8(channel()?, channel()?, channel()?))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::from_rgb8(r, g, b))
        }
        _ => None,
    }
}

/// Scrubber with `accent` filling the played range.
pub fn accent(accent: Color, handle_radius: f32) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |_theme: &Theme, status: slider::Status| {
        let handle_bg = match status {
            slider::Status::Hovered | slider::Status::Dragged => palette::WHITE,
            slider::Status::Active => palette::GRAY_100,
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (
                    Background::Color(accent),
                    Background::Color(Color {
                        a: opacity::OVERLAY_MEDIUM,
                        ..palette::GRAY_200
                    }),
                ),
                width: sizing::TIMELINE_TRACK,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: (sizing::TIMELINE_TRACK / 2.0).into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle {
                    radius: handle_radius,
                },
                background: Background::Color(handle_bg),
                border_width: border::WIDTH_SM,
                border_color: accent,
            },
        }
    }
}
