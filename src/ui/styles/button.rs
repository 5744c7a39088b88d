// SPDX-License-Identifier: MPL-2.0
//! Controls bar button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::WHITE,
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Icon button on the controls bar: transparent until hovered.
pub fn control(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..WHITE
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..WHITE
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        snap: true,
        ..button::Style::default()
    }
}

/// Speed toggle; `visibility` fades the outgoing button while it slides out.
pub fn speed(visibility: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = control(theme, status);
        button::Style {
            text_color: Color {
                a: visibility.clamp(0.0, 1.0),
                ..base.text_color
            },
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM * visibility,
                    ..WHITE
                },
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..base
        }
    }
}
