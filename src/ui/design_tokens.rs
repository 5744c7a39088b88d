// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants of the controls bar. Desktop and touch layouts draw from
the same scales; touch variants only ever enlarge a control.

## Organization

- **Palette**: Bar, tooltip and accent colors
- **Opacity**: Translucency of overlays drawn over the video
- **Spacing**: Gaps inside the bar (4px grid)
- **Sizing**: Buttons, scrubber and readout, with touch variants
- **Typography**: Label sizes
- **Border** / **Radius**: Tooltip and button outlines

## Examples

```
use video_time_controls::ui::design_tokens::{opacity, palette, sizing};
use iced::Color;

let bar_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::GRAY_900
};
assert!(bar_bg.a < 1.0);
assert!(sizing::TOUCH_TARGET > sizing::BUTTON_HEIGHT);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Bar background.
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    /// Unfilled scrubber rail.
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Default scrubber accent.
    pub const ACCENT_RED: Color = Color::from_rgb(1.0, 0.0, 0.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Hovered button wash.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Controls bar over the video.
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Tooltip body.
    pub const OVERLAY_PRESSED: f32 = 0.9;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    /// Padding between a button edge and its icon, both sides combined.
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Touch target of play, speed and fullscreen buttons on mobile.
    pub const TOUCH_TARGET: f32 = 60.0;

    // Scrubber
    pub const SCRUBBER_THUMB: f32 = 12.0;
    pub const SCRUBBER_THUMB_TOUCH: f32 = 30.0;
    pub const TIMELINE_TRACK: f32 = 4.0;

    // Capture time readout
    pub const READOUT_TEXT: f32 = 14.0;
    pub const READOUT_TEXT_TOUCH: f32 = 21.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Speed toggle labels.
    pub const BODY: f32 = 14.0;

    /// Tooltips.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_PRESSED < 1.0);

    // Touch variants must never shrink a control.
    assert!(sizing::TOUCH_TARGET > sizing::BUTTON_HEIGHT);
    assert!(sizing::SCRUBBER_THUMB_TOUCH > sizing::SCRUBBER_THUMB);
    assert!(sizing::READOUT_TEXT_TOUCH > sizing::READOUT_TEXT);

    // Icons are inset by MD inside the smallest button.
    assert!(sizing::BUTTON_HEIGHT > spacing::MD);

    assert!(typography::BODY > typography::CAPTION);
};
