// SPDX-License-Identifier: MPL-2.0
//! Which control groups are rendered and how big they are.

use super::device::DeviceClass;
use super::options::ControlsConfig;
use crate::config::{CONTROLS_BAR_HEIGHT, MOBILE_CONTROLS_BAR_HEIGHT};
use crate::ui::design_tokens::{sizing, spacing};

/// Placement of the scrubber and readout once optional groups are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Speed toggles and timestamp readout both shown.
    Standard,
    /// Speed toggles hidden; the readout moves next to the play button.
    NoSpeed,
    /// Neither shown; the scrubber starts right after the play button.
    NoTimestampsNoSpeed,
}

impl Placement {
    #[must_use]
    pub fn for_groups(show_timestamps: bool, show_speed_controls: bool) -> Self {
        match (show_timestamps, show_speed_controls) {
            (false, false) => Placement::NoTimestampsNoSpeed,
            (true, false) => Placement::NoSpeed,
            _ => Placement::Standard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsLayout {
    pub show_timestamps: bool,
    pub show_speed_controls: bool,
    pub show_fullscreen_controls: bool,
    pub placement: Placement,
    pub bar_height: f32,
    pub button_size: f32,
    pub handle_radius: f32,
    pub readout_text_size: f32,
}

impl ControlsLayout {
    #[must_use]
    pub fn new(config: &ControlsConfig, device: DeviceClass) -> Self {
        let mobile = device.is_mobile();
        Self {
            show_timestamps: config.show_timestamps,
            show_speed_controls: config.show_speed_controls,
            show_fullscreen_controls: config.show_fullscreen_controls,
            placement: Placement::for_groups(config.show_timestamps, config.show_speed_controls),
            bar_height: if mobile {
                MOBILE_CONTROLS_BAR_HEIGHT
            } else {
                CONTROLS_BAR_HEIGHT
            },
            button_size: if mobile {
                sizing::TOUCH_TARGET
            } else {
                sizing::BUTTON_HEIGHT
            },
            handle_radius: if mobile {
                sizing::SCRUBBER_THUMB_TOUCH / 2.0
            } else {
                sizing::SCRUBBER_THUMB / 2.0
            },
            readout_text_size: if mobile {
                sizing::READOUT_TEXT_TOUCH
            } else {
                sizing::READOUT_TEXT
            },
        }
    }

    /// Gap between items of the bar; tighter when optional groups are gone.
    #[must_use]
    pub fn item_spacing(&self) -> f32 {
        match self.placement {
            Placement::Standard => spacing::XS,
            Placement::NoSpeed | Placement::NoTimestampsNoSpeed => spacing::XXS,
        }
    }
}
