// SPDX-License-Identifier: MPL-2.0
//! Playback speed toggle chain.
//!
//! Exactly one speed button is visible at a time. Pressing it applies its
//! rate and reveals the next preset in the chain `Fast -> Medium -> Slow ->
//! Fast` while the pressed button slides away.
//!
//! The rates are kept exactly as labeled by the product: "Fast" is 0.5x,
//! "Medium" 0.25x and "Slow" 1.0x.

use crate::config::{
    FAST_PLAYBACK_RATE, MEDIUM_PLAYBACK_RATE, SLOW_PLAYBACK_RATE, SPEED_SLIDE_DURATION_MS,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedPreset {
    #[default]
    Fast,
    Medium,
    Slow,
}

impl SpeedPreset {
    /// Playback rate applied when this preset's button is pressed.
    #[must_use]
    pub fn rate(self) -> f64 {
        match self {
            SpeedPreset::Fast => FAST_PLAYBACK_RATE,
            SpeedPreset::Medium => MEDIUM_PLAYBACK_RATE,
            SpeedPreset::Slow => SLOW_PLAYBACK_RATE,
        }
    }

    /// Preset revealed after this one is pressed.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SpeedPreset::Fast => SpeedPreset::Medium,
            SpeedPreset::Medium => SpeedPreset::Slow,
            SpeedPreset::Slow => SpeedPreset::Fast,
        }
    }

    /// Returns the i18n key of the button label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SpeedPreset::Fast => "controls-speed-fast",
            SpeedPreset::Medium => "controls-speed-medium",
            SpeedPreset::Slow => "controls-speed-slow",
        }
    }
}

/// The button currently sliding away and when it started.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Slide {
    preset: SpeedPreset,
    started: Instant,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeedToggle {
    visible: SpeedPreset,
    sliding: Option<Slide>,
}

impl SpeedToggle {
    /// Preset whose button is currently shown.
    #[must_use]
    pub fn visible(&self) -> SpeedPreset {
        self.visible
    }

    /// Presses the visible button. Returns the rate to apply.
    ///
    /// A press of a preset that is not visible is ignored and returns `None`.
    pub fn press(&mut self, preset: SpeedPreset, now: Instant) -> Option<f64> {
        if preset != self.visible {
            return None;
        }
        self.sliding = Some(Slide {
            preset,
            started: now,
        });
        self.visible = preset.next();
        Some(preset.rate())
    }

    /// Outgoing preset and its remaining visibility in `[0, 1]`.
    #[must_use]
    pub fn sliding_out(&self, now: Instant) -> Option<(SpeedPreset, f32)> {
        let slide = self.sliding?;
        let elapsed = now.saturating_duration_since(slide.started);
        let total = Duration::from_millis(SPEED_SLIDE_DURATION_MS);
        if elapsed >= total {
            return None;
        }
        let progress = elapsed.as_secs_f32() / total.as_secs_f32();
        Some((slide.preset, 1.0 - progress))
    }

    /// Whether a slide is in progress and needs animation ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.sliding.is_some()
    }

    /// Drops a finished slide.
    pub fn tick(&mut self, now: Instant) {
        if self.sliding.is_some() && self.sliding_out(now).is_none() {
            self.sliding = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn chain_cycles_fast_medium_slow() {
        assert_eq!(SpeedPreset::Fast.next(), SpeedPreset::Medium);
        assert_eq!(SpeedPreset::Medium.next(), SpeedPreset::Slow);
        assert_eq!(SpeedPreset::Slow.next(), SpeedPreset::Fast);
    }

    #[test]
    fn rates_match_labels_literally() {
        assert_abs_diff_eq!(SpeedPreset::Fast.rate(), 0.5);
        assert_abs_diff_eq!(SpeedPreset::Medium.rate(), 0.25);
        assert_abs_diff_eq!(SpeedPreset::Slow.rate(), 1.0);
    }

    #[test]
    fn press_reveals_next_button() {
        let now = Instant::now();
        let mut toggle = SpeedToggle::default();
        assert_eq!(toggle.visible(), SpeedPreset::Fast);

        assert_eq!(toggle.press(SpeedPreset::Fast, now), Some(0.5));
        assert_eq!(toggle.visible(), SpeedPreset::Medium);
        assert_eq!(toggle.press(SpeedPreset::Medium, now), Some(0.25));
        assert_eq!(toggle.press(SpeedPreset::Slow, now), Some(1.0));
        assert_eq!(toggle.visible(), SpeedPreset::Fast);
    }

    #[test]
    fn hidden_preset_press_is_ignored() {
        let mut toggle = SpeedToggle::default();
        assert_eq!(toggle.press(SpeedPreset::Slow, Instant::now()), None);
        assert_eq!(toggle.visible(), SpeedPreset::Fast);
        assert!(!toggle.is_animating());
    }

    #[test]
    fn slide_finishes_after_duration() {
        let start = Instant::now();
        let mut toggle = SpeedToggle::default();
        toggle.press(SpeedPreset::Fast, start);

        let (preset, remaining) = toggle.sliding_out(start).unwrap();
        assert_eq!(preset, SpeedPreset::Fast);
        assert_abs_diff_eq!(remaining, 1.0);

        let halfway = start + Duration::from_millis(SPEED_SLIDE_DURATION_MS / 2);
        let (_, remaining) = toggle.sliding_out(halfway).unwrap();
        assert_abs_diff_eq!(remaining, 0.5, epsilon = 1e-3);

        let done = start + Duration::from_millis(SPEED_SLIDE_DURATION_MS);
        toggle.tick(done);
        assert!(!toggle.is_animating());
    }
}
