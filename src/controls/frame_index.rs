// SPDX-License-Identifier: MPL-2.0
//! Conversions between playback time and the scrubber's frame index.
//!
//! The scrubber works on whole frames. Seeking lands slightly past the
//! start of a frame (`FRAME_BIAS`) and reading subtracts the same bias
//! before rounding, so `frame -> time -> frame` is the identity even when
//! the surface reports times with floating-point jitter.
//!
//! # Example
//!
//! ```
//! use video_time_controls::controls::frame_index::{frame_count, frame_to_time, FrameRate};
//!
//! let fps = FrameRate::new(12.0);
//! assert_eq!(frame_count(10.0, fps), 120);
//! assert!((frame_to_time(59, fps) - 4.925).abs() < 1e-9);
//! ```

use crate::config::{DEFAULT_FPS, FRAME_BIAS};

/// Frames per second, guaranteed positive and finite.
///
/// Invalid inputs fall back to [`DEFAULT_FPS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate(f64);

impl FrameRate {
    /// Creates a frame rate, falling back to the default for invalid values.
    #[must_use]
    pub fn new(fps: f64) -> Self {
        if fps.is_finite() && fps > 0.0 {
            Self(fps)
        } else {
            Self(DEFAULT_FPS)
        }
    }

    /// Returns the frame rate as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self(DEFAULT_FPS)
    }
}

/// Number of frames in a clip: `ceil(duration * fps)`.
///
/// Unknown or negative durations count as zero frames.
#[must_use]
pub fn frame_count(duration_secs: f64, fps: FrameRate) -> u32 {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return 0;
    }
    // Saturating float-to-int cast; clips beyond u32::MAX frames clamp.
    (duration_secs * fps.value()).ceil() as u32
}

/// Largest valid scrubber index, so the handle reaches exactly the end.
#[must_use]
pub fn max_frame_index(duration_secs: f64, fps: FrameRate) -> u32 {
    frame_count(duration_secs, fps).saturating_sub(1)
}

/// Seek time for a frame index: `(frame + bias) / fps`.
#[inline]
#[must_use]
pub fn frame_to_time(frame: u32, fps: FrameRate) -> f64 {
    (f64::from(frame) + FRAME_BIAS) / fps.value()
}

/// Frame index shown for a playback time: `round(time * fps - bias)`,
/// clamped into `[0, max_index]`.
#[must_use]
pub fn time_to_frame(time_secs: f64, fps: FrameRate, max_index: u32) -> u32 {
    if !time_secs.is_finite() || time_secs <= 0.0 {
        return 0;
    }
    let frame = (time_secs * fps.value() - FRAME_BIAS).round();
    if frame <= 0.0 {
        0
    } else {
        (frame as u32).min(max_index)
    }
}
