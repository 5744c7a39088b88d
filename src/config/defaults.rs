// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the controls. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timeline**: Frame rate and frame/time mapping
//! - **Capture time**: Synthesized timestamp span
//! - **Playback speed**: Rates behind the speed toggle chain
//! - **Layout**: Controls bar sizing and stacking order
//! - **Frame clock**: Update loop cadence

// ==========================================================================
// Timeline Defaults
// ==========================================================================

/// Default frame rate when the host does not provide one.
pub const DEFAULT_FPS: f64 = 12.0;

/// Bias added before frame/time rounding so seeks land mid-frame.
pub const FRAME_BIAS: f64 = 0.1;

// ==========================================================================
// Capture Time Defaults
// ==========================================================================

/// Wall-clock span (one day, in milliseconds) that a clip covers when
/// capture times are synthesized from a start time.
pub const CAPTURE_TIME_SPAN_MS: f64 = 86_400_000.0;

/// Display format for synthesized capture times (e.g. "Jan 01, 1970 12:00 PM").
pub const CAPTURE_TIME_FORMAT: &str = "%b %d, %Y %I:%M %p";

// ==========================================================================
// Playback Speed Defaults
// ==========================================================================

/// Rate applied by the "Fast" toggle.
pub const FAST_PLAYBACK_RATE: f64 = 0.5;

/// Rate applied by the "Medium" toggle.
pub const MEDIUM_PLAYBACK_RATE: f64 = 0.25;

/// Rate applied by the "Slow" toggle.
pub const SLOW_PLAYBACK_RATE: f64 = 1.0;

/// Duration of the slide-away transition when a speed toggle is pressed.
pub const SPEED_SLIDE_DURATION_MS: u64 = 300;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default accent color of the scrubber's filled range.
pub const DEFAULT_SLIDER_COLOR: &str = "red";

/// Prefix of generated controls container ids.
pub const CONTROLS_ID_PREFIX: &str = "video-time-slider-controls-";

/// Height of the controls bar on desktop.
pub const CONTROLS_BAR_HEIGHT: f32 = 40.0;

/// Height of the controls bar with enlarged touch targets.
pub const MOBILE_CONTROLS_BAR_HEIGHT: f32 = 64.0;

/// Stacking order of the controls while in native fullscreen.
pub const FULLSCREEN_CONTROLS_Z_INDEX: u32 = 2_147_483_647;

/// Stacking order of the controls otherwise.
pub const DEFAULT_CONTROLS_Z_INDEX: u32 = 10;

// ==========================================================================
// Frame Clock Defaults
// ==========================================================================

/// Ticks per second of the interval fallback when no display refresh
/// signal is available.
pub const FALLBACK_TICKS_PER_SECOND: u64 = 60;

// ==========================================================================
// Demo Window Defaults
// ==========================================================================

/// Default demo window size in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Smallest window that still fits the controls bar.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// Length of the demo's synthetic clip when none is given.
pub const DEMO_CLIP_DURATION_SECS: f64 = 20.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_FPS > 0.0);
    assert!(FRAME_BIAS > 0.0);
    assert!(FRAME_BIAS < 0.5);

    assert!(CAPTURE_TIME_SPAN_MS > 0.0);

    assert!(FAST_PLAYBACK_RATE > 0.0);
    assert!(MEDIUM_PLAYBACK_RATE > 0.0);
    assert!(SLOW_PLAYBACK_RATE > 0.0);

    assert!(MOBILE_CONTROLS_BAR_HEIGHT >= CONTROLS_BAR_HEIGHT);
    assert!(FULLSCREEN_CONTROLS_Z_INDEX > DEFAULT_CONTROLS_Z_INDEX);

    assert!(FALLBACK_TICKS_PER_SECOND > 0);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(MIN_WINDOW_HEIGHT > MOBILE_CONTROLS_BAR_HEIGHT);
    assert!(DEMO_CLIP_DURATION_SECS > 0.0);
};
