// SPDX-License-Identifier: MPL-2.0
//! The host-owned video surface the controls drive.
//!
//! The controls never own a surface. Every operation that reads or writes
//! playback state receives the surface explicitly, so several control
//! instances can coexist over different surfaces without ambient lookups.

use iced::Size;

/// How much media data the surface has buffered, ordered from least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ReadyState {
    /// No information about the media yet.
    #[default]
    HaveNothing,
    /// Duration and dimensions are known.
    HaveMetadata,
    /// The frame at the current position is available.
    HaveCurrentData,
    /// Enough data to advance at least one frame.
    HaveFutureData,
    /// Playback can proceed to the end without stalling.
    HaveEnoughData,
}

/// Lifecycle signals a surface reports to the controls mounted on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// The first frame of the current source is available.
    LoadedData,
    /// The surface's rendered size changed.
    Resized(Size),
    /// The user clicked the video area.
    Clicked,
}

/// Playback properties and methods of a video surface.
///
/// Times are in seconds. `duration` may be `NaN` or `0.0` before metadata
/// is available; the controls treat both as an empty clip.
pub trait VideoSurface {
    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, secs: f64);

    fn duration(&self) -> f64;

    fn is_paused(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);

    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&mut self, rate: f64);

    fn is_looping(&self) -> bool;

    fn set_looping(&mut self, looping: bool);

    fn src(&self) -> &str;

    fn set_src(&mut self, src: &str);

    /// Restarts loading of the current source.
    fn load(&mut self);

    fn ready_state(&self) -> ReadyState;

    /// Whether the host gave the surface an explicit width or height.
    ///
    /// Surfaces without one are laid out at their maximum size.
    fn has_explicit_size(&self) -> bool {
        false
    }
}

/// Duration in seconds, with unknown durations mapped to zero.
pub(crate) fn known_duration<S: VideoSurface + ?Sized>(surface: &S) -> f64 {
    let duration = surface.duration();
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_states_are_ordered() {
        assert!(ReadyState::HaveNothing < ReadyState::HaveMetadata);
        assert!(ReadyState::HaveCurrentData < ReadyState::HaveFutureData);
        assert!(ReadyState::HaveFutureData < ReadyState::HaveEnoughData);
    }

    #[test]
    fn default_ready_state_is_nothing() {
        assert_eq!(ReadyState::default(), ReadyState::HaveNothing);
    }
}
