// SPDX-License-Identifier: MPL-2.0
//! Frame-indexed scrubber state and its drag protocol.
//!
//! A drag pauses the surface for its whole duration and resumes playback on
//! release only if the surface was playing when the drag began. Slider
//! widgets report every movement, including the first, so `drag_start` is
//! guarded and can be called on every change.

use super::frame_index::{frame_to_time, FrameRate};
use super::surface::VideoSurface;

/// Direction of a single keyboard step on the scrubber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Backward,
    Forward,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scrubber {
    value: u32,
    max: u32,
    dragging: bool,
    was_playing: bool,
    focused: bool,
}

impl Scrubber {
    /// Current frame index.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Largest selectable frame index.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether keyboard steps currently target the handle.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Sets the selectable range to `[0, max]`, clamping the current value.
    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        self.value = self.value.min(max);
    }

    /// Moves the handle without touching the surface.
    pub fn set_value(&mut self, value: u32) {
        self.value = value.min(self.max);
    }

    /// Begins a drag. Returns `false` when a drag is already in progress.
    pub fn drag_start<S: VideoSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.dragging {
            return false;
        }
        self.dragging = true;
        self.was_playing = !surface.is_paused();
        surface.pause();
        true
    }

    /// Moves the handle to `frame` and seeks the surface there.
    ///
    /// Returns the seek time in seconds.
    pub fn drag_move<S: VideoSurface + ?Sized>(
        &mut self,
        frame: u32,
        fps: FrameRate,
        surface: &mut S,
    ) -> f64 {
        self.set_value(frame);
        let time = frame_to_time(self.value, fps);
        surface.set_current_time(time);
        time
    }

    /// Ends a drag. Returns `true` when playback was resumed.
    pub fn drag_stop<S: VideoSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        self.dragging = false;
        if self.was_playing {
            self.was_playing = false;
            surface.play();
            return true;
        }
        false
    }

    /// Index one step away from the current value in `direction`.
    #[must_use]
    pub fn stepped(&self, direction: StepDirection) -> u32 {
        match direction {
            StepDirection::Backward => self.value.saturating_sub(1),
            StepDirection::Forward => self.value.saturating_add(1).min(self.max),
        }
    }
}
