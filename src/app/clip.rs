// SPDX-License-Identifier: MPL-2.0
//! Clock-driven video surface used by the demo.
//!
//! A [`SyntheticClip`] has no decoder behind it: its position advances with
//! wall-clock time scaled by the playback rate, and loading completes on the
//! first clock advance after a source is set. The rendered frame is a test
//! pattern showing the frame number.

use crate::controls::{ReadyState, SurfaceEvent, VideoSurface};
use iced::Size;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct SyntheticClip {
    src: String,
    duration: f64,
    fps: f64,
    position: f64,
    paused: bool,
    rate: f64,
    looping: bool,
    ready: ReadyState,
    loading: bool,
    last_advance: Option<Instant>,
    rendered_size: Option<Size>,
    pending: Vec<SurfaceEvent>,
}

impl SyntheticClip {
    /// Creates a paused clip and starts loading it.
    #[must_use]
    pub fn new(src: impl Into<String>, duration: f64, fps: f64) -> Self {
        Self {
            src: src.into(),
            duration: duration.max(0.0),
            fps,
            position: 0.0,
            paused: true,
            rate: 1.0,
            looping: false,
            ready: ReadyState::HaveNothing,
            loading: true,
            last_advance: None,
            rendered_size: None,
            pending: Vec::new(),
        }
    }

    /// Sets the frame rate the test pattern is drawn at.
    pub fn set_fps(&mut self, fps: f64) {
        self.fps = fps;
    }

    /// Whether the clip needs clock advances (loading or playing).
    #[must_use]
    pub fn needs_clock(&self) -> bool {
        self.loading || !self.paused
    }

    /// Advances the playback position to `now`.
    ///
    /// The first advance after [`VideoSurface::play`] only anchors the clock,
    /// so time spent paused never counts. Completes a pending load first. At the end of the clip, a looping
    /// clip wraps around; otherwise it stops and pauses.
    pub fn advance(&mut self, now: Instant) {
        if self.loading {
            self.loading = false;
            self.ready = ReadyState::HaveEnoughData;
            self.pending.push(SurfaceEvent::LoadedData);
            tracing::debug!(src = %self.src, duration = self.duration, "synthetic clip loaded");
        }

        let elapsed = self
            .last_advance
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f64());
        self.last_advance = Some(now);

        if self.paused || self.duration <= 0.0 {
            return;
        }

        self.position += elapsed * self.rate;
        if self.position >= self.duration {
            if self.looping {
                self.position %= self.duration;
            } else {
                self.position = self.duration;
                self.paused = true;
            }
        }
    }

    /// Records the size the clip was laid out at.
    pub fn set_rendered_size(&mut self, size: Size) {
        if self.rendered_size != Some(size) {
            self.rendered_size = Some(size);
            self.pending.push(SurfaceEvent::Resized(size));
        }
    }

    /// Drains the events reported since the last call.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Zero-based frame currently shown.
    #[must_use]
    pub fn frame_number(&self) -> u32 {
        if self.fps <= 0.0 {
            return 0;
        }
        (self.position * self.fps).floor() as u32
    }

    /// Playback progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            (self.position / self.duration).clamp(0.0, 1.0) as f32
        } else {
            0.0
        }
    }

    fn restart_loading(&mut self) {
        self.position = 0.0;
        self.ready = ReadyState::HaveNothing;
        self.loading = true;
    }
}

impl VideoSurface for SyntheticClip {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        self.position = secs.clamp(0.0, self.duration);
    }

    fn duration(&self) -> f64 {
        if self.ready >= ReadyState::HaveMetadata {
            self.duration
        } else {
            f64::NAN
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        if self.paused && !self.looping && self.position >= self.duration {
            self.position = 0.0;
        }
        if self.paused {
            self.last_advance = None;
        }
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    fn is_looping(&self) -> bool {
        self.looping
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn src(&self) -> &str {
        &self.src
    }

    fn set_src(&mut self, src: &str) {
        src.clone_into(&mut self.src);
        self.restart_loading();
    }

    fn load(&mut self) {
        self.restart_loading();
    }

    fn ready_state(&self) -> ReadyState {
        self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    fn loaded_clip(duration: f64) -> (SyntheticClip, Instant) {
        let mut clip = SyntheticClip::new("pattern", duration, 12.0);
        let start = Instant::now();
        clip.advance(start);
        (clip, start)
    }

    #[test]
    fn first_advance_completes_loading() {
        let mut clip = SyntheticClip::new("pattern", 10.0, 12.0);
        assert!(clip.duration().is_nan());
        assert!(clip.needs_clock());

        clip.advance(Instant::now());
        assert_eq!(clip.ready_state(), ReadyState::HaveEnoughData);
        assert_eq!(clip.take_events(), vec![SurfaceEvent::LoadedData]);
        assert!(clip.take_events().is_empty());
        assert_abs_diff_eq!(clip.duration(), 10.0);
    }

    #[test]
    fn playing_clip_advances_with_rate() {
        let (mut clip, start) = loaded_clip(10.0);
        clip.play();
        clip.advance(start);
        clip.set_playback_rate(0.5);
        clip.advance(start + Duration::from_secs(2));
        assert_abs_diff_eq!(clip.current_time(), 1.0, epsilon = 1e-9);
        assert_eq!(clip.frame_number(), 12);
    }

    #[test]
    fn paused_clip_holds_position() {
        let (mut clip, start) = loaded_clip(10.0);
        clip.advance(start + Duration::from_secs(3));
        assert_abs_diff_eq!(clip.current_time(), 0.0);
    }

    #[test]
    fn resume_skips_time_spent_paused() {
        let (mut clip, start) = loaded_clip(10.0);
        clip.play();
        clip.advance(start);
        clip.advance(start + Duration::from_secs(1));
        clip.pause();

        // No ticks arrive while paused.
        clip.play();
        clip.advance(start + Duration::from_secs(6));
        assert_abs_diff_eq!(clip.current_time(), 1.0, epsilon = 1e-9);

        clip.advance(start + Duration::from_millis(6500));
        assert_abs_diff_eq!(clip.current_time(), 1.5, epsilon = 1e-9);
    }

    #[test]
    fn play_while_playing_keeps_the_clock() {
        let (mut clip, start) = loaded_clip(10.0);
        clip.play();
        clip.advance(start);
        clip.play();
        clip.advance(start + Duration::from_secs(2));
        assert_abs_diff_eq!(clip.current_time(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn looping_clip_wraps_around() {
        let (mut clip, start) = loaded_clip(4.0);
        clip.set_looping(true);
        clip.play();
        clip.advance(start);
        clip.advance(start + Duration::from_secs(5));
        assert_abs_diff_eq!(clip.current_time(), 1.0, epsilon = 1e-9);
        assert!(!clip.is_paused());
    }

    #[test]
    fn non_looping_clip_stops_at_end() {
        let (mut clip, start) = loaded_clip(4.0);
        clip.play();
        clip.advance(start);
        clip.advance(start + Duration::from_secs(5));
        assert_abs_diff_eq!(clip.current_time(), 4.0);
        assert!(clip.is_paused());
        assert_abs_diff_eq!(clip.progress(), 1.0);
    }

    #[test]
    fn new_source_reloads() {
        let (mut clip, _) = loaded_clip(4.0);
        clip.take_events();
        clip.set_src("other");
        assert_eq!(clip.src(), "other");
        assert_eq!(clip.ready_state(), ReadyState::HaveNothing);
        assert!(clip.needs_clock());
    }

    #[test]
    fn resize_is_reported_once_per_size() {
        let mut clip = SyntheticClip::new("pattern", 4.0, 12.0);
        clip.set_rendered_size(Size::new(320.0, 180.0));
        clip.set_rendered_size(Size::new(320.0, 180.0));
        assert_eq!(
            clip.take_events(),
            vec![SurfaceEvent::Resized(Size::new(320.0, 180.0))]
        );
    }
}
