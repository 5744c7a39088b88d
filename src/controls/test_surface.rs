// SPDX-License-Identifier: MPL-2.0
//! In-memory surface for unit tests.

use super::surface::{ReadyState, VideoSurface};

#[derive(Debug, Clone)]
pub struct TestSurface {
    pub time: f64,
    pub duration: f64,
    pub paused: bool,
    pub rate: f64,
    pub looping: bool,
    pub src: String,
    pub ready: ReadyState,
    pub explicit_size: bool,
    pub play_calls: u32,
    pub pause_calls: u32,
    pub load_calls: u32,
}

impl TestSurface {
    pub fn paused(duration: f64) -> Self {
        Self {
            time: 0.0,
            duration,
            paused: true,
            rate: 1.0,
            looping: false,
            src: "clip.mp4".to_string(),
            ready: ReadyState::HaveNothing,
            explicit_size: false,
            play_calls: 0,
            pause_calls: 0,
            load_calls: 0,
        }
    }

    pub fn playing(duration: f64) -> Self {
        Self {
            paused: false,
            ..Self::paused(duration)
        }
    }
}

impl VideoSurface for TestSurface {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, secs: f64) {
        self.time = secs;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        self.play_calls += 1;
        self.paused = false;
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
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
        self.src = src.to_string();
    }

    fn load(&mut self) {
        self.load_calls += 1;
        self.time = 0.0;
        self.ready = ReadyState::HaveNothing;
    }

    fn ready_state(&self) -> ReadyState {
        self.ready
    }

    fn has_explicit_size(&self) -> bool {
        self.explicit_size
    }
}
