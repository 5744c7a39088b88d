// SPDX-License-Identifier: MPL-2.0
//! Per-frame synchronization loop between the surface and the controls.
//!
//! While `Running`, the loop holds a scheduled continuation (an iced
//! subscription on the frame clock) and keeps polling even on ticks where
//! the surface is paused, e.g. during a scrub. User pauses cancel the
//! continuation; play requests a new one.

use crate::config::FALLBACK_TICKS_PER_SECOND;
use iced::{time, window, Subscription};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::surface::VideoSurface;

/// Which tick source the user prefers for the update loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameClockPreference {
    /// Display refresh when available, otherwise a fixed interval.
    #[default]
    Auto,
    /// Display refresh; falls back to the interval when unavailable.
    Display,
    /// Always the fixed interval timer.
    Interval,
}

/// Tick source of the update loop, resolved once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameClock {
    DisplayRefresh,
    Interval(Duration),
}

impl FrameClock {
    /// Picks the tick source from the preference and host capability.
    #[must_use]
    pub fn resolve(preference: FrameClockPreference, display_refresh_available: bool) -> Self {
        match preference {
            FrameClockPreference::Interval => Self::fallback(),
            FrameClockPreference::Auto | FrameClockPreference::Display
                if display_refresh_available =>
            {
                Self::DisplayRefresh
            }
            FrameClockPreference::Display => {
                tracing::warn!("display refresh unavailable, ticking on a fixed interval");
                Self::fallback()
            }
            FrameClockPreference::Auto => Self::fallback(),
        }
    }

    /// Fixed interval at `FALLBACK_TICKS_PER_SECOND`.
    #[must_use]
    pub fn fallback() -> Self {
        Self::Interval(Duration::from_micros(1_000_000 / FALLBACK_TICKS_PER_SECOND))
    }

    /// Subscription emitting one `Instant` per tick.
    pub fn subscription(self) -> Subscription<Instant> {
        match self {
            Self::DisplayRefresh => window::frames(),
            Self::Interval(period) => time::every(period),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Identifies one scheduled continuation of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

#[derive(Debug, Clone)]
pub struct UpdateLoop {
    clock: FrameClock,
    handle: Option<TickHandle>,
    next_id: u64,
}

impl UpdateLoop {
    #[must_use]
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            handle: None,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        if self.handle.is_some() {
            LoopState::Running
        } else {
            LoopState::Idle
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Schedules the loop. A running loop keeps its current continuation.
    pub fn request(&mut self) -> TickHandle {
        if let Some(handle) = self.handle {
            return handle;
        }
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.handle = Some(handle);
        tracing::debug!(id = handle.0, clock = ?self.clock, "update loop scheduled");
        handle
    }

    /// Cancels the scheduled continuation. Returns `false` if none was scheduled.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                tracing::debug!(id = handle.0, "update loop cancelled");
                true
            }
            None => false,
        }
    }

    /// Whether a tick should resync the controls from `surface`.
    #[must_use]
    pub fn should_update<S: VideoSurface + ?Sized>(&self, surface: &S) -> bool {
        self.is_running() && !surface.is_paused()
    }

    pub fn subscription(&self) -> Subscription<Instant> {
        if self.is_running() {
            self.clock.subscription()
        } else {
            Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::test_surface::TestSurface;

    #[test]
    fn auto_prefers_display_refresh() {
        assert_eq!(
            FrameClock::resolve(FrameClockPreference::Auto, true),
            FrameClock::DisplayRefresh
        );
    }

    #[test]
    fn missing_display_refresh_falls_back_to_sixty_hertz() {
        let clock = FrameClock::resolve(FrameClockPreference::Display, false);
        assert_eq!(clock, FrameClock::Interval(Duration::from_micros(16_666)));
        assert_eq!(
            FrameClock::resolve(FrameClockPreference::Auto, false),
            FrameClock::fallback()
        );
    }

    #[test]
    fn interval_preference_ignores_display_refresh() {
        assert_eq!(
            FrameClock::resolve(FrameClockPreference::Interval, true),
            FrameClock::fallback()
        );
    }

    #[test]
    fn request_is_idempotent_while_running() {
        let mut update_loop = UpdateLoop::new(FrameClock::DisplayRefresh);
        let first = update_loop.request();
        let second = update_loop.request();
        assert_eq!(first, second);
        assert_eq!(update_loop.state(), LoopState::Running);
    }

    #[test]
    fn cancel_happens_once() {
        let mut update_loop = UpdateLoop::new(FrameClock::DisplayRefresh);
        update_loop.request();
        assert!(update_loop.cancel());
        assert!(!update_loop.cancel());
        assert_eq!(update_loop.state(), LoopState::Idle);
    }

    #[test]
    fn restart_issues_a_new_handle() {
        let mut update_loop = UpdateLoop::new(FrameClock::fallback());
        let first = update_loop.request();
        update_loop.cancel();
        assert_ne!(update_loop.request(), first);
    }

    #[test]
    fn running_loop_skips_work_while_paused() {
        let mut update_loop = UpdateLoop::new(FrameClock::DisplayRefresh);
        let paused = TestSurface::paused(10.0);
        let playing = TestSurface::playing(10.0);

        assert!(!update_loop.should_update(&playing));
        update_loop.request();
        assert!(!update_loop.should_update(&paused));
        assert!(update_loop.should_update(&playing));
    }

    #[test]
    fn preference_deserializes_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            clock: FrameClockPreference,
        }
        let parsed: Wrapper = toml::from_str("clock = \"interval\"").unwrap();
        assert_eq!(parsed.clock, FrameClockPreference::Interval);
    }
}
