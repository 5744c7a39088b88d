// SPDX-License-Identifier: MPL-2.0
//! Fullscreen handling with a fill-viewport fallback.
//!
//! The strategy is detected once when the controls are constructed. Native
//! fullscreen is requested from the host, which reports the resulting mode
//! change back; the fill-viewport fallback is handled entirely here by
//! stretching the video to the viewport.

use crate::config::{DEFAULT_CONTROLS_Z_INDEX, FULLSCREEN_CONTROLS_Z_INDEX};
use iced::Size;

/// Fullscreen entry points the host exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenCapabilities {
    /// A request entry point exists (standard or vendor-prefixed).
    pub can_request: bool,
    /// Only the legacy cancel entry point exists, without a standard exit.
    pub legacy_exit_only: bool,
    /// The controls live in a top-level window rather than an embedded frame.
    pub top_level: bool,
}

impl FullscreenCapabilities {
    /// A regular desktop window with native fullscreen.
    #[must_use]
    pub fn native_window() -> Self {
        Self {
            can_request: true,
            legacy_exit_only: false,
            top_level: true,
        }
    }

    /// A host with no fullscreen entry point at all.
    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            can_request: false,
            legacy_exit_only: false,
            top_level: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenStrategy {
    Native,
    FillViewport,
}

impl FullscreenStrategy {
    /// Legacy-only hosts cannot go fullscreen from an embedded frame.
    #[must_use]
    pub fn detect(capabilities: FullscreenCapabilities) -> Self {
        let supported = if capabilities.legacy_exit_only {
            capabilities.top_level
        } else {
            capabilities.can_request
        };

        if supported {
            FullscreenStrategy::Native
        } else {
            FullscreenStrategy::FillViewport
        }
    }
}

/// What the host must do after a fullscreen toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
    /// Fill-viewport changed; nothing for the host to do.
    Handled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FullscreenState {
    strategy: FullscreenStrategy,
    fullscreen: bool,
    fill_screen: bool,
    max_size: bool,
    video_size: Option<Size>,
}

impl FullscreenState {
    #[must_use]
    pub fn new(strategy: FullscreenStrategy) -> Self {
        Self {
            strategy,
            fullscreen: false,
            fill_screen: false,
            max_size: false,
            video_size: None,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> FullscreenStrategy {
        self.strategy
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn is_fill_screen(&self) -> bool {
        self.fill_screen
    }

    /// Whether the video is laid out at its maximum size.
    #[must_use]
    pub fn is_max_size(&self) -> bool {
        self.max_size
    }

    pub fn set_max_size(&mut self, max_size: bool) {
        self.max_size = max_size;
    }

    /// Explicit video size set by fill-viewport mode, if any.
    #[must_use]
    pub fn video_size(&self) -> Option<Size> {
        self.video_size
    }

    /// Toggles fullscreen. `viewport` is the last known viewport size and is
    /// used to recompute the fill-viewport size immediately.
    pub fn toggle(&mut self, viewport: Option<Size>, bar_height: f32) -> FullscreenRequest {
        match self.strategy {
            FullscreenStrategy::Native => {
                if self.fullscreen {
                    FullscreenRequest::Exit
                } else {
                    FullscreenRequest::Enter
                }
            }
            FullscreenStrategy::FillViewport => {
                if self.fill_screen {
                    self.video_size = None;
                }
                self.fill_screen = !self.fill_screen;
                self.max_size = !self.max_size;
                if let Some(viewport) = viewport {
                    self.on_viewport_resized(viewport, bar_height);
                }
                FullscreenRequest::Handled
            }
        }
    }

    /// The host reported a fullscreen mode change. Returns the new stacking
    /// order of the controls.
    pub fn on_fullscreen_changed(&mut self, mobile: bool) -> u32 {
        self.fullscreen = !self.fullscreen;
        self.controls_z_index(mobile)
    }

    /// In fill-viewport mode, stretches the video to the viewport minus the
    /// controls bar.
    pub fn on_viewport_resized(&mut self, viewport: Size, bar_height: f32) {
        if self.fill_screen {
            self.video_size = Some(Size::new(
                viewport.width,
                (viewport.height - bar_height).max(0.0),
            ));
        }
    }

    /// Stacking order of the controls bar.
    #[must_use]
    pub fn controls_z_index(&self, mobile: bool) -> u32 {
        if self.fullscreen && !mobile {
            FULLSCREEN_CONTROLS_Z_INDEX
        } else {
            DEFAULT_CONTROLS_Z_INDEX
        }
    }
}
