// SPDX-License-Identifier: MPL-2.0
//! `video_time_controls` lays frame-accurate playback controls over a video
//! surface: play/pause, speed toggles, fullscreen, a frame-indexed scrubber
//! and a capture-time readout.
//!
//! The widget lives in [`controls`] and works with any host implementing
//! [`controls::VideoSurface`]. The [`app`] module is a demo host built on
//! Iced that drives the controls with a synthetic clip.

pub mod app;
pub mod config;
pub mod controls;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
