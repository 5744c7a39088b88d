// SPDX-License-Identifier: MPL-2.0
//! Capture-time labels shown next to the scrubber.
//!
//! A label comes either from an explicit per-frame list or, without one,
//! from a start time spread linearly over one day of wall-clock time across
//! the clip. Labels are only produced when something changed since the
//! previous call, so the readout is not redrawn on every tick.

use crate::config::{CAPTURE_TIME_FORMAT, CAPTURE_TIME_SPAN_MS};
use crate::error::{Result, SurfaceError};
use chrono::DateTime;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureTimes {
    labels: Option<Vec<String>>,
    start_time_ms: f64,
    last_video_time: Option<f64>,
    last_label: String,
}

impl CaptureTimes {
    #[must_use]
    pub fn new(labels: Option<Vec<String>>, start_time_ms: Option<f64>) -> Self {
        Self {
            labels,
            start_time_ms: start_time_ms.unwrap_or(0.0),
            last_video_time: None,
            last_label: String::new(),
        }
    }

    /// Replaces the per-frame labels.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = Some(labels);
        self.last_video_time = None;
    }

    #[must_use]
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Forgets the last observed time and label, e.g. after a new source.
    pub fn reset(&mut self) {
        self.last_video_time = None;
        self.last_label.clear();
    }

    /// Label for the current position, or `None` when it would repeat the
    /// previous one.
    ///
    /// `frame_index` selects from explicit labels; the synthesized label is
    /// derived from `current_time / duration`.
    pub fn next_label(
        &mut self,
        current_time: f64,
        duration: f64,
        frame_index: u32,
    ) -> Option<String> {
        if self.last_video_time == Some(current_time) {
            return None;
        }
        self.last_video_time = Some(current_time);

        let label = match self.labels.as_deref() {
            Some(labels) if !labels.is_empty() => labels.get(frame_index as usize)?.clone(),
            _ => synthesize_label(self.start_time_ms, current_time, duration)?,
        };

        if label == self.last_label {
            return None;
        }
        self.last_label.clone_from(&label);
        Some(label)
    }
}

/// Milliseconds since the epoch for a playback position:
/// `ceil(start + 86_400_000 * time / duration)`.
#[must_use]
pub fn synthesized_timestamp_ms(start_time_ms: f64, current_time: f64, duration: f64) -> i64 {
    let progress = if duration.is_finite() && duration > 0.0 {
        current_time / duration
    } else {
        0.0
    };
    (start_time_ms + CAPTURE_TIME_SPAN_MS * progress).ceil() as i64
}

/// Formats the synthesized timestamp in UTC, e.g. "Jan 01, 1970 12:00 PM".
#[must_use]
pub fn synthesize_label(start_time_ms: f64, current_time: f64, duration: f64) -> Option<String> {
    let millis = synthesized_timestamp_ms(start_time_ms, current_time, duration);
    DateTime::from_timestamp_millis(millis).map(|at| at.format(CAPTURE_TIME_FORMAT).to_string())
}

/// Reads per-frame labels from a text file, one per non-empty line.
pub fn read_labels(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|err| SurfaceError::CaptureTimes {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    let labels: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    if labels.is_empty() {
        return Err(SurfaceError::NoCaptureTimes(path.display().to_string()).into());
    }

    tracing::info!(path = %path.display(), count = labels.len(), "capture times loaded");
    Ok(labels)
}
