// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the controls.
//!
//! Control titles and tooltips are localized with Fluent. Translation files
//! are embedded at compile time from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Fallback to `en-US` when a locale is unavailable

pub mod fluent;
