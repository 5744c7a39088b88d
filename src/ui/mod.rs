// SPDX-License-Identifier: MPL-2.0
//! Visual building blocks shared by the controls and the demo host.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Button, container and slider styles
//! - [`icons`] - Embedded SVG icons
//! - [`widgets`] - Custom canvas widgets

pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod widgets;
