// SPDX-License-Identifier: MPL-2.0
//! Widget styles of the controls bar and demo host.

pub mod button;
pub mod container;
pub mod slider;
