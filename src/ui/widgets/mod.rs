// SPDX-License-Identifier: MPL-2.0
pub mod test_pattern;

pub use test_pattern::TestPattern;
