// SPDX-License-Identifier: MPL-2.0
//! Demo window layout: the test pattern under the controls.

use super::clip::SyntheticClip;
use super::Message;
use crate::controls::{self, VideoTimeControls};
use crate::i18n::fluent::I18n;
use crate::ui::widgets::TestPattern;
use iced::Element;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controls: &'a VideoTimeControls,
    pub clip: &'a SyntheticClip,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let pattern = TestPattern::new(ctx.clip.frame_number(), ctx.clip.progress()).into_element();

    ctx.controls.view(
        controls::ViewContext { i18n: ctx.i18n },
        pattern,
        Message::Controls,
    )
}
