// SPDX-License-Identifier: MPL-2.0
//! Rendering of the video area and its controls bar.

use super::layout::Placement;
use super::speed::SpeedPreset;
use super::{Message, PlayButton, SurfaceEvent, VideoTimeControls};
use crate::config::FULLSCREEN_CONTROLS_Z_INDEX;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, column, container, mouse_area, slider, text, tooltip, Container, Row, Stack, Text,
};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the controls.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl VideoTimeControls {
    /// Lays the controls bar over `video`.
    ///
    /// Control messages are lifted into the host's message type with
    /// `on_message`; clicks on the video area become
    /// [`SurfaceEvent::Clicked`].
    pub fn view<'a, M>(
        &'a self,
        ctx: ViewContext<'a>,
        video: Element<'a, M>,
        on_message: impl Fn(Message) -> M + 'a,
    ) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        let clicked = on_message(Message::Surface(SurfaceEvent::Clicked));
        let video_area = mouse_area(self.sized_video(video)).on_press(clicked);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(
                container(video_area)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
            );

        if self.bar_visible {
            let bar = self.controls_bar(ctx).map(on_message);
            layers = layers.push(
                container(bar)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Bottom),
            );
        }

        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop)
            .into()
    }

    fn sized_video<'a, M: 'a>(&self, video: Element<'a, M>) -> Container<'a, M> {
        match self.fullscreen.video_size() {
            Some(size) => container(video)
                .width(Length::Fixed(size.width))
                .height(Length::Fixed(size.height)),
            None if self.fullscreen.is_max_size() || self.fullscreen.is_fullscreen() => {
                container(video).width(Length::Fill).height(Length::Fill)
            }
            None => container(video),
        }
    }

    fn controls_bar<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let layout = &self.layout;
        let mut controls: Row<'a, Message> = Row::new()
            .spacing(layout.item_spacing())
            .padding([0.0, spacing::XS])
            .height(Length::Fixed(layout.bar_height))
            .align_y(iced::Alignment::Center);

        controls = controls.push(self.play_button_view(ctx));

        match layout.placement {
            Placement::Standard => {
                if layout.show_speed_controls {
                    controls = controls.push(self.speed_toggle_view(ctx));
                }
                controls = controls.push(self.scrubber_view(ctx));
                if layout.show_timestamps {
                    controls = controls.push(self.readout_view(ctx));
                }
            }
            Placement::NoSpeed => {
                controls = controls
                    .push(self.readout_view(ctx))
                    .push(self.scrubber_view(ctx));
            }
            Placement::NoTimestampsNoSpeed => {
                controls = controls.push(self.scrubber_view(ctx));
            }
        }

        if layout.show_fullscreen_controls {
            controls = controls.push(self.fullscreen_button_view(ctx));
        }

        let style = if self.z_index == FULLSCREEN_CONTROLS_Z_INDEX {
            styles::container::controls_bar_raised
        } else {
            styles::container::controls_bar
        };

        let width = self.bar_width.map_or(Length::Fill, Length::Fixed);
        container(controls).width(width).style(style).into()
    }

    fn play_button_view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let size = self.layout.button_size;
        let icon = match self.play_button {
            PlayButton::Play => icons::play(),
            PlayButton::Pause => icons::pause(),
        };

        let content = button(icons::sized(icon, size - spacing::MD))
            .on_press(Message::TogglePlayback)
            .padding(spacing::XS)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(styles::button::control);

        with_tooltip(content, ctx.i18n.tr(self.play_button.i18n_key()))
    }

    fn speed_toggle_view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let size = self.layout.button_size;
        let visible = self.speed.visible();

        let (outgoing, incoming_share) = match self.speed.sliding_out(self.last_tick) {
            Some((preset, remaining)) => (Some((preset, remaining)), 1.0 - remaining),
            None => (None, 1.0),
        };

        let incoming = container(speed_button(ctx, visible, size, 1.0, true))
            .height(Length::Fixed(size * incoming_share))
            .clip(true);

        let stacked = match outgoing {
            Some((preset, remaining)) => column![
                container(speed_button(ctx, preset, size, remaining, false))
                    .height(Length::Fixed(size * remaining))
                    .clip(true),
                incoming,
            ],
            None => column![incoming],
        };

        let content = container(stacked.height(Length::Fixed(size))).clip(true);
        with_tooltip(content, ctx.i18n.tr("controls-speed-tooltip"))
    }

    fn scrubber_view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let max = f64::from(self.scrubber.max());
        let value = f64::from(self.scrubber.value());

        let scrubber = slider(0.0..=max, value, Message::Scrub)
            .on_release(Message::ScrubReleased)
            .step(1.0)
            .width(Length::Fill)
            .style(styles::slider::accent(
                self.slider_color,
                self.layout.handle_radius,
            ));

        with_tooltip(scrubber, ctx.i18n.tr("controls-scrubber-tooltip"))
    }

    fn readout_view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let readout = container(
            text(self.capture_label.as_str())
                .size(self.layout.readout_text_size)
                .wrapping(text::Wrapping::None),
        )
        .padding([0.0, spacing::XXS]);

        with_tooltip(readout, ctx.i18n.tr("controls-capture-time-tooltip"))
    }

    fn fullscreen_button_view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let size = self.layout.button_size;
        let active = self.fullscreen.is_fullscreen() || self.fullscreen.is_fill_screen();
        let icon = if active {
            icons::fullscreen_off()
        } else {
            icons::fullscreen_on()
        };

        let content = button(icons::sized(icon, size - spacing::MD))
            .on_press(Message::ToggleFullscreen)
            .padding(spacing::XS)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(styles::button::control);

        with_tooltip(content, ctx.i18n.tr("controls-fullscreen-tooltip"))
    }
}

fn speed_button<'a>(
    ctx: ViewContext<'a>,
    preset: SpeedPreset,
    size: f32,
    visibility: f32,
    pressable: bool,
) -> Element<'a, Message> {
    let label = text(ctx.i18n.tr(preset.i18n_key()))
        .size(typography::BODY)
        .wrapping(text::Wrapping::None);

    let speed = button(label)
        .padding([0.0, spacing::XS])
        .height(Length::Fixed(size))
        .style(styles::button::speed(visibility));

    if pressable {
        speed.on_press(Message::SpeedPressed(preset)).into()
    } else {
        speed.into()
    }
}

fn with_tooltip<'a>(
    content: impl Into<Element<'a, Message>>,
    label: String,
) -> Element<'a, Message> {
    tooltip(
        content,
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .gap(4)
    .padding(spacing::XXS)
    .style(styles::container::tooltip)
    .into()
}
