// SPDX-License-Identifier: MPL-2.0
//! Frame-numbered test pattern drawn on a canvas.
//!
//! Stands in for decoded video in the demo: eight color bars, the current
//! frame number, and a thin progress line along the bottom edge.

use crate::ui::design_tokens::{palette, typography};
use iced::widget::canvas::{self, Frame, Geometry, Path, Text};
use iced::widget::Canvas;
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Classic color bars, left to right.
const BARS: [Color; 8] = [
    Color::from_rgb(0.75, 0.75, 0.75),
    Color::from_rgb(0.75, 0.75, 0.0),
    Color::from_rgb(0.0, 0.75, 0.75),
    Color::from_rgb(0.0, 0.75, 0.0),
    Color::from_rgb(0.75, 0.0, 0.75),
    Color::from_rgb(0.75, 0.0, 0.0),
    Color::from_rgb(0.0, 0.0, 0.75),
    Color::from_rgb(0.1, 0.1, 0.1),
];

/// Height of the progress line at the bottom of the pattern.
const PROGRESS_HEIGHT: f32 = 3.0;

pub struct TestPattern {
    frame_number: u32,
    progress: f32,
    label_size: f32,
}

impl TestPattern {
    #[must_use]
    pub fn new(frame_number: u32, progress: f32) -> Self {
        Self {
            frame_number,
            progress: progress.clamp(0.0, 1.0),
            label_size: typography::BODY * 4.0,
        }
    }

    /// Canvas filling its container.
    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for TestPattern {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        #[allow(clippy::cast_precision_loss)]
        let bar_width = frame.width() / BARS.len() as f32;
        for (index, color) in BARS.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = bar_width * index as f32;
            frame.fill_rectangle(
                Point::new(x, 0.0),
                Size::new(bar_width, frame.height()),
                *color,
            );
        }

        let center = frame.center();
        let plate = Path::rectangle(
            Point::new(center.x - self.label_size * 2.0, center.y - self.label_size * 0.75),
            Size::new(self.label_size * 4.0, self.label_size * 1.5),
        );
        frame.fill(&plate, Color { a: 0.8, ..palette::BLACK });

        frame.fill_text(Text {
            content: format!("{:05}", self.frame_number),
            // Five monospace-ish digits, roughly centered on the plate.
            position: Point::new(
                center.x - self.label_size * 1.4,
                center.y - self.label_size * 0.6,
            ),
            color: palette::WHITE,
            size: self.label_size.into(),
            ..Text::default()
        });

        frame.fill_rectangle(
            Point::new(0.0, frame.height() - PROGRESS_HEIGHT),
            Size::new(frame.width() * self.progress, PROGRESS_HEIGHT),
            palette::WHITE,
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(TestPattern::new(0, 1.5).progress, 1.0);
        assert_eq!(TestPattern::new(0, -0.5).progress, 0.0);
    }
}
