// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo.
//!
//! Native keyboard, pointer and window events are routed to the single controls
//! instance the demo hosts, tagged with the window they came from so
//! fullscreen requests can target it.

use super::Message;
use crate::controls;
use iced::{event, keyboard, mouse, touch, window, Subscription};

/// Routes keyboard, pointer and window events to the controls.
///
/// Key presses already captured by a focused widget are left alone. Pointer
/// presses are routed even when captured, since the scrubber captures the
/// press that starts a drag.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        let message = match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
                event::Status::Ignored => controls::Message::KeyPressed(key),
                event::Status::Captured => return None,
            },
            event::Event::Keyboard(keyboard::Event::KeyReleased { .. }) => {
                controls::Message::KeyReleased
            }
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | event::Event::Touch(touch::Event::FingerPressed { .. }) => {
                controls::Message::PointerPressed
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | event::Event::Touch(
                touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
            ) => controls::Message::PointerReleased,
            event::Event::Window(window::Event::Resized(size)) => {
                controls::Message::ViewportResized(size)
            }
            event::Event::Window(window::Event::Opened { size, .. }) => {
                controls::Message::ViewportResized(size)
            }
            _ => return None,
        };

        Some(Message::Routed {
            window: window_id,
            message,
        })
    })
}

/// Clock ticks for the synthetic clip while it loads or plays.
pub fn create_clip_subscription(needs_clock: bool) -> Subscription<Message> {
    if needs_clock {
        window::frames().map(Message::ClipFrame)
    } else {
        Subscription::none()
    }
}
