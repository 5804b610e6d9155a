// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed according to the interaction state: while the
//! lightbox is open the keyboard drives it, and while the collapsed menu is
//! open any press that no widget claimed folds the menu. Subscriptions are
//! rebuilt declaratively on every state change, so a route exists exactly
//! once or not at all.

use super::Message;
use crate::ui::{lightbox_overlay, navbar};
use iced::{event, keyboard, mouse, time, Subscription};
use std::time::Duration;

/// Creates the event subscription for the current interaction state.
pub fn create_event_subscription(lightbox_open: bool, menu_open: bool) -> Subscription<Message> {
    if lightbox_open {
        // Escape and the arrow keys drive the lightbox. Keys a focused widget
        // already handled stay with that widget.
        event::listen_with(|event, status, _window_id| {
            if let Some(message) = resized_message(&event) {
                return Some(message);
            }

            if status == event::Status::Captured {
                return None;
            }

            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) = event
            {
                return match named {
                    keyboard::key::Named::Escape => {
                        Some(Message::Lightbox(lightbox_overlay::Message::Close))
                    }
                    keyboard::key::Named::ArrowLeft => {
                        Some(Message::Lightbox(lightbox_overlay::Message::Previous))
                    }
                    keyboard::key::Named::ArrowRight => {
                        Some(Message::Lightbox(lightbox_overlay::Message::Next))
                    }
                    _ => None,
                };
            }

            None
        })
    } else if menu_open {
        // A press outside the menu (no widget captured it) closes the menu.
        event::listen_with(|event, status, _window_id| {
            if let Some(message) = resized_message(&event) {
                return Some(message);
            }

            if let event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
                if status == event::Status::Ignored {
                    return Some(Message::Navbar(navbar::Message::CloseMenu));
                }
            }

            None
        })
    } else {
        event::listen_with(|event, _status, _window_id| resized_message(&event))
    }
}

fn resized_message(event: &event::Event) -> Option<Message> {
    if let event::Event::Window(iced::window::Event::Resized(size)) = event {
        Some(Message::WindowResized(*size))
    } else {
        None
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
