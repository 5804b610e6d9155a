// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox overlay.
//!
//! Renders the enlarged image above a dimmed backdrop, together with the
//! previous/next arrows, close button, and position counter. A press on the
//! backdrop closes the overlay; presses on the image or the controls are
//! captured before they reach it.

use crate::i18n::fluent::I18n;
use crate::lightbox::{Direction, Lightbox};
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the overlay.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Close,
    Previous,
    Next,
    BackdropPressed,
    /// Press landing on the image itself. Captured so it cannot fall
    /// through to the backdrop and close the overlay.
    ContentPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    Closed,
}

/// Process an overlay message against the navigation state.
pub fn update(message: Message, lightbox: &mut Lightbox) -> Event {
    match message {
        Message::Close | Message::BackdropPressed => {
            lightbox.close();
            Event::Closed
        }
        Message::Previous => {
            lightbox.change(Direction::Back);
            Event::None
        }
        Message::Next => {
            lightbox.change(Direction::Forward);
            Event::None
        }
        Message::ContentPressed => Event::None,
    }
}

/// Render the overlay. Returns nothing while the lightbox is closed or
/// has no current image.
pub fn view<'a>(
    i18n: &'a I18n,
    lightbox: &'a Lightbox,
    show_counter: bool,
) -> Option<Element<'a, Message>> {
    if !lightbox.is_open() {
        return None;
    }
    let locator = lightbox.current_locator()?;

    let backdrop = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let image = mouse_area(Image::new(Handle::from_path(locator)))
        .on_press(Message::ContentPressed);
    let centered_image = Container::new(image)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL * 2.0)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let close = Container::new(overlay_button("\u{2715}", Message::Close))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::MD);

    let previous = Container::new(overlay_button("\u{2039}", Message::Previous))
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::MD);

    let next = Container::new(overlay_button("\u{203A}", Message::Next))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::MD);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(centered_image)
        .push(previous)
        .push(next)
        .push(close);

    if show_counter {
        let current = (lightbox.current_index() + 1).to_string();
        let total = lightbox.len().to_string();
        let counter_text =
            i18n.tr_with_args("lightbox-counter", &[("current", &current), ("total", &total)]);

        let counter = Container::new(
            Container::new(Text::new(counter_text).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::counter),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG);

        layers = layers.push(counter);
    }

    Some(layers.into())
}

fn overlay_button(glyph: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(glyph).size(typography::TITLE_MD))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn open_lightbox() -> Lightbox {
        let mut lightbox = Lightbox::new();
        lightbox.init(vec![
            "room-1.jpg".to_string(),
            "room-2.jpg".to_string(),
            "room-3.jpg".to_string(),
        ]);
        lightbox.open(0);
        lightbox
    }

    #[test]
    fn view_is_empty_while_closed() {
        let i18n = I18n::default();
        let lightbox = Lightbox::new();
        assert!(view(&i18n, &lightbox, true).is_none());
    }

    #[test]
    fn view_renders_while_open() {
        let i18n = I18n::default();
        let lightbox = open_lightbox();
        assert!(view(&i18n, &lightbox, true).is_some());
        assert!(view(&i18n, &lightbox, false).is_some());
    }

    #[test]
    fn backdrop_press_closes() {
        let mut lightbox = open_lightbox();
        let event = update(Message::BackdropPressed, &mut lightbox);
        assert!(matches!(event, Event::Closed));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn content_press_keeps_overlay_open() {
        let mut lightbox = open_lightbox();
        let event = update(Message::ContentPressed, &mut lightbox);
        assert!(matches!(event, Event::None));
        assert!(lightbox.is_open());
    }

    #[test]
    fn arrows_step_through_the_sequence() {
        let mut lightbox = open_lightbox();

        update(Message::Next, &mut lightbox);
        assert_eq!(lightbox.current_index(), 1);

        update(Message::Previous, &mut lightbox);
        update(Message::Previous, &mut lightbox);
        assert_eq!(lightbox.current_index(), 2);
        assert!(lightbox.is_open());
    }
}
