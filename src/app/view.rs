// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition.
//!
//! Layers, bottom to top: the active screen under the navigation bar, the
//! lightbox overlay, the consent banner, and finally the toast stack, so
//! notifications are never covered.

use super::persisted_state::AppState;
use super::{Message, Screen};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::lightbox::Lightbox;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{consent_banner, contact_form, gallery_grid, lightbox_overlay, navbar, settings};
use iced::widget::{Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Everything the view needs, borrowed from the application state.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub navbar: &'a navbar::State,
    pub contact_form: &'a contact_form::State,
    pub lightbox: &'a Lightbox,
    pub config: &'a Config,
    pub app_state: &'a AppState,
    pub gallery_images: &'a [String],
    pub scroll_offset: f32,
    pub banner_visible: bool,
    pub narrow: bool,
    pub notifications: &'a Manager,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut base = Column::new().width(Length::Fill).height(Length::Fill);

    if !ctx.navbar.hidden {
        base = base.push(
            navbar::view(navbar::ViewContext {
                i18n: ctx.i18n,
                state: ctx.navbar,
                active: ctx.screen,
                narrow: ctx.narrow,
            })
            .map(Message::Navbar),
        );
    }

    let screen: Element<'a, Message> = match ctx.screen {
        Screen::Gallery => gallery_grid::view(gallery_grid::ViewContext {
            i18n: ctx.i18n,
            images: ctx.gallery_images,
            tours: &ctx.config.tours,
            scroll_offset: ctx.scroll_offset,
        })
        .map(Message::Gallery),
        Screen::Contact => {
            contact_form::view(ctx.i18n, ctx.contact_form).map(Message::ContactForm)
        }
        Screen::Settings => {
            settings::view(ctx.i18n, ctx.config.display.show_image_counter).map(Message::Settings)
        }
    };
    base = base.push(Container::new(screen).width(Length::Fill).height(Length::Fill));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(overlay) = lightbox_overlay::view(
        ctx.i18n,
        ctx.lightbox,
        ctx.config.display.show_image_counter,
    ) {
        layers = layers.push(overlay.map(Message::Lightbox));
    }

    if ctx.banner_visible && ctx.app_state.consent.is_none() {
        layers = layers.push(
            Container::new(consent_banner::view(ctx.i18n).map(Message::Consent))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Bottom),
        );
    }

    layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    layers.into()
}
