// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler owns one component's side effects: navigation routing,
//! lightbox state changes, tour launching, consent persistence, and
//! settings writes. They all funnel failures into notifications rather
//! than surfacing errors to the caller.

use super::{App, Message};
use crate::diagnostics::{ErrorType, WarningType};
use crate::ui::gallery_grid;
use crate::ui::notifications::Notification;
use crate::ui::{consent_banner, contact_form, lightbox_overlay, navbar, settings};
use crate::{config, tours};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

pub fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.navbar) {
        navbar::Event::Navigate(screen) => {
            app.screen = screen;
        }
        navbar::Event::None => {}
    }
    Task::none()
}

pub fn handle_gallery_message(app: &mut App, message: gallery_grid::Message) -> Task<Message> {
    match message {
        gallery_grid::Message::OpenImage(index) => {
            // An out-of-range index leaves the lightbox untouched; log it so
            // the mismatch between grid and sequence is traceable.
            if app.lightbox.open(index).is_none() {
                app.diagnostics_handle
                    .log_error(crate::diagnostics::ErrorEvent::new(
                        ErrorType::InvalidIndex,
                        format!("gallery index {index} outside sequence"),
                    ));
            }
            Task::none()
        }
        gallery_grid::Message::LaunchTour(index) => {
            handle_tour_launch(app, index);
            Task::none()
        }
        gallery_grid::Message::ScrollToTop => {
            app.scroll_offset = 0.0;
            app.navbar.handle_scroll(0.0);
            operation::snap_to(
                Id::new(gallery_grid::SCROLLABLE_ID),
                RelativeOffset { x: 0.0, y: 0.0 },
            )
        }
        gallery_grid::Message::Scrolled(viewport) => {
            app.scroll_offset = viewport.absolute_offset().y;
            app.navbar.handle_scroll(app.scroll_offset);
            Task::none()
        }
    }
}

fn handle_tour_launch(app: &mut App, index: usize) {
    let Some(tour) = app.config.tours.get(index) else {
        app.diagnostics_handle
            .log_error(crate::diagnostics::ErrorEvent::new(
                ErrorType::MissingTarget,
                format!("tour index {index} not configured"),
            ));
        return;
    };

    match tours::dispatch(&tour.url, &tours::WindowOverrides::default()) {
        tours::Dispatch::Placeholder => {
            app.notifications
                .push(Notification::info("tour-placeholder-message"));
        }
        tours::Dispatch::Launch(request) => {
            if tours::launch(&request).is_err() {
                app.notifications.push(
                    Notification::error("tour-launch-error").with_error_type(ErrorType::Launch),
                );
            }
        }
    }
}

pub fn handle_lightbox_message(app: &mut App, message: lightbox_overlay::Message) -> Task<Message> {
    let _ = lightbox_overlay::update(message, &mut app.lightbox);
    Task::none()
}

pub fn handle_contact_form_message(
    app: &mut App,
    message: contact_form::Message,
) -> Task<Message> {
    let _ = contact_form::update(message, &mut app.contact_form);
    Task::none()
}

pub fn handle_consent_message(app: &mut App, message: consent_banner::Message) -> Task<Message> {
    app.app_state.consent = Some(consent_banner::choice(message));
    app.banner_visible = false;

    if let Some(key) = app.app_state.save() {
        app.notifications
            .push(Notification::warning(key).with_warning_type(WarningType::State));
    }
    Task::none()
}

pub fn handle_settings_message(app: &mut App, message: settings::Message) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(option) => {
            if let Ok(locale) = option.locale.parse() {
                app.i18n.set_locale(locale);
            }
            app.config.general.language = Some(option.locale);
            persist_config(app);
        }
        settings::Message::ShowCounterToggled(enabled) => {
            app.config.display.show_image_counter = enabled;
            persist_config(app);
        }
    }
    Task::none()
}

fn persist_config(app: &mut App) {
    if config::save(&app.config).is_err() {
        app.notifications.push(
            Notification::warning("notification-config-save-error")
                .with_warning_type(WarningType::Config),
        );
    }
}
