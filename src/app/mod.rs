// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct owns every piece of interaction state: the lightbox
//! navigation, the menu bar, the contact form, the consent answer, and the
//! notification queue. Policy decisions (persistence format, banner delay,
//! locale switching) stay close to the update loop so user-facing behavior
//! is easy to audit.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, DiagnosticsHandle, WarningType};
use crate::directory_scanner;
use crate::i18n::fluent::I18n;
use crate::lightbox::Lightbox;
use crate::ui::notifications::{self, Notification};
use crate::ui::{consent_banner, contact_form, navbar};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 750;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state that bridges UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    app_state: persisted_state::AppState,
    lightbox: Lightbox,
    navbar: navbar::State,
    contact_form: contact_form::State,
    /// Locators shown in the gallery grid, in display order.
    gallery_images: Vec<String>,
    /// Vertical offset of the gallery scrollable.
    scroll_offset: f32,
    /// Whether the consent banner is currently presented.
    banner_visible: bool,
    window_width: f32,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    diagnostics_handle: DiagnosticsHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let diagnostics_handle = diagnostics.handle();
        let mut manager = notifications::Manager::new();
        manager.set_diagnostics(diagnostics_handle.clone());

        Self {
            i18n: I18n::default(),
            screen: Screen::Gallery,
            config: Config::default(),
            app_state: persisted_state::AppState::default(),
            lightbox: Lightbox::new(),
            navbar: navbar::State::default(),
            contact_form: contact_form::State::default(),
            gallery_images: Vec::new(),
            scroll_offset: 0.0,
            banner_visible: false,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            notifications: manager,
            diagnostics,
            diagnostics_handle,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher,
    /// scans the gallery directory, and schedules the consent banner.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            config,
            ..Self::default()
        };

        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        if let Some(key) = config_warning {
            app.notifications
                .push(Notification::warning(key).with_warning_type(WarningType::Config));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(Notification::warning(key).with_warning_type(WarningType::State));
        }

        if let Some(dir) = &flags.gallery_dir {
            match directory_scanner::scan_gallery(std::path::Path::new(dir)) {
                Ok(images) => {
                    app.gallery_images = images.clone();
                    app.lightbox.init(images);
                }
                Err(_) => {
                    app.notifications.push(
                        Notification::warning("notification-gallery-scan-error")
                            .with_warning_type(WarningType::Other),
                    );
                }
            }
        }

        // Returning visitors never see the banner again; first-time visitors
        // get it after a short delay so it does not compete with the gallery.
        let task = if app.app_state.consent.is_none() {
            Task::perform(tokio::time::sleep(consent_banner::PRESENT_DELAY), |()| {
                Message::ConsentDelayElapsed
            })
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let menu_open = self.navbar.menu_open && navbar::is_narrow(self.window_width);
        let event_sub = subscription::create_event_subscription(self.lightbox.is_open(), menu_open);
        let tick_sub = subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(self, navbar_message),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(self, gallery_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(self, lightbox_message)
            }
            Message::ContactForm(form_message) => {
                update::handle_contact_form_message(self, form_message)
            }
            Message::Consent(consent_message) => {
                update::handle_consent_message(self, consent_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(self, settings_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ConsentDelayElapsed => {
                if self.app_state.consent.is_none() {
                    self.banner_visible = true;
                }
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            navbar: &self.navbar,
            contact_form: &self.contact_form,
            lightbox: &self.lightbox,
            config: &self.config,
            app_state: &self.app_state,
            gallery_images: &self.gallery_images,
            scroll_offset: self.scroll_offset,
            banner_visible: self.banner_visible,
            narrow: navbar::is_narrow(self.window_width),
            notifications: &self.notifications,
        })
    }
}
