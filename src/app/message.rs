// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::consent_banner;
use crate::ui::contact_form;
use crate::ui::gallery_grid;
use crate::ui::lightbox_overlay;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery_grid::Message),
    Lightbox(lightbox_overlay::Message),
    ContactForm(contact_form::Message),
    Consent(consent_banner::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// The startup delay for the consent banner has elapsed.
    ConsentDelayElapsed,
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// The window was resized; drives the responsive menu breakpoint.
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `de`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory of gallery images to show on startup.
    pub gallery_dir: Option<String>,
}
