// SPDX-License-Identifier: MPL-2.0
//! Cookie consent banner.
//!
//! The banner stays out of the way for [`PRESENT_DELAY`] after startup and
//! only ever appears while no choice has been recorded. Either answer is
//! persisted, so returning visitors never see it again.

use crate::app::persisted_state::Consent;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};
use std::time::Duration;

/// How long after startup the banner waits before presenting itself.
pub const PRESENT_DELAY: Duration = Duration::from_millis(1000);

/// Messages emitted by the banner buttons.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Accept,
    Decline,
}

/// Map a banner answer to the consent value to persist.
pub fn choice(message: Message) -> Consent {
    match message {
        Message::Accept => Consent::Accepted,
        Message::Decline => Consent::Declined,
    }
}

/// Render the bottom-anchored banner.
pub fn view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let text = Text::new(i18n.tr("consent-text")).size(typography::BODY);

    let accept = button(Text::new(i18n.tr("consent-accept")))
        .on_press(Message::Accept)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let decline = button(Text::new(i18n.tr("consent-decline")))
        .on_press(Message::Decline)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(text)
        .push(Space::new().width(Length::Fill))
        .push(decline)
        .push(accept);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::consent_banner)
        .into()
}
