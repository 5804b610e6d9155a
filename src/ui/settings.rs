// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language selection and display preferences.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{checkbox, pick_list, Column, Container, Text};
use iced::{Element, Length};

/// A selectable language option shown in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub locale: String,
    pub display_name: String,
}

impl std::fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageOption),
    ShowCounterToggled(bool),
}

/// Build the picker options from the locales the i18n system embeds.
pub fn language_options(i18n: &I18n) -> Vec<LanguageOption> {
    i18n.available_locales
        .iter()
        .map(|locale| LanguageOption {
            display_name: i18n.tr(&format!("language-name-{locale}")),
            locale: locale.to_string(),
        })
        .collect()
}

/// Render the settings screen.
pub fn view<'a>(i18n: &'a I18n, show_image_counter: bool) -> Element<'a, Message> {
    let options = language_options(i18n);
    let current = i18n.current_locale().to_string();
    let selected = options
        .iter()
        .find(|option| option.locale == current)
        .cloned();

    let language_row = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("select-language-label")).size(typography::BODY))
        .push(pick_list(options, selected, Message::LanguageSelected));

    let counter_toggle = checkbox(show_image_counter)
        .label(i18n.tr("settings-show-counter-label"))
        .on_toggle(Message::ShowCounterToggled);

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(480.0)
        .push(Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG))
        .push(language_row)
        .push(counter_toggle);

    Container::new(
        Container::new(content)
            .padding(spacing::XL)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .center_x(Length::Fill)
    .into()
}
