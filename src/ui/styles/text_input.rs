// SPDX-License-Identifier: MPL-2.0
//! Text input styles for the contact form.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Theme};

/// Input carrying a validation error keeps a red border in every status.
pub fn invalid(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let mut style = text_input::default(theme, status);
    style.border = Border {
        color: palette::ERROR_500,
        width: 1.0,
        radius: radius::SM.into(),
    };
    style
}

/// Regular form input following the theme palette.
pub fn form(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let extended = theme.extended_palette();
    let mut style = text_input::default(theme, status);
    style.background = Background::Color(extended.background.base.color);
    style
}
