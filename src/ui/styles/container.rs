// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for forms and the settings screen.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sticky menu bar strip along the top of the window.
pub fn menu_bar(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Bottom-anchored consent banner surface.
pub fn consent_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Inline validation error strip below a form.
pub fn form_error(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Inline success strip shown after a form submission.
pub fn form_success(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..palette::SUCCESS_500
        })),
        text_color: Some(palette::SUCCESS_500),
        border: Border {
            color: palette::SUCCESS_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
