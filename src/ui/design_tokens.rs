// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, opacity, spacing, sizing, typography,
//! and radii. Components pull constants from here instead of hardcoding
//! values so the scales stay consistent.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand accent, a muted bronze suiting interior photography
    pub const PRIMARY_400: Color = Color::from_rgb(0.72, 0.55, 0.36);
    pub const PRIMARY_500: Color = Color::from_rgb(0.63, 0.46, 0.28);
    pub const PRIMARY_600: Color = Color::from_rgb(0.52, 0.37, 0.21);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    /// Lightbox backdrop dimming.
    pub const BACKDROP: f32 = 0.85;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    /// Surface background for semi-transparent panels.
    pub const SURFACE: f32 = 0.95;
}

/// Spacing scale on an 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Gallery thumbnail edge length.
    pub const THUMBNAIL: f32 = 220.0;
}

pub mod typography {
    /// Large title - main page headings
    pub const TITLE_LG: f32 = 30.0;
    /// Medium title - prominent labels, lightbox arrows
    pub const TITLE_MD: f32 = 20.0;
    /// Standard body - most UI text
    pub const BODY: f32 = 14.0;
    /// Caption - counters, hints
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(opacity::BACKDROP > opacity::OVERLAY_MEDIUM);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
        assert_ne!(palette::INFO_500, palette::WARNING_500);
    }
}
