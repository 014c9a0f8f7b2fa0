// SPDX-License-Identifier: MPL-2.0
//! Card, badge, and dropdown surfaces.

use crate::ui::design_tokens::{border, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised card surface for device cards and the profile card.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Pill-shaped badge tinted with the given accent color. Used for the
/// online/offline status on device cards.
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..accent })),
        text_color: Some(accent),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Floating dropdown surface for the navbar menus.
pub fn dropdown(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn badge_tints_background_with_accent() {
        let style = badge(palette::SUCCESS_500)(&Theme::Dark);
        assert_eq!(style.text_color, Some(palette::SUCCESS_500));
        assert!(style.background.is_some());
    }

    #[test]
    fn card_has_a_border_and_shadow() {
        let style = card(&Theme::Light);
        assert!(style.border.width > 0.0);
        assert!(style.shadow.blur_radius > 0.0);
    }
}
