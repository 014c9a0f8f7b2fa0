// SPDX-License-Identifier: MPL-2.0
//! Button styling shared across screens.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(bg: Color, text_color: Color, edge: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(bg)),
        text_color,
        border: Border {
            color: edge,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

fn neutral_bg(theme: &Theme, light_tone: Color) -> Color {
    if matches!(theme, Theme::Light) {
        light_tone
    } else {
        palette::GRAY_700
    }
}

/// Bouton principal (appel à l'action).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            palette::WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            palette::WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        _ => button::Style::default(),
    }
}

/// Bouton inactif (grisé, ne réagit pas).
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    |_theme, _status| {
        filled(
            palette::GRAY_200,
            palette::GRAY_400,
            palette::GRAY_400,
            shadow::NONE,
        )
    }
}

/// Style for selected/active state in toggle groups (tabs, theme picker,
/// energy period selector). Same brand fill as [`primary`].
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            palette::WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            palette::WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        button::Status::Disabled => filled(
            neutral_bg(theme, palette::GRAY_200),
            palette::GRAY_400,
            palette::GRAY_400,
            shadow::NONE,
        ),
    }
}

/// Style for unselected/secondary state in toggle groups.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let light = matches!(theme, Theme::Light);
    let text_color = if light {
        palette::GRAY_900
    } else {
        palette::WHITE
    };

    match status {
        button::Status::Active | button::Status::Pressed => filled(
            neutral_bg(theme, palette::GRAY_100),
            text_color,
            palette::GRAY_400,
            shadow::NONE,
        ),
        button::Status::Hovered => filled(
            if light {
                palette::GRAY_200
            } else {
                palette::GRAY_500
            },
            text_color,
            palette::PRIMARY_500,
            shadow::SM,
        ),
        button::Status::Disabled => filled(
            neutral_bg(theme, palette::GRAY_100),
            palette::GRAY_400,
            palette::GRAY_400,
            shadow::NONE,
        ),
    }
}

/// Flat text button used for navbar links and list rows.
pub fn plain(theme: &Theme, status: button::Status) -> button::Style {
    let colors = theme.extended_palette();

    let (background, text_color) = match status {
        button::Status::Active => (None, colors.background.base.text),
        button::Status::Hovered => (
            Some(colors.background.strong.color),
            colors.background.base.text,
        ),
        button::Status::Pressed => (
            Some(colors.primary.strong.color),
            colors.primary.strong.text,
        ),
        button::Status::Disabled => (None, colors.background.weak.text),
    };

    button::Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        match style.background {
            Some(Background::Color(bg)) => assert_eq!(bg, palette::PRIMARY_500),
            other => panic!("expected solid background, got {other:?}"),
        }
    }

    #[test]
    fn disabled_style_ignores_status() {
        let style_fn = disabled();
        let active = style_fn(&Theme::Dark, button::Status::Active);
        let hovered = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_eq!(active.background, hovered.background);
        assert_eq!(active.text_color, hovered.text_color);
    }

    #[test]
    fn selected_and_unselected_differ() {
        let on = selected(&Theme::Dark, button::Status::Active);
        let off = unselected(&Theme::Dark, button::Status::Active);
        assert_ne!(on.background, off.background);
    }

    #[test]
    fn unselected_adapts_to_the_theme() {
        let light = unselected(&Theme::Light, button::Status::Active);
        let dark = unselected(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text_color, dark.text_color);
    }

    #[test]
    fn plain_button_highlights_on_hover() {
        let normal = plain(&Theme::Dark, button::Status::Active);
        let hover = plain(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
