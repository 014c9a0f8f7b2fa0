// SPDX-License-Identifier: MPL-2.0
//! Rail and handle styling for the device control sliders.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

fn faded(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

fn rail_and_handle(
    filled: Color,
    empty: Color,
    handle: Color,
    edge: Color,
    handle_radius: f32,
) -> slider::Style {
    slider::Style {
        rail: slider::Rail {
            backgrounds: (Background::Color(filled), Background::Color(empty)),
            width: 4.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: handle_radius,
            },
            background: Background::Color(handle),
            border_width: 1.0,
            border_color: edge,
        },
    }
}

/// Brand-colored slider for active device controls (brightness,
/// temperature, volume).
pub fn control(theme: &Theme, status: slider::Status) -> slider::Style {
    let brand = match status {
        slider::Status::Hovered | slider::Status::Dragged => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };
    let empty = if matches!(theme, Theme::Light) {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };

    rail_and_handle(brand, empty, brand, palette::PRIMARY_600, 7.0)
}

/// Style for disabled slider (grayed out, non-interactive). Used while
/// a device is off or offline.
pub fn disabled() -> impl Fn(&Theme, slider::Status) -> slider::Style {
    |theme: &Theme, _status: slider::Status| {
        let light = matches!(theme, Theme::Light);
        let rail = faded(
            if light {
                palette::GRAY_100
            } else {
                palette::GRAY_700
            },
            0.6,
        );
        let handle = faded(
            if light {
                palette::GRAY_200
            } else {
                palette::GRAY_400
            },
            opacity::OVERLAY_MEDIUM,
        );
        let edge = faded(palette::GRAY_400, opacity::OVERLAY_MEDIUM);

        // Rail shows no progress while the control is inert
        rail_and_handle(rail, rail, handle, edge, 6.0)
    }
}

/// Text style matching the disabled slider appearance, for the value
/// label next to it.
#[must_use]
pub fn dimmed_label(theme: &Theme) -> iced::widget::text::Style {
    let color = if matches!(theme, Theme::Light) {
        palette::GRAY_400
    } else {
        palette::GRAY_200
    };
    iced::widget::text::Style { color: Some(color) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_rail_fills_with_brand_color() {
        let style = control(&Theme::Dark, slider::Status::Active);
        let (filled, _) = style.rail.backgrounds;
        assert_eq!(filled, Background::Color(palette::PRIMARY_500));
    }

    #[test]
    fn dragging_lightens_the_fill() {
        let idle = control(&Theme::Dark, slider::Status::Active);
        let dragged = control(&Theme::Dark, slider::Status::Dragged);
        assert_ne!(idle.rail.backgrounds.0, dragged.rail.backgrounds.0);
    }

    #[test]
    fn disabled_rail_is_uniform() {
        let style = disabled()(&Theme::Dark, slider::Status::Active);
        let (left, right) = style.rail.backgrounds;
        assert_eq!(left, right);
    }
}
