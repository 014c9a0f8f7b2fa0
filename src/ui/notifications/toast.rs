// SPDX-License-Identifier: MPL-2.0
//! Draws toast cards and the screen-corner overlay that holds them.
//!
//! Toasts appear as small cards with a severity-colored accent border,
//! a title line, an optional description, and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Stateless renderer for toast cards and their overlay.
pub struct Toast;

impl Toast {
    /// One toast card: accent glyph, text lines, dismiss button.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().accent();

        let args: Vec<(&str, String)> = notification
            .args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect();

        let glyph = Text::new(Self::severity_glyph(notification.severity()))
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        // Title color comes from the container's text_color
        let mut lines = Column::new().spacing(spacing::XXS).push(
            Text::new(i18n.tr_with_args(notification.title_key(), &args)).size(typography::BODY),
        );
        if let Some(body_key) = notification.body_key() {
            lines = lines.push(
                Text::new(i18n.tr_with_args(body_key, &args))
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.weak.text),
                    }),
            );
        }

        let dismiss = button(Text::new("\u{2715}").size(typography::BODY_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(lines)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Renders the toast overlay with all visible notifications,
    /// stacked in the bottom-right corner.
    pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if manager.shown_len() == 0 {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let stack = manager
            .shown()
            .fold(Column::new(), |column, notification| {
                column.push(Self::view(notification, i18n))
            })
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    fn severity_glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "\u{2713}",
            Severity::Info => "\u{2139}",
            Severity::Warning | Severity::Error => "\u{26A0}",
        }
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let overlay = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    let mut text_color = theme.extended_palette().background.base.text;
    if status == button::Status::Disabled {
        text_color.a = opacity::OVERLAY_MEDIUM;
    }

    button::Style {
        background: overlay.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_border_takes_the_severity_accent() {
        let style = toast_container_style(&Theme::Dark, palette::SUCCESS_500);

        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_only_tints_on_interaction() {
        let theme = Theme::Light;
        let idle = dismiss_button_style(&theme, button::Status::Active);
        let hovered = dismiss_button_style(&theme, button::Status::Hovered);

        assert!(idle.background.is_none());
        assert!(hovered.background.is_some());
    }

    #[test]
    fn warning_and_error_share_a_glyph() {
        assert_eq!(
            Toast::severity_glyph(Severity::Warning),
            Toast::severity_glyph(Severity::Error)
        );
        assert_ne!(
            Toast::severity_glyph(Severity::Success),
            Toast::severity_glyph(Severity::Info)
        );
    }

    #[test]
    fn toast_renders_title_and_body() {
        let i18n = I18n::default();
        let notification = Notification::success("action.triggered")
            .with_body("action.activated")
            .with_arg("name", "Morning");
        let _element = Toast::view(&notification, &i18n);
    }

    #[test]
    fn overlay_renders_empty_and_populated() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _empty = Toast::overlay(&manager, &i18n);

        manager.post(Notification::info("dashboard.title"));
        let _populated = Toast::overlay(&manager, &i18n);
    }
}
