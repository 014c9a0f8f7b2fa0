// SPDX-License-Identifier: MPL-2.0
//! Settings screen with language, appearance, notification and privacy
//! sections.
//!
//! The screen is stateless; every change is emitted as an event and the
//! application layer writes it into the configuration.

use crate::app::config::Config;
use crate::i18n::locale::Locale;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, text, toggler, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Messages emitted by settings widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LocaleSelected(Locale),
    ThemeModeSelected(ThemeMode),
    NotificationsToggled(bool),
    LocationAccessToggled(bool),
    AutoLockToggled(bool),
}

/// Preference changes for the app layer to apply and persist.
#[derive(Debug, Clone)]
pub enum Event {
    LocaleSelected(Locale),
    ThemeModeSelected(ThemeMode),
    NotificationsToggled(bool),
    LocationAccessToggled(bool),
    AutoLockToggled(bool),
}

/// Process a settings message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::LocaleSelected(locale) => Event::LocaleSelected(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
        Message::NotificationsToggled(enabled) => Event::NotificationsToggled(enabled),
        Message::LocationAccessToggled(enabled) => Event::LocationAccessToggled(enabled),
        Message::AutoLockToggled(enabled) => Event::AutoLockToggled(enabled),
    }
}

/// Borrowed preferences the screen renders and edits.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(720.0)
        .push(Text::new(ctx.i18n.tr("settings.title")).size(typography::TITLE_LG))
        .push(build_language_section(&ctx))
        .push(build_appearance_section(&ctx))
        .push(build_notifications_section(&ctx))
        .push(build_privacy_section(&ctx));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

fn build_section<'a>(
    title: String,
    description: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(
            Text::new(description)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        )
        .push(content);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn build_language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.i18n.locale();
    let mut row = Row::new().spacing(spacing::XS);

    for locale in Locale::ALL {
        let label = format!(
            "{} ({})",
            ctx.i18n.tr(locale.i18n_key()),
            locale.native_name()
        );
        row = row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::LocaleSelected(locale))
                .padding([spacing::XS, spacing::SM])
                .style(if locale == current {
                    styles::button::selected
                } else {
                    styles::button::unselected
                }),
        );
    }

    build_section(
        ctx.i18n.tr("settings.language.title"),
        ctx.i18n.tr("settings.language.description"),
        row.into(),
    )
}

fn build_appearance_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.config.general.theme_mode;
    let mut row = Row::new().spacing(spacing::XS);

    for mode in ThemeMode::ALL {
        row = row.push(
            button(Text::new(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY))
                .on_press(Message::ThemeModeSelected(mode))
                .padding([spacing::XS, spacing::SM])
                .style(if mode == current {
                    styles::button::selected
                } else {
                    styles::button::unselected
                }),
        );
    }

    let picker = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings.appearance.themeMode")).size(typography::BODY))
        .push(
            Text::new(ctx.i18n.tr("settings.appearance.themeModeDescription"))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        )
        .push(row);

    build_section(
        ctx.i18n.tr("settings.appearance.title"),
        ctx.i18n.tr("settings.appearance.description"),
        picker.into(),
    )
}

fn build_notifications_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle_row = build_toggle_row(
        ctx.i18n.tr("settings.notifications.push"),
        ctx.i18n.tr("settings.notifications.pushDescription"),
        ctx.config.notifications_enabled(),
        Message::NotificationsToggled,
    );

    build_section(
        ctx.i18n.tr("settings.notifications.title"),
        ctx.i18n.tr("settings.notifications.description"),
        toggle_row,
    )
}

fn build_privacy_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let rows = Column::new()
        .spacing(spacing::SM)
        .push(build_toggle_row(
            ctx.i18n.tr("settings.privacy.location"),
            ctx.i18n.tr("settings.privacy.locationDescription"),
            ctx.config.location_access(),
            Message::LocationAccessToggled,
        ))
        .push(build_toggle_row(
            ctx.i18n.tr("settings.privacy.autoLock"),
            ctx.i18n.tr("settings.privacy.autoLockDescription"),
            ctx.config.auto_lock(),
            Message::AutoLockToggled,
        ));

    build_section(
        ctx.i18n.tr("settings.privacy.title"),
        ctx.i18n.tr("settings.privacy.description"),
        rows.into(),
    )
}

fn build_toggle_row<'a>(
    label: String,
    description: String,
    enabled: bool,
    on_toggle: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message> {
    let text_column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(
            Text::new(description)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    let toggle = toggler(enabled).on_toggle(on_toggle).size(20.0);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text_column)
        .push(Space::new().width(Length::Fill))
        .push(toggle)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_view_renders() {
        let i18n = I18n::default();
        let config = Config::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            config: &config,
        });
    }

    #[test]
    fn settings_view_renders_in_german() {
        let i18n = I18n::new(Locale::De);
        let config = Config::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            config: &config,
        });
    }

    #[test]
    fn every_message_maps_to_an_event() {
        assert!(matches!(
            update(Message::LocaleSelected(Locale::De)),
            Event::LocaleSelected(Locale::De)
        ));
        assert!(matches!(
            update(Message::ThemeModeSelected(ThemeMode::Light)),
            Event::ThemeModeSelected(ThemeMode::Light)
        ));
        assert!(matches!(
            update(Message::NotificationsToggled(false)),
            Event::NotificationsToggled(false)
        ));
        assert!(matches!(
            update(Message::LocationAccessToggled(true)),
            Event::LocationAccessToggled(true)
        ));
        assert!(matches!(
            update(Message::AutoLockToggled(false)),
            Event::AutoLockToggled(false)
        ));
    }
}
