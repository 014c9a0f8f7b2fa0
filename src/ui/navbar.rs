// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! The bar shows the brand, links to the main screens, the alert feed
//! dropdown, the locale selector, and the theme toggle. At most one
//! dropdown is open at a time.

use crate::domain::alerts::AlertFeed;
use crate::i18n::locale::Locale;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Main screens reachable from the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Settings,
    Profile,
    About,
}

/// Dropdown state of the bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    pub notifications_open: bool,
    pub locale_menu_open: bool,
}

/// Widget messages the bar emits.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
    ToggleNotifications,
    ToggleLocaleMenu,
    CloseMenus,
    SelectLocale(Locale),
    ToggleTheme,
    MarkAllRead,
}

/// Outcomes the app layer folds into state.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Section),
    LocaleSelected(Locale),
    ThemeToggled,
    MarkAllRead,
}

/// Folds a message into the dropdown state and reports the outcome.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Navigate(section) => {
            *state = State::default();
            Event::Navigate(section)
        }
        Message::ToggleNotifications => {
            state.notifications_open = !state.notifications_open;
            state.locale_menu_open = false;
            Event::None
        }
        Message::ToggleLocaleMenu => {
            state.locale_menu_open = !state.locale_menu_open;
            state.notifications_open = false;
            Event::None
        }
        Message::CloseMenus => {
            *state = State::default();
            Event::None
        }
        Message::SelectLocale(locale) => {
            state.locale_menu_open = false;
            Event::LocaleSelected(locale)
        }
        Message::ToggleTheme => Event::ThemeToggled,
        Message::MarkAllRead => Event::MarkAllRead,
    }
}

/// Borrowed state the bar renders from.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: State,
    pub alerts: &'a AlertFeed,
    pub active: Section,
    pub theme_mode: ThemeMode,
}

/// Render the navigation bar, including any open dropdown below it.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(top_bar(&ctx));

    if ctx.state.notifications_open {
        content = content.push(align_right(alerts_dropdown(&ctx)));
    } else if ctx.state.locale_menu_open {
        content = content.push(align_right(locale_dropdown(&ctx)));
    }

    content.into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(ctx.i18n.tr("app.title"))
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::PRIMARY_400),
            }),
    )
    .on_press(Message::Navigate(Section::Dashboard))
    .padding(spacing::XS)
    .style(styles::button::plain);

    let links = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(nav_link(ctx, "navigation.dashboard", Section::Dashboard))
        .push(nav_link(ctx, "navigation.settings", Section::Settings))
        .push(nav_link(ctx, "navigation.profile", Section::Profile))
        .push(nav_link(ctx, "navigation.about", Section::About));

    let unread = ctx.alerts.unread_count();
    let bell_label = if unread > 0 {
        format!("{} ({unread})", ctx.i18n.tr("notifications.title"))
    } else {
        ctx.i18n.tr("notifications.title")
    };
    let bell_button = button(Text::new(bell_label).size(typography::BODY))
        .on_press(Message::ToggleNotifications)
        .padding(spacing::XS)
        .style(if ctx.state.notifications_open {
            styles::button::selected
        } else {
            styles::button::plain
        });

    let locale_button = button(
        Text::new(format!("{} \u{25BE}", ctx.i18n.locale().tag().to_uppercase()))
            .size(typography::BODY),
    )
    .on_press(Message::ToggleLocaleMenu)
    .padding(spacing::XS)
    .style(if ctx.state.locale_menu_open {
        styles::button::selected
    } else {
        styles::button::plain
    });

    let theme_glyph = if ctx.theme_mode.is_dark() {
        "\u{263E}"
    } else {
        "\u{2600}"
    };
    let theme_button = button(Text::new(theme_glyph).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::plain);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(links)
        .push(Space::new().width(Length::Fill))
        .push(bell_button)
        .push(locale_button)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn nav_link<'a>(ctx: &ViewContext<'a>, key: &str, section: Section) -> Element<'a, Message> {
    let active = ctx.active == section;
    let label = Text::new(ctx.i18n.tr(key)).size(typography::BODY);

    button(label)
        .on_press(Message::Navigate(section))
        .padding([spacing::XXS, spacing::XS])
        .style(if active {
            styles::button::selected
        } else {
            styles::button::plain
        })
        .into()
}

fn alerts_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(ctx.i18n.tr("notifications.title")).size(typography::BODY_LG))
                .width(Length::Fill),
        )
        .push(
            button(Text::new(ctx.i18n.tr("notifications.markAllRead")).size(typography::BODY_SM))
                .on_press(Message::MarkAllRead)
                .padding(spacing::XXS)
                .style(styles::button::plain),
        );

    let mut list = Column::new().spacing(spacing::XS).push(header);
    for alert in ctx.alerts.alerts() {
        list = list.push(alert_row(ctx, alert));
    }

    Container::new(list)
        .width(Length::Fixed(sizing::DROPDOWN_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::dropdown)
        .into()
}

fn alert_row<'a>(
    ctx: &ViewContext<'a>,
    alert: &crate::domain::alerts::Alert,
) -> Element<'a, Message> {
    let marker = if alert.read { "  " } else { "\u{2022} " };
    let title = Text::new(format!("{marker}{}", ctx.i18n.tr(alert.title_key)))
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });
    let body = Text::new(ctx.i18n.tr(alert.body_key)).size(typography::BODY_SM);
    let time = Text::new(ctx.i18n.tr(alert.time_key))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(body)
        .push(time)
        .into()
}

fn locale_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.i18n.locale();
    let mut list = Column::new().spacing(spacing::XXS);

    for locale in Locale::ALL {
        let marker = if locale == current { "\u{2713} " } else { "  " };
        let label = Text::new(format!("{marker}{}", locale.native_name())).size(typography::BODY);
        list = list.push(
            button(label)
                .on_press(Message::SelectLocale(locale))
                .padding([spacing::XXS, spacing::SM])
                .width(Length::Fill)
                .style(styles::button::plain),
        );
    }

    Container::new(list)
        .width(Length::Fixed(sizing::DROPDOWN_WIDTH / 2.0))
        .padding(spacing::XS)
        .style(styles::container::dropdown)
        .into()
}

fn align_right<'a>(dropdown: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(dropdown)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::SM])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_context<'a>(i18n: &'a I18n, alerts: &'a AlertFeed, state: State) -> ViewContext<'a> {
        ViewContext {
            i18n,
            state,
            alerts,
            active: Section::Dashboard,
            theme_mode: ThemeMode::Dark,
        }
    }

    #[test]
    fn bar_renders_with_menus_closed() {
        let i18n = I18n::default();
        let alerts = AlertFeed::mock();
        let _element = view(view_context(&i18n, &alerts, State::default()));
    }

    #[test]
    fn bar_renders_with_the_alert_feed_open() {
        let i18n = I18n::default();
        let alerts = AlertFeed::mock();
        let state = State {
            notifications_open: true,
            ..State::default()
        };
        let _element = view(view_context(&i18n, &alerts, state));
    }

    #[test]
    fn bar_renders_with_the_locale_menu_open() {
        let i18n = I18n::default();
        let alerts = AlertFeed::mock();
        let state = State {
            locale_menu_open: true,
            ..State::default()
        };
        let _element = view(view_context(&i18n, &alerts, state));
    }

    #[test]
    fn opening_one_dropdown_closes_the_other() {
        let mut state = State::default();

        let event = update(Message::ToggleNotifications, &mut state);
        assert!(matches!(event, Event::None));
        assert!(state.notifications_open);

        let event = update(Message::ToggleLocaleMenu, &mut state);
        assert!(matches!(event, Event::None));
        assert!(state.locale_menu_open);
        assert!(!state.notifications_open);
    }

    #[test]
    fn navigation_closes_menus_and_emits_event() {
        let mut state = State {
            notifications_open: true,
            locale_menu_open: false,
        };

        let event = update(Message::Navigate(Section::Settings), &mut state);
        assert!(matches!(event, Event::Navigate(Section::Settings)));
        assert_eq!(state, State::default());
    }

    #[test]
    fn selecting_a_locale_closes_the_menu() {
        let mut state = State {
            locale_menu_open: true,
            ..State::default()
        };

        let event = update(Message::SelectLocale(Locale::De), &mut state);
        assert!(matches!(event, Event::LocaleSelected(Locale::De)));
        assert!(!state.locale_menu_open);
    }

    #[test]
    fn theme_toggle_passes_through() {
        let mut state = State::default();
        let event = update(Message::ToggleTheme, &mut state);
        assert!(matches!(event, Event::ThemeToggled));
    }

    #[test]
    fn mark_all_read_passes_through() {
        let mut state = State::default();
        let event = update(Message::MarkAllRead, &mut state);
        assert!(matches!(event, Event::MarkAllRead));
    }
}
