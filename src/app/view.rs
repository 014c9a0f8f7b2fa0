// SPDX-License-Identifier: MPL-2.0
//! Window composition.
//!
//! Stacks the navigation bar, the active screen, and the toast overlay
//! into the final element tree.

use super::{config, Message, Screen};
use crate::domain::alerts::AlertFeed;
use crate::domain::device::{DeviceFleet, DeviceId};
use crate::domain::profile::UserProfile;
use crate::i18n::I18n;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{about, dashboard, device_detail, navbar, profile, settings};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Everything the window needs borrowed for one frame.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub config: &'a config::Config,
    pub fleet: &'a DeviceFleet,
    pub alerts: &'a AlertFeed,
    pub profile: &'a UserProfile,
    pub navbar: navbar::State,
    pub dashboard: &'a dashboard::State,
    pub notifications: &'a Manager,
}

/// Builds the full window for whichever screen is active.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
        alerts: ctx.alerts,
        active: ctx.screen.section(),
        theme_mode: ctx.config.general.theme_mode,
    })
    .map(Message::Navbar);

    let screen_view: Element<'_, Message> = match ctx.screen {
        Screen::Dashboard => view_dashboard(ctx.i18n, ctx.fleet, ctx.dashboard),
        Screen::DeviceDetail(id) => view_device_detail(ctx.i18n, ctx.fleet, id),
        Screen::Settings => view_settings(ctx.i18n, ctx.config),
        Screen::Profile => view_profile(ctx.i18n, ctx.profile),
        Screen::About => view_about(ctx.i18n),
    };

    let page = Column::new()
        .push(navbar_view)
        .push(
            Container::new(screen_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    if !ctx.notifications.is_empty() {
        Stack::new()
            .push(page)
            .push(Toast::overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
            .into()
    } else {
        page.into()
    }
}

fn view_dashboard<'a>(
    i18n: &'a I18n,
    fleet: &'a DeviceFleet,
    state: &'a dashboard::State,
) -> Element<'a, Message> {
    dashboard::view(dashboard::ViewContext { i18n, fleet, state }).map(Message::Dashboard)
}

fn view_device_detail<'a>(
    i18n: &'a I18n,
    fleet: &'a DeviceFleet,
    device_id: DeviceId,
) -> Element<'a, Message> {
    device_detail::view(device_detail::ViewContext {
        i18n,
        fleet,
        device_id,
    })
    .map(Message::DeviceDetail)
}

fn view_settings<'a>(i18n: &'a I18n, config: &'a config::Config) -> Element<'a, Message> {
    settings::view(settings::ViewContext { i18n, config }).map(Message::Settings)
}

fn view_profile<'a>(i18n: &'a I18n, user: &'a UserProfile) -> Element<'a, Message> {
    profile::view(profile::ViewContext {
        i18n,
        profile: user,
    })
    .map(Message::Profile)
}

fn view_about(i18n: &I18n) -> Element<'_, Message> {
    about::view(about::ViewContext { i18n }).map(Message::About)
}
