// SPDX-License-Identifier: MPL-2.0
//! Message handling logic for the application.
//!
//! Screen modules translate widget messages into events; the handlers
//! here fold those events into application state. Every mutation of the
//! fleet, config, or session state goes through this module, so the
//! screens themselves stay free of side effects.

use iced::Task;

use super::message::Message;
use super::persisted_state::AppState;
use super::screen::Screen;
use super::{config, persistence};
use crate::domain::alerts::AlertFeed;
use crate::domain::device::{Brightness, DeviceFleet, DeviceId, PowerToggle};
use crate::i18n::I18n;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{about, dashboard, device_detail, navbar, profile, settings};

/// Context for update operations, passing all needed state as parameters.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut config::Config,
    pub fleet: &'a mut DeviceFleet,
    pub alerts: &'a mut AlertFeed,
    pub navbar: &'a mut navbar::State,
    pub dashboard: &'a mut dashboard::State,
    pub session: &'a mut AppState,
    pub notifications: &'a mut Manager,
}

/// The screen a navbar section opens.
fn screen_for(section: navbar::Section) -> Screen {
    match section {
        navbar::Section::Dashboard => Screen::Dashboard,
        navbar::Section::Settings => Screen::Settings,
        navbar::Section::Profile => Screen::Profile,
        navbar::Section::About => Screen::About,
    }
}

/// Handles navigation bar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.navbar) {
        navbar::Event::None => Task::none(),
        navbar::Event::Navigate(section) => {
            *ctx.screen = screen_for(section);
            Task::none()
        }
        navbar::Event::LocaleSelected(locale) => {
            persistence::switch_language(ctx.i18n, ctx.config, locale, ctx.notifications)
        }
        navbar::Event::ThemeToggled => {
            // The quick toggle resolves System to an explicit mode.
            ctx.config.general.theme_mode = if ctx.config.general.theme_mode.is_dark() {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            persistence::store_preferences(ctx.config, ctx.notifications)
        }
        navbar::Event::MarkAllRead => {
            ctx.alerts.mark_all_read();
            Task::none()
        }
    }
}

/// Handles dashboard messages.
pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match dashboard::update(message, ctx.dashboard) {
        dashboard::Event::None => Task::none(),
        dashboard::Event::SelectionChanged => {
            ctx.session.dashboard_tab = ctx.dashboard.tab;
            ctx.session.energy_period = ctx.dashboard.energy_period;
            persistence::store_session(ctx.session, ctx.notifications)
        }
        dashboard::Event::SceneTriggered(scene) => {
            scene.apply(ctx.fleet);
            if ctx.config.notifications_enabled() {
                let scene_name = ctx.i18n.tr(scene.i18n_key());
                ctx.notifications.post(
                    Notification::success("action.triggered")
                        .with_body("action.activated")
                        .with_arg("name", scene_name),
                );
            }
            Task::none()
        }
        dashboard::Event::ToggleDevice(id) => toggle_device(ctx, id),
        dashboard::Event::SetBrightness(id, value) => set_brightness(ctx, id, value),
        dashboard::Event::OpenDevice(id) => {
            *ctx.screen = Screen::DeviceDetail(id);
            Task::none()
        }
    }
}

/// Handles device detail screen messages.
pub fn handle_device_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: device_detail::Message,
) -> Task<Message> {
    match device_detail::update(message) {
        device_detail::Event::BackToDashboard => {
            *ctx.screen = Screen::Dashboard;
            Task::none()
        }
        device_detail::Event::ToggleDevice(id) => toggle_device(ctx, id),
        device_detail::Event::SetBrightness(id, value) => set_brightness(ctx, id, value),
        device_detail::Event::SetTargetTemperature(id, value) => {
            if accepts_control(ctx.fleet, id) {
                ctx.fleet.set_target_temperature(id, value);
            }
            Task::none()
        }
        device_detail::Event::SetVolume(id, value) => {
            if accepts_control(ctx.fleet, id) {
                ctx.fleet.set_volume(id, value);
            }
            Task::none()
        }
        device_detail::Event::Refresh(_id) => {
            if ctx.config.notifications_enabled() {
                ctx.notifications.post(
                    Notification::success("device.detail.refreshed")
                        .with_body("device.detail.refreshedDescription"),
                );
            }
            Task::none()
        }
    }
}

/// Handles settings screen messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(message) {
        settings::Event::LocaleSelected(locale) => {
            let task = persistence::switch_language(
                ctx.i18n,
                ctx.config,
                locale,
                ctx.notifications,
            );
            push_settings_saved(ctx);
            task
        }
        settings::Event::ThemeModeSelected(mode) => {
            ctx.config.general.theme_mode = mode;
            let task = persistence::store_preferences(ctx.config, ctx.notifications);
            push_settings_saved(ctx);
            task
        }
        settings::Event::NotificationsToggled(enabled) => {
            ctx.config.notifications.enabled = Some(enabled);
            let task = persistence::store_preferences(ctx.config, ctx.notifications);
            // Gated on the new value: disabling notifications is silent.
            push_settings_saved(ctx);
            task
        }
        settings::Event::LocationAccessToggled(enabled) => {
            ctx.config.privacy.location_access = Some(enabled);
            let task = persistence::store_preferences(ctx.config, ctx.notifications);
            push_settings_saved(ctx);
            task
        }
        settings::Event::AutoLockToggled(enabled) => {
            ctx.config.privacy.auto_lock = Some(enabled);
            let task = persistence::store_preferences(ctx.config, ctx.notifications);
            push_settings_saved(ctx);
            task
        }
    }
}

/// Handles profile screen messages. The screen is read-only, so the
/// message enum is uninhabited.
pub fn handle_profile_message(message: profile::Message) -> Task<Message> {
    match message {}
}

/// The about screen emits nothing either; this exists for symmetry.
pub fn handle_about_message(message: about::Message) -> Task<Message> {
    match message {}
}

/// Toggles a device and reports the outcome as a toast.
///
/// Offline devices are left unchanged and produce a warning instead of
/// a confirmation. Unknown ids are ignored.
fn toggle_device(ctx: &mut UpdateContext<'_>, id: DeviceId) -> Task<Message> {
    let Some(outcome) = ctx.fleet.toggle_power(id) else {
        return Task::none();
    };
    let Some(device) = ctx.fleet.get(id) else {
        return Task::none();
    };

    if !ctx.config.notifications_enabled() {
        return Task::none();
    }

    let name = device.name.clone();
    let notification = match outcome {
        PowerToggle::SwitchedOn => Notification::success("device.action.turningOn")
            .with_body("device.action.poweringUp")
            .with_arg("name", name),
        PowerToggle::SwitchedOff => Notification::success("device.action.turningOff")
            .with_body("device.action.poweringDown")
            .with_arg("name", name),
        PowerToggle::Offline => Notification::warning("device.status.offlineTitle")
            .with_body("device.status.offlineDescription")
            .with_arg("name", name),
    };
    ctx.notifications.post(notification);
    Task::none()
}

fn set_brightness(ctx: &mut UpdateContext<'_>, id: DeviceId, value: Brightness) -> Task<Message> {
    if accepts_control(ctx.fleet, id) {
        ctx.fleet.set_brightness(id, value);
    }
    Task::none()
}

/// Sliders stay rendered while a device is off or offline; value
/// changes arriving from them are dropped here.
fn accepts_control(fleet: &DeviceFleet, id: DeviceId) -> bool {
    fleet
        .get(id)
        .is_some_and(|device| device.is_on && device.status.is_online())
}

fn push_settings_saved(ctx: &mut UpdateContext<'_>) {
    if ctx.config.notifications_enabled() {
        ctx.notifications.post(
            Notification::success("settings.saved").with_body("settings.savedDescription"),
        );
    }
}
