// SPDX-License-Identifier: MPL-2.0
//! The root message enum and the startup flags.

use crate::ui::about;
use crate::ui::dashboard;
use crate::ui::device_detail;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::profile;
use crate::ui::settings;
use std::time::Instant;

/// Root of the message tree. Each variant wraps one component's
/// messages so `App::update` stays the only entry point.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Dashboard(dashboard::Message),
    DeviceDetail(device_detail::Message),
    Settings(settings::Message),
    Profile(profile::Message),
    About(about::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast auto-dismiss.
    Tick(Instant),
    /// Slow tick so the time-of-day greeting stays current.
    MinuteTick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
/// Directory overrides are applied in `main` via `paths::install_cli_overrides`
/// before the application boots.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `de`, `en-US`).
    pub lang: Option<String>,
}
