// SPDX-License-Identifier: MPL-2.0
//! Write-through persistence for preferences and session state.
//!
//! Saving is fire-and-forget: failures surface as a warning toast,
//! never as a hard error. The `cfg!(test)` guards keep unit tests from
//! touching real directories; tests exercise the underlying save
//! functions with explicit paths.

use super::persisted_state::AppState;
use super::{config, Message};
use crate::i18n::locale::Locale;
use crate::i18n::I18n;
use crate::ui::notifications::{Manager, Notification};
use iced::Task;

/// Persists the current preferences to `settings.toml`.
pub fn store_preferences(
    cfg: &config::Config,
    notifications: &mut Manager,
) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    if let Err(err) = config::save(cfg) {
        notifications
            .post(Notification::warning("notifications.configSaveError").with_body(err.i18n_key()));
    }

    Task::none()
}

/// Persists the session state to `state.cbor`.
pub fn store_session(state: &AppState, notifications: &mut Manager) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    if let Some(key) = state.persist() {
        notifications.post(Notification::warning(key));
    }

    Task::none()
}

/// Switches the active locale and records the choice in the config.
///
/// The config is mutated in place so the caller's copy stays the source
/// of truth; the file write is best-effort.
pub fn switch_language(
    i18n: &mut I18n,
    cfg: &mut config::Config,
    locale: Locale,
    notifications: &mut Manager,
) -> Task<Message> {
    i18n.set_locale(locale);
    cfg.general.language = Some(locale.tag().to_string());
    store_preferences(cfg, notifications)
}
