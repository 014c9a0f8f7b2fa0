// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows across the config, i18n, and persistence layers.

use home_iq::app::config::{self, Config, GeneralConfig, NotificationsConfig, PrivacyConfig};
use home_iq::app::persisted_state::AppState;
use home_iq::i18n::{resolve_initial_locale, I18n, Locale};
use home_iq::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn saved_language_reaches_the_rendered_strings() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base = dir.path().to_path_buf();

    // 1. Persist a German preference the way the settings screen does.
    let saved = Config {
        general: GeneralConfig {
            language: Some("de".to_string()),
            theme_mode: ThemeMode::System,
        },
        notifications: NotificationsConfig::default(),
        privacy: PrivacyConfig::default(),
    };
    config::save_to_dir(&saved, Some(base.clone())).expect("failed to save config");

    // 2. Reload it the way application boot does.
    let (loaded, warning) = config::load_from_dir(Some(base));
    assert!(warning.is_none(), "clean file must not warn");

    // 3. The preference wins over the detected system language.
    let locale = resolve_initial_locale(None, loaded.general.language.as_deref(), Some(Locale::En));
    assert_eq!(locale, Locale::De);

    let i18n = I18n::new(locale);
    assert_eq!(i18n.tr("settings.title"), "Einstellungen");
}

#[test]
fn cli_flag_outranks_the_saved_preference() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base = dir.path().to_path_buf();

    let saved = Config {
        general: GeneralConfig {
            language: Some("de".to_string()),
            theme_mode: ThemeMode::System,
        },
        notifications: NotificationsConfig::default(),
        privacy: PrivacyConfig::default(),
    };
    config::save_to_dir(&saved, Some(base.clone())).expect("failed to save config");

    let (loaded, _) = config::load_from_dir(Some(base));
    let locale = resolve_initial_locale(
        Some("en"),
        loaded.general.language.as_deref(),
        Some(Locale::De),
    );
    assert_eq!(locale, Locale::En);
}

#[test]
fn legacy_flat_file_is_migrated_then_rewritten_sectioned() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base = dir.path().to_path_buf();
    let file = base.join("settings.toml");

    // 1. A pre-1.0 flat file on disk.
    std::fs::write(&file, "locale = \"de\"\ndark_mode = true\n")
        .expect("failed to write legacy config");

    // 2. Loading migrates it into sections.
    let (migrated, warning) = config::load_from_dir(Some(base.clone()));
    assert!(warning.is_none(), "migration must not warn");
    assert_eq!(migrated.general.language.as_deref(), Some("de"));
    assert_eq!(migrated.general.theme_mode, ThemeMode::Dark);
    assert!(migrated.notifications_enabled());

    // 3. The next save writes the sectioned format.
    config::save_to_dir(&migrated, Some(base.clone())).expect("failed to save config");
    let rewritten = std::fs::read_to_string(&file).expect("failed to read rewritten config");
    assert!(rewritten.contains("[general]"));
    assert!(!rewritten.contains("dark_mode"));

    // 4. The rewritten file round-trips.
    let (reloaded, warning) = config::load_from_dir(Some(base));
    assert!(warning.is_none());
    assert_eq!(reloaded, migrated);
}

#[test]
fn corrupted_config_warning_resolves_in_every_catalog() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base = dir.path().to_path_buf();

    std::fs::write(base.join("settings.toml"), "not = valid = toml")
        .expect("failed to write corrupted config");

    let (loaded, warning) = config::load_from_dir(Some(base));
    assert_eq!(loaded, Config::default());

    // The warning is a catalog key; both shipped catalogs must carry it
    // so the toast never falls back to the raw key.
    let key = warning.expect("corrupted file must warn");
    for locale in Locale::ALL {
        let i18n = I18n::new(locale);
        assert_ne!(i18n.tr(&key), key, "missing {key} in {locale:?}");
    }
}

#[test]
fn first_run_with_no_files_uses_defaults_quietly() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base = dir.path().to_path_buf();

    let (loaded, config_warning) = config::load_from_dir(Some(base.clone()));
    assert_eq!(loaded, Config::default());
    assert!(config_warning.is_none(), "missing config is not an error");

    let (state, state_warning) = AppState::restore_from(Some(base));
    assert_eq!(state, AppState::default());
    assert!(state_warning.is_none(), "missing state is not an error");

    let locale = resolve_initial_locale(None, loaded.general.language.as_deref(), None);
    assert_eq!(locale, Locale::DEFAULT);
}
