// SPDX-License-Identifier: MPL-2.0
//! Locale handling and translated text lookup.
//!
//! Text shown in the UI is looked up by dot-delimited key in a per-locale
//! translation catalog and run through `{name}` placeholder substitution.
//! The [`I18n`] value owns the catalogs and the active locale; it lives
//! on the application struct and is borrowed into every view and update
//! context. There is no global locale state.
//!
//! # Features
//!
//! - Closed set of supported locales with system-language detection
//! - Catalogs embedded at compile time (`assets/i18n/*.toml`)
//! - The locale can change at runtime without a restart
//! - Missing translations fall back to the key itself, so the UI keeps
//!   rendering and the gap is visible to testers

pub mod catalog;
pub mod locale;

pub use catalog::Catalog;
pub use locale::{detect_system_locale, Locale};

use std::collections::HashMap;

/// How a resolved string was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    /// The active catalog contained the key.
    Catalog,
    /// The key was absent; the key itself became the template.
    KeyFallback,
}

/// Result of a single resolution, carrying provenance for diagnostics.
/// UI code normally goes through [`I18n::tr`] / [`I18n::tr_with_args`],
/// which discard the provenance and keep the silent-fallback behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    pub from: ResolvedFrom,
}

/// Owner of the translation catalogs and the active locale.
pub struct I18n {
    catalogs: HashMap<Locale, Catalog>,
    locale: Locale,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Locale::DEFAULT)
    }
}

impl I18n {
    /// Loads the embedded catalogs for every supported locale and starts
    /// in `initial`. Never fails: a broken catalog degrades to key
    /// fallback, not to a startup error.
    pub fn new(initial: Locale) -> Self {
        let catalogs = Locale::ALL
            .into_iter()
            .map(|locale| (locale, Catalog::load(locale)))
            .collect();
        Self {
            catalogs,
            locale: initial,
        }
    }

    /// Builds an instance from caller-supplied catalogs. This is the
    /// injection seam used by tests and diagnostic tooling.
    pub fn with_catalogs(catalogs: HashMap<Locale, Catalog>, initial: Locale) -> Self {
        Self {
            catalogs,
            locale: initial,
        }
    }

    /// The locale currently governing all resolution.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switches the active locale. Subsequent resolutions observe the
    /// new locale immediately; nothing is cached across calls.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Switches the active locale from an untyped tag. Unsupported tags
    /// leave the active locale unchanged and report
    /// [`crate::error::Error::UnsupportedLocale`].
    pub fn set_locale_tag(&mut self, tag: &str) -> crate::error::Result<()> {
        let locale = tag.parse::<Locale>()?;
        self.set_locale(locale);
        Ok(())
    }

    /// Resolves `key` against the active catalog, substituting `args`
    /// into `{name}` placeholders. Absent keys resolve to the key itself
    /// (tagged [`ResolvedFrom::KeyFallback`]); resolution never fails.
    pub fn resolve(&self, key: &str, args: &[(&str, String)]) -> Resolved {
        let template = self
            .catalogs
            .get(&self.locale)
            .and_then(|catalog| catalog.get(key));
        let (text, from) = match template {
            Some(template) => (substitute(template, args), ResolvedFrom::Catalog),
            None => (substitute(key, args), ResolvedFrom::KeyFallback),
        };
        Resolved { text, from }
    }

    /// Resolves `key` with no variables.
    pub fn tr(&self, key: &str) -> String {
        self.resolve(key, &[]).text
    }

    /// Resolves `key`, substituting the given variables.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, String)]) -> String {
        self.resolve(key, args).text
    }
}

/// Determines the locale to start the session with.
///
/// Priority: explicit CLI override, then the persisted preference, then
/// the detected system language, then [`Locale::DEFAULT`]. Unsupported
/// or unparseable values at any step fall through to the next; the
/// function always yields a valid locale.
pub fn resolve_initial_locale(
    cli_lang: Option<&str>,
    persisted: Option<&str>,
    detected: Option<Locale>,
) -> Locale {
    if let Some(tag) = cli_lang {
        if let Ok(locale) = tag.parse::<Locale>() {
            return locale;
        }
    }
    if let Some(tag) = persisted {
        if let Ok(locale) = tag.parse::<Locale>() {
            return locale;
        }
    }
    detected.unwrap_or(Locale::DEFAULT)
}

/// Replaces every `{name}` occurrence with its value from `args`.
///
/// Placeholders without a matching variable stay literal. Matching is on
/// the full delimited token, so `{name}` never captures a prefix of
/// `{name2}`. Variables are applied in the order given.
fn substitute(template: &str, args: &[(&str, String)]) -> String {
    if args.is_empty() {
        return template.to_string();
    }
    let mut text = template.to_string();
    for (name, value) in args {
        let placeholder = format!("{{{}}}", name);
        if text.contains(&placeholder) {
            text = text.replace(&placeholder, value);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn test_i18n() -> I18n {
        let en = Catalog::from_entries([
            ("app.title", "HomeIQ"),
            ("device.action.turningOn", "Turning on {name}"),
            ("device.action.repeat", "{name} and {name} again"),
            ("device.action.adjacent", "{name}{name2}"),
        ]);
        let de = Catalog::from_entries([
            ("app.title", "HomeIQ"),
            ("device.action.turningOn", "{name} wird eingeschaltet"),
        ]);
        let catalogs = HashMap::from([(Locale::En, en), (Locale::De, de)]);
        I18n::with_catalogs(catalogs, Locale::En)
    }

    #[test]
    fn known_key_resolves_from_catalog() {
        let i18n = test_i18n();
        let resolved = i18n.resolve("app.title", &[]);
        assert_eq!(resolved.text, "HomeIQ");
        assert_eq!(resolved.from, ResolvedFrom::Catalog);
    }

    #[test]
    fn missing_key_falls_back_to_the_key_itself() {
        let i18n = test_i18n();
        let resolved = i18n.resolve("no.such.key", &[]);
        assert_eq!(resolved.text, "no.such.key");
        assert_eq!(resolved.from, ResolvedFrom::KeyFallback);
    }

    #[test]
    fn tr_keeps_silent_fallback() {
        let i18n = test_i18n();
        assert_eq!(i18n.tr("no.such.key"), "no.such.key");
    }

    #[test]
    fn variables_substitute_into_placeholders() {
        let i18n = test_i18n();
        let text = i18n.tr_with_args(
            "device.action.turningOn",
            &[("name", "Kitchen Light".to_string())],
        );
        assert_eq!(text, "Turning on Kitchen Light");
    }

    #[test]
    fn unmatched_placeholder_stays_literal() {
        let i18n = test_i18n();
        let text = i18n.tr_with_args("device.action.turningOn", &[]);
        assert_eq!(text, "Turning on {name}");
    }

    #[test]
    fn repeated_placeholder_substitutes_every_occurrence() {
        let i18n = test_i18n();
        let text = i18n.tr_with_args("device.action.repeat", &[("name", "Lamp".to_string())]);
        assert_eq!(text, "Lamp and Lamp again");
    }

    #[test]
    fn placeholder_does_not_capture_longer_names() {
        let i18n = test_i18n();
        let text = i18n.tr_with_args(
            "device.action.adjacent",
            &[("name", "A".to_string()), ("name2", "B".to_string())],
        );
        assert_eq!(text, "AB");
    }

    #[test]
    fn resolution_is_deterministic() {
        let i18n = test_i18n();
        let args = [("name", "Lamp".to_string())];
        let first = i18n.resolve("device.action.turningOn", &args);
        let second = i18n.resolve("device.action.turningOn", &args);
        assert_eq!(first, second);
    }

    #[test]
    fn locale_switch_is_observed_by_next_resolution() {
        let mut i18n = test_i18n();
        assert_eq!(
            i18n.tr_with_args("device.action.turningOn", &[("name", "X".to_string())]),
            "Turning on X"
        );
        i18n.set_locale(Locale::De);
        assert_eq!(
            i18n.tr_with_args("device.action.turningOn", &[("name", "X".to_string())]),
            "X wird eingeschaltet"
        );
    }

    #[test]
    fn set_locale_round_trips_for_every_supported_locale() {
        let mut i18n = test_i18n();
        for locale in Locale::ALL {
            i18n.set_locale(locale);
            assert_eq!(i18n.locale(), locale);
        }
    }

    #[test]
    fn unsupported_tag_is_rejected_and_state_unchanged() {
        let mut i18n = test_i18n();
        i18n.set_locale(Locale::De);
        let err = i18n.set_locale_tag("fr").unwrap_err();
        assert_eq!(err, Error::UnsupportedLocale("fr".to_string()));
        assert_eq!(i18n.locale(), Locale::De);
    }

    #[test]
    fn supported_tag_switches_locale() {
        let mut i18n = test_i18n();
        i18n.set_locale_tag("de").unwrap();
        assert_eq!(i18n.locale(), Locale::De);
    }

    #[test]
    fn initial_locale_prefers_cli_override() {
        let locale = resolve_initial_locale(Some("de"), Some("en"), Some(Locale::En));
        assert_eq!(locale, Locale::De);
    }

    #[test]
    fn initial_locale_prefers_persisted_over_detected() {
        let locale = resolve_initial_locale(None, Some("de"), Some(Locale::En));
        assert_eq!(locale, Locale::De);
    }

    #[test]
    fn initial_locale_uses_detection_when_nothing_persisted() {
        let locale = resolve_initial_locale(None, None, Some(Locale::De));
        assert_eq!(locale, Locale::De);
    }

    #[test]
    fn initial_locale_defaults_to_english() {
        let locale = resolve_initial_locale(None, None, None);
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn unsupported_cli_and_persisted_values_fall_through() {
        let locale = resolve_initial_locale(Some("fr"), Some("ja"), Some(Locale::De));
        assert_eq!(locale, Locale::De);
    }

    #[test]
    fn substitute_applies_to_fallback_text_too() {
        // Keys contain no braces, so in practice this is a no-op, but
        // the substitution pass runs on whatever template resulted.
        let i18n = test_i18n();
        let resolved = i18n.resolve("missing.{name}", &[("name", "x".to_string())]);
        assert_eq!(resolved.from, ResolvedFrom::KeyFallback);
        assert_eq!(resolved.text, "missing.x");
    }
}
