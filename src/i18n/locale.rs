// SPDX-License-Identifier: MPL-2.0
//! Supported locales and system-language detection.
//!
//! The set of display languages is closed and known at build time; every
//! locale here ships with a translation catalog under `assets/i18n/`.
//! Untyped language tags (CLI flags, config values, the host locale)
//! enter through [`Locale::from_str`], which is where unsupported tags
//! are rejected.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A display language the application ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    De,
}

impl Locale {
    /// Every supported locale, in the order offered by the UI.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// Locale used when nothing is persisted and detection fails.
    pub const DEFAULT: Locale = Locale::En;

    /// The BCP 47 primary language subtag (`"en"`, `"de"`).
    /// Also the catalog file stem and the value stored in `settings.toml`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// The language's name in that language, for the selector UI.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::De => "Deutsch",
        }
    }

    /// Catalog key for the language's name in the active language.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Locale::En => "settings.language.english",
            Locale::De => "settings.language.german",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            _ => Err(Error::UnsupportedLocale(s.to_string())),
        }
    }
}

/// Maps a full language tag (e.g. `"de-AT"`) to a supported locale by
/// its primary subtag. Returns `None` for unparseable or unsupported
/// tags.
pub fn locale_for_tag(tag: &str) -> Option<Locale> {
    let id: LanguageIdentifier = tag.parse().ok()?;
    id.language.as_str().parse().ok()
}

/// Best-effort detection of the host system's preferred locale.
/// `None` when the system reports nothing or reports a language the
/// application does not ship.
pub fn detect_system_locale() -> Option<Locale> {
    sys_locale::get_locale().and_then(|tag| locale_for_tag(&tag))
}
