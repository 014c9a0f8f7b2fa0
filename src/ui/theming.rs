// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and system theme detection.

use serde::{Deserialize, Serialize};

/// The user's theme preference. `System` follows the desktop setting
/// at render time, so an OS switch takes effect without a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Modes in the order the settings selector shows them.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Whether the effective theme is dark right now.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection errors fall back to dark
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The Iced theme this mode resolves to right now.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// Catalog key for the mode's label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "settings.theme.light",
            ThemeMode::Dark => "settings.theme.dark",
            ThemeMode::System => "settings.theme.system",
        }
    }
}

/// Case-insensitive parse, so hand-edited config files may write
/// `Dark` or `DARK`.
impl std::str::FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(()),
        }
    }
}
