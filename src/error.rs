// SPDX-License-Identifier: MPL-2.0
//! Application error type.
//!
//! Failures here are never fatal: callers either fall back to defaults
//! (config loading) or surface a toast (saving, locale switching). The
//! payload strings carry detail for logs; user-facing text comes from
//! [`Error::i18n_key`] instead.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Reading or writing an application file failed.
    Io(String),
    /// The settings file could not be parsed or serialized.
    Config(String),
    /// Requested locale tag is not in the supported set.
    /// Carries the offending tag for the message.
    UnsupportedLocale(String),
}

impl Error {
    /// Catalog key for the user-facing message, resolved at render time
    /// so toasts follow locale switches.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error.io",
            Error::Config(_) => "error.config",
            Error::UnsupportedLocale(_) => "error.unsupportedLocale",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(detail) => write!(f, "file access failed: {detail}"),
            Error::Config(detail) => write!(f, "settings are invalid: {detail}"),
            Error::UnsupportedLocale(tag) => write!(f, "no translations for locale `{tag}`"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
