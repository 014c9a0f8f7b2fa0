// SPDX-License-Identifier: MPL-2.0
//! Translation catalogs loaded from embedded TOML files.
//!
//! Each supported locale has one file under `assets/i18n/` named after
//! its tag (`en.toml`, `de.toml`), compiled into the binary with
//! `rust-embed`. Keys in the files are nested TOML tables; the loader
//! flattens them into the dot-delimited form used throughout the UI
//! (`[device.status] online = "Online"` becomes `device.status.online`).
//!
//! Catalogs are immutable after load. A missing or malformed file
//! produces an empty catalog (and a stderr note), which downgrades every
//! lookup to the key-fallback path instead of failing startup.

use super::locale::Locale;
use std::collections::HashMap;

#[derive(rust_embed::RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// One locale's key-to-template table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Loads the embedded catalog for `locale`.
    pub fn load(locale: Locale) -> Self {
        let filename = format!("{}.toml", locale.tag());
        let Some(file) = Asset::get(&filename) else {
            eprintln!("Missing translation catalog: {}", filename);
            return Self::default();
        };
        let content = String::from_utf8_lossy(file.data.as_ref());
        match Self::from_toml_str(&content) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!("Failed to parse {}: {}", filename, err);
                Self::default()
            }
        }
    }

    /// Parses catalog entries from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        let root: toml::Value = source.parse()?;
        let mut entries = HashMap::new();
        flatten(String::new(), &root, &mut entries);
        Ok(Self { entries })
    }

    /// Builds a catalog directly from key/template pairs.
    pub fn from_entries<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Looks up the template for a dot-delimited key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all keys, for coverage checks in tests and tooling.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Recursively flattens nested tables into dot-delimited keys.
/// Only string leaves become entries; other value types are not part of
/// the catalog format and are skipped.
fn flatten(prefix: String, value: &toml::Value, out: &mut HashMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (name, child) in table {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                flatten(key, child, out);
            }
        }
        toml::Value::String(template) => {
            if !prefix.is_empty() {
                out.insert(prefix, template.clone());
            }
        }
        _ => {}
    }
}
