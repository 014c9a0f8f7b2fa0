// SPDX-License-Identifier: MPL-2.0
//! Session state persistence using CBOR.
//!
//! Holds transient UI state that should survive a restart but is not a
//! user preference (those live in `settings.toml`). CBOR keeps the file
//! compact and clearly separated from the editable TOML config.
//!
//! The file location follows `paths`: an explicit base directory beats
//! the `HOME_IQ_DATA_DIR` environment variable, which beats the
//! platform data directory.

use super::paths;
use crate::domain::energy::EnergyPeriod;
use crate::ui::dashboard::DeviceTab;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// File name under the data directory.
const STATE_FILE: &str = "state.cbor";

/// UI state that persists across sessions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Device tab the dashboard was last showing.
    #[serde(default)]
    pub dashboard_tab: DeviceTab,

    /// Period the energy panel was last showing.
    #[serde(default)]
    pub energy_period: EnergyPeriod,
}

impl AppState {
    /// Restores session state from the default location.
    ///
    /// Returns `(state, optional_warning)`. A missing file is not an
    /// error; a corrupted or unreadable one yields the default state
    /// plus a catalog key for the toast.
    pub fn restore() -> (Self, Option<String>) {
        Self::restore_from(None)
    }

    /// Restores session state from a custom directory.
    pub fn restore_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::file_in(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::read(&path) {
            Some(state) => (state, None),
            None => (
                Self::default(),
                Some("notifications.stateLoadError".to_string()),
            ),
        }
    }

    /// Writes session state to the default location, creating the parent
    /// directory if needed. Returns a catalog key on failure.
    pub fn persist(&self) -> Option<String> {
        self.persist_to(None)
    }

    /// Writes session state to a custom directory.
    pub fn persist_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let written = Self::file_in(base_dir).is_some_and(|path| self.write(&path));
        (!written).then(|| "notifications.stateSaveError".to_string())
    }

    fn read(path: &Path) -> Option<Self> {
        let file = fs::File::open(path).ok()?;
        ciborium::from_reader(BufReader::new(file)).ok()
    }

    fn write(&self, path: &Path) -> bool {
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return false;
            }
        }
        match fs::File::create(path) {
            Ok(file) => ciborium::into_writer(self, BufWriter::new(file)).is_ok(),
            Err(_) => false,
        }
    }

    fn file_in(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        Some(paths::data_dir_with_override(base_dir)?.join(STATE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn scratch() -> (TempDir, PathBuf) {
        let dir = tempdir().expect("scratch dir");
        let base = dir.path().to_path_buf();
        (dir, base)
    }

    #[test]
    fn default_state_starts_on_the_all_tab() {
        let state = AppState::default();
        assert_eq!(state.dashboard_tab, DeviceTab::All);
        assert_eq!(state.energy_period, EnergyPeriod::Today);
    }

    #[test]
    fn persist_then_restore_round_trips_through_cbor() {
        let (_dir, base) = scratch();
        let original = AppState {
            dashboard_tab: DeviceTab::Favorites,
            energy_period: EnergyPeriod::Week,
        };

        assert!(original.persist_to(Some(base.clone())).is_none());
        assert!(base.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::restore_from(Some(base));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let (_dir, base) = scratch();

        let (state, warning) = AppState::restore_from(Some(base));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn corrupted_file_loads_defaults_with_warning_key() {
        let (_dir, base) = scratch();
        fs::write(base.join(STATE_FILE), "not valid cbor data").expect("write garbage");

        let (state, warning) = AppState::restore_from(Some(base));
        assert_eq!(warning.as_deref(), Some("notifications.stateLoadError"));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn truncated_file_counts_as_corrupted() {
        let (_dir, base) = scratch();
        fs::write(base.join(STATE_FILE), []).expect("write empty file");

        let (_, warning) = AppState::restore_from(Some(base));
        assert_eq!(warning.as_deref(), Some("notifications.stateLoadError"));
    }

    #[test]
    fn separate_data_directories_stay_isolated() {
        let (_dir_a, base_a) = scratch();
        let (_dir_b, base_b) = scratch();

        AppState {
            dashboard_tab: DeviceTab::Favorites,
            energy_period: EnergyPeriod::Today,
        }
        .persist_to(Some(base_a.clone()));
        AppState {
            dashboard_tab: DeviceTab::Rooms,
            energy_period: EnergyPeriod::Week,
        }
        .persist_to(Some(base_b.clone()));

        let (loaded_a, _) = AppState::restore_from(Some(base_a));
        let (loaded_b, _) = AppState::restore_from(Some(base_b));

        assert_eq!(loaded_a.dashboard_tab, DeviceTab::Favorites);
        assert_eq!(loaded_b.dashboard_tab, DeviceTab::Rooms);
    }

    #[test]
    fn persist_creates_parent_directories() {
        let (_dir, base) = scratch();
        let nested = base.join("nested").join("deeply");

        assert!(AppState::default().persist_to(Some(nested.clone())).is_none());
        assert!(nested.join(STATE_FILE).exists());
    }
}
