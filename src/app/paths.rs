// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! Single source of truth for where settings and persisted state live.
//! Resolution order, most specific first:
//! 1. explicit override parameter (tests)
//! 2. CLI flags (`--config-dir`, `--data-dir`), set via [`install_cli_overrides`]
//! 3. environment variables (`HOME_IQ_CONFIG_DIR`, `HOME_IQ_DATA_DIR`)
//! 4. platform default via the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config/data roots.
const APP_NAME: &str = "HomeIQ";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "HOME_IQ_DATA_DIR";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "HOME_IQ_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Stores the CLI directory overrides. Call once at startup, before any
/// path lookup.
///
/// # Panics
///
/// Panics if called a second time.
pub fn install_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("data dir override was set twice");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("config dir override was set twice");
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_name: &str,
    platform_root: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }
    if let Ok(env_path) = std::env::var(env_name) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    platform_root.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// The directory holding persisted UI state (`state.cbor`).
///
/// Linux: `~/.local/share/HomeIQ/`, macOS: `~/Library/Application
/// Support/HomeIQ/`, Windows: `%APPDATA%\HomeIQ\`. `None` if the
/// platform directory cannot be determined.
pub fn data_dir() -> Option<PathBuf> {
    data_dir_with_override(None)
}

/// Like [`data_dir`] but an explicit path wins over everything.
pub fn data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

/// The directory holding user preferences (`settings.toml`).
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Like [`config_dir`] but an explicit path wins over everything.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn data_dir_ends_with_app_name() {
        let _env = ENV_GUARD.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn config_dir_ends_with_app_name() {
        let _env = ENV_GUARD.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn explicit_override_wins() {
        let override_path = PathBuf::from("/srv/homeiq/data");
        assert_eq!(
            data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _env = ENV_GUARD.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/etc/homeiq");

        assert_eq!(config_dir(), Some(PathBuf::from("/etc/homeiq")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_falls_back_to_default() {
        let _env = ENV_GUARD.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn explicit_override_beats_env_var() {
        let _env = ENV_GUARD.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/var/lib/homeiq");

        let override_path = PathBuf::from("/mnt/homeiq");
        assert_eq!(
            data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }
}
