//! Configuration management for sswitch
//!
//! Locates the optional settings file, reads it, and produces the
//! [`SswitchConfig`] that the rest of the program runs from.

pub mod paths;
pub mod schema;
pub mod settings;

use std::path::PathBuf;

pub use paths::{SETTINGS_ENV_VAR, SETTINGS_FILE_NAME, get_config_dir, get_home_dir};
pub use schema::{DEFAULT_USER, SswitchConfig};
pub use settings::{IniFile, Settings, SettingsError, load_settings};

/// Values given on the command line that take precedence over files
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Settings file to load instead of searching
    pub settings_path: Option<PathBuf>,
    /// SSH config file to operate on
    pub ssh_config_path: Option<PathBuf>,
}

/// Pick the settings file to load
///
/// An explicitly named file must exist. Otherwise the first existing
/// candidate is used, and having none is fine.
pub fn find_settings_file(
    explicit: Option<PathBuf>,
    candidates: &[PathBuf],
) -> Result<Option<PathBuf>, SettingsError> {
    if let Some(path) = explicit {
        return if path.is_file() {
            Ok(Some(path))
        } else {
            Err(SettingsError::NotFound(path))
        };
    }

    Ok(candidates.iter().find(|path| path.is_file()).cloned())
}

/// Resolve the configuration from the environment and `overrides`
///
/// Settings file precedence: `overrides.settings_path`, the
/// `SSWITCH_SETTINGS` environment variable, `./sswitch_config`, then
/// `sswitch_config` in the config directory.
pub fn resolve_config(overrides: &ConfigOverrides) -> Result<SswitchConfig, SettingsError> {
    let home_dir = get_home_dir().ok_or(SettingsError::NoHomeDirectory)?;

    let explicit = overrides.settings_path.clone().or_else(|| {
        std::env::var_os(SETTINGS_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    });

    let cwd = std::env::current_dir().ok();
    let config_dir = get_config_dir();
    let candidates = paths::settings_search_paths(cwd.as_deref(), config_dir.as_deref());

    let settings_path = find_settings_file(explicit, &candidates)?;
    match &settings_path {
        Some(path) => tracing::debug!("Using settings file: {}", path.display()),
        None => tracing::debug!("No settings file found, using defaults"),
    }

    SswitchConfig::from_parts(home_dir, settings_path, overrides.ssh_config_path.clone())
}
