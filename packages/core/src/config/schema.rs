//! Resolved configuration for sswitch
//!
//! Built once at start-up and passed to every command.

use std::path::PathBuf;

use serde::Serialize;

use super::paths::{
    default_identity_file, default_known_hosts_file, default_ssh_config_path, expand_home,
};
use super::settings::{Settings, SettingsError, load_settings};

/// Login written into new host blocks when the settings file sets none
pub const DEFAULT_USER: &str = "user";

/// Paths and defaults every operation works from
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SswitchConfig {
    /// Home directory used for `~` expansion and default key paths
    pub home_dir: PathBuf,

    /// Settings file that was loaded, if any
    pub settings_path: Option<PathBuf>,

    /// SSH config file to read and rewrite
    pub ssh_config_path: PathBuf,

    /// User for new host blocks
    pub default_user: String,
}

impl SswitchConfig {
    /// Combine the home directory, an optional settings file and an optional
    /// SSH config override
    ///
    /// Precedence for the SSH config path: override, then `ssh_config` from
    /// the settings file, then `<home>/.ssh/config`.
    pub fn from_parts(
        home_dir: PathBuf,
        settings_path: Option<PathBuf>,
        ssh_config_override: Option<PathBuf>,
    ) -> Result<Self, SettingsError> {
        let settings = match &settings_path {
            Some(path) => load_settings(path)?,
            None => Settings::default(),
        };

        let ssh_config_path = ssh_config_override
            .or_else(|| {
                settings
                    .ssh_config
                    .as_deref()
                    .map(|value| expand_home(value, &home_dir))
            })
            .unwrap_or_else(|| default_ssh_config_path(&home_dir));

        let default_user = settings.user.unwrap_or_else(|| DEFAULT_USER.to_string());

        Ok(Self {
            home_dir,
            settings_path,
            ssh_config_path,
            default_user,
        })
    }

    /// Identity file written into new host blocks
    pub fn identity_file(&self) -> PathBuf {
        default_identity_file(&self.home_dir)
    }

    /// Known-hosts file written into new host blocks
    pub fn known_hosts_file(&self) -> PathBuf {
        default_known_hosts_file(&self.home_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_settings() {
        let config = SswitchConfig::from_parts(PathBuf::from("/home/alice"), None, None).unwrap();

        assert_eq!(config.ssh_config_path, Path::new("/home/alice/.ssh/config"));
        assert_eq!(config.default_user, DEFAULT_USER);
        assert_eq!(config.settings_path, None);
    }

    #[test]
    fn test_settings_file_values() {
        let dir = TempDir::new().unwrap();
        let settings = dir.path().join("sswitch_config");
        fs::write(
            &settings,
            "[settings]\nssh_config = ~/work/ssh_config\nuser = deploy\n",
        )
        .unwrap();

        let config =
            SswitchConfig::from_parts(PathBuf::from("/home/alice"), Some(settings.clone()), None)
                .unwrap();

        assert_eq!(
            config.ssh_config_path,
            Path::new("/home/alice/work/ssh_config")
        );
        assert_eq!(config.default_user, "deploy");
        assert_eq!(config.settings_path, Some(settings));
    }

    #[test]
    fn test_override_beats_settings_file() {
        let dir = TempDir::new().unwrap();
        let settings = dir.path().join("sswitch_config");
        fs::write(&settings, "[settings]\nssh_config = /from/settings\n").unwrap();

        let config = SswitchConfig::from_parts(
            PathBuf::from("/home/alice"),
            Some(settings),
            Some(PathBuf::from("/from/flag")),
        )
        .unwrap();

        assert_eq!(config.ssh_config_path, Path::new("/from/flag"));
    }

    #[test]
    fn test_invalid_settings_file_is_error() {
        let dir = TempDir::new().unwrap();
        let settings = dir.path().join("sswitch_config");
        fs::write(&settings, "ssh_config = /x\n").unwrap();

        let result = SswitchConfig::from_parts(PathBuf::from("/home/alice"), Some(settings), None);
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_template_paths() {
        let config = SswitchConfig::from_parts(PathBuf::from("/home/alice"), None, None).unwrap();
        assert!(config.identity_file().ends_with(".ssh/google_compute_engine"));
        assert!(
            config
                .known_hosts_file()
                .ends_with(".ssh/google_compute_known_hosts")
        );
    }
}
