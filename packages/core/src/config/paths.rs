//! Path resolution for sswitch
//!
//! Home-relative SSH paths are built from an explicit home directory so the
//! only place that consults the environment is [`get_home_dir`].
//! - Settings: `./sswitch_config`, then `~/.config/sswitch/sswitch_config`
//! - SSH config: `~/.ssh/config`

use std::path::{Path, PathBuf};

/// File name of the settings file
pub const SETTINGS_FILE_NAME: &str = "sswitch_config";

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV_VAR: &str = "SSWITCH_SETTINGS";

/// Get the current user's home directory
pub fn get_home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Get the configuration directory path
///
/// - Linux: `~/.config/sswitch/`
/// - macOS: `~/.config/sswitch/` (XDG-style, not ~/Library)
/// - Windows: `%APPDATA%\sswitch\`
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join("sswitch"))
    }
    #[cfg(target_os = "windows")]
    {
        directories::BaseDirs::new().map(|dirs| dirs.config_dir().join("sswitch"))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

/// `<home>/.ssh`
pub fn ssh_dir(home: &Path) -> PathBuf {
    home.join(".ssh")
}

/// `<home>/.ssh/config`
pub fn default_ssh_config_path(home: &Path) -> PathBuf {
    ssh_dir(home).join("config")
}

/// `<home>/.ssh/google_compute_engine`
pub fn default_identity_file(home: &Path) -> PathBuf {
    ssh_dir(home).join("google_compute_engine")
}

/// `<home>/.ssh/google_compute_known_hosts`
pub fn default_known_hosts_file(home: &Path) -> PathBuf {
    ssh_dir(home).join("google_compute_known_hosts")
}

/// Settings files to try, in order, when none is named explicitly
pub fn settings_search_paths(cwd: Option<&Path>, config_dir: Option<&Path>) -> Vec<PathBuf> {
    cwd.into_iter()
        .chain(config_dir)
        .map(|dir| dir.join(SETTINGS_FILE_NAME))
        .collect()
}

/// Expand a leading `~` against `home`
pub fn expand_home(value: &str, home: &Path) -> PathBuf {
    if value == "~" {
        return home.to_path_buf();
    }
    match value.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_dir_exists() {
        assert!(get_home_dir().is_some());
    }

    #[test]
    fn test_config_dir_ends_with_sswitch() {
        let dir = get_config_dir();
        assert!(dir.is_some());
        assert!(dir.unwrap().ends_with("sswitch"));
    }

    #[test]
    fn test_ssh_paths_under_home() {
        let home = Path::new("/home/alice");
        assert_eq!(
            default_ssh_config_path(home),
            PathBuf::from("/home/alice/.ssh/config")
        );
        assert_eq!(
            default_identity_file(home),
            PathBuf::from("/home/alice/.ssh/google_compute_engine")
        );
        assert_eq!(
            default_known_hosts_file(home),
            PathBuf::from("/home/alice/.ssh/google_compute_known_hosts")
        );
    }

    #[test]
    fn test_settings_search_order() {
        let paths = settings_search_paths(Some(Path::new("/work")), Some(Path::new("/cfg")));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/work/sswitch_config"),
                PathBuf::from("/cfg/sswitch_config"),
            ]
        );
        assert!(settings_search_paths(None, None).is_empty());
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/alice");
        assert_eq!(
            expand_home("~/.ssh/work", home),
            PathBuf::from("/home/alice/.ssh/work")
        );
        assert_eq!(expand_home("~", home), PathBuf::from("/home/alice"));
        assert_eq!(expand_home("/etc/ssh/config", home), PathBuf::from("/etc/ssh/config"));
        assert_eq!(expand_home("~bob/x", home), PathBuf::from("~bob/x"));
    }
}
