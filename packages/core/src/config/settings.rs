//! Settings file parsing
//!
//! The settings file is INI-style:
//!
//! ```text
//! [settings]
//! ssh_config = ~/.ssh/config
//! user = deploy
//! ```
//!
//! Section names are case-sensitive, keys are not. `#` and `;` start comment
//! lines. When a key repeats, the last value wins.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Section holding sswitch's own keys
pub const SETTINGS_SECTION: &str = "settings";

/// Errors that can occur while resolving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The home directory could not be determined
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    /// An explicitly requested settings file does not exist
    #[error("Settings file {} not found", .0.display())]
    NotFound(PathBuf),

    /// Failed to read the settings file
    #[error("Failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed settings file
    #[error("Invalid settings file {} (line {line}): {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// One `[name]` section and its entries in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Last value for `key` (keys are stored lowercased)
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A parsed INI file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    sections: Vec<Section>,
}

impl IniFile {
    /// Parse INI text; `path` is only used in error messages
    pub fn parse(contents: &str, path: &Path) -> Result<Self, SettingsError> {
        let mut sections: Vec<Section> = Vec::new();

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let parse_error = |message: &str| SettingsError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                message: message.to_string(),
            };

            if let Some(header) = line.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or_else(|| parse_error("unterminated section header"))?;
                sections.push(Section::new(name.trim().to_string()));
                continue;
            }

            let separator = line
                .find(['=', ':'])
                .ok_or_else(|| parse_error("expected 'key = value'"))?;
            let key = line[..separator].trim();
            if key.is_empty() {
                return Err(parse_error("missing key before separator"));
            }
            let value = line[separator + 1..].trim();

            let section = sections
                .last_mut()
                .ok_or_else(|| parse_error("entry appears before any [section] header"))?;
            section
                .entries
                .push((key.to_lowercase(), value.to_string()));
        }

        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up `key` in the last section named `section` that defines it
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .filter(|s| s.name == section)
            .find_map(|s| s.get(key))
    }
}

/// Values read from the `[settings]` section
///
/// Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// `ssh_config` - path to the SSH config file
    pub ssh_config: Option<String>,
    /// `user` - login written into new host blocks
    pub user: Option<String>,
}

impl Settings {
    pub fn from_ini(ini: &IniFile) -> Self {
        let value = |key: &str| {
            ini.get(SETTINGS_SECTION, key)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            ssh_config: value("ssh_config"),
            user: value("user"),
        }
    }
}

/// Load settings from the file at `path`
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let ini = IniFile::parse(&contents, path)?;
    let settings = Settings::from_ini(&ini);

    tracing::debug!("Loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}
