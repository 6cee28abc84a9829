//! SSH config document loading and writing
//!
//! A [`ConfigDocument`] is the config file held as raw lines, each line keeping
//! its own terminator so that writing the document back reproduces untouched
//! lines byte-for-byte.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::error::SshConfigError;

/// An SSH config file as an ordered sequence of raw lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    lines: Vec<String>,
}

impl ConfigDocument {
    /// Split file contents into lines, keeping each line's terminator
    pub fn parse(contents: &str) -> Self {
        Self {
            lines: contents.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Load the document at `path`
    ///
    /// Fails with [`SshConfigError::ConfigFileNotFound`] before touching the
    /// file if it does not exist.
    pub fn load(path: &Path) -> Result<Self, SshConfigError> {
        ensure_config_exists(path)?;

        let contents = fs::read_to_string(path).map_err(|source| SshConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::parse(&contents);
        tracing::debug!(
            "Loaded {} lines from {}",
            document.lines.len(),
            path.display()
        );
        Ok(document)
    }

    /// Write the full document over `path`
    ///
    /// The new contents go to a temporary file in the same directory, and
    /// that file is renamed over the original. No other file is created.
    pub fn save(&self, path: &Path) -> Result<(), SshConfigError> {
        // Follow a symlinked ~/.ssh/config instead of replacing the link
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let write_error = |message: String| SshConfigError::Write {
            path: target.clone(),
            message,
        };

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)
            .map_err(|e| write_error(format!("Failed to create temporary file: {e}")))?;

        temp.write_all(self.to_string().as_bytes())
            .map_err(|e| write_error(e.to_string()))?;
        temp.flush().map_err(|e| write_error(e.to_string()))?;

        // Keep the original mode (ssh refuses group/world-writable configs)
        if let Ok(metadata) = fs::metadata(&target) {
            fs::set_permissions(temp.path(), metadata.permissions())
                .map_err(|e| write_error(format!("Failed to copy permissions: {e}")))?;
        }

        temp.persist(&target)
            .map_err(|e| write_error(format!("Failed to replace file: {}", e.error)))?;

        tracing::debug!(
            "Wrote {} lines to {}",
            self.lines.len(),
            target.display()
        );
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append lines at the end of the document
    ///
    /// Terminates the current last line first if it has no newline.
    pub fn append_lines(&mut self, lines: impl IntoIterator<Item = String>) {
        if let Some(last) = self.lines.last_mut() {
            if !last.ends_with('\n') {
                last.push('\n');
            }
        }
        self.lines.extend(lines);
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Line content without its `\n` or `\r\n` terminator
pub fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Check that the SSH config file exists before doing any work on it
pub fn ensure_config_exists(path: &Path) -> Result<(), SshConfigError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(SshConfigError::ConfigFileNotFound(path.to_path_buf()))
    }
}
