//! SSH config error types
//!
//! Errors that can occur while reading or rewriting an SSH client config file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during SSH config operations
#[derive(Error, Debug)]
pub enum SshConfigError {
    /// The SSH config file does not exist
    #[error("Config file {} not found!", .0.display())]
    ConfigFileNotFound(PathBuf),

    /// No block opener matched the requested alias
    #[error("Host '{0}' not found in config file!")]
    HostNotFound(String),

    /// A block with this alias already exists
    #[error("Host '{0}' already exists in config file!")]
    HostAlreadyExists(String),

    /// Failed to read the config file
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the config file back to disk
    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}
