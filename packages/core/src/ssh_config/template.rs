//! Default host block appended by `add`

use std::path::PathBuf;

use crate::config::SswitchConfig;

/// Address written into new blocks until `update` sets a real one
pub const PLACEHOLDER_HOSTNAME: &str = "0.0.0.0";

/// Settings for a freshly added host block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTemplate {
    pub alias: String,
    pub hostname: String,
    pub identity_file: PathBuf,
    pub known_hosts_file: PathBuf,
    pub user: String,
}

impl HostTemplate {
    /// Template for `alias` using the resolved default user and key paths
    pub fn new(alias: impl Into<String>, config: &SswitchConfig) -> Self {
        Self {
            alias: alias.into(),
            hostname: PLACEHOLDER_HOSTNAME.to_string(),
            identity_file: config.identity_file(),
            known_hosts_file: config.known_hosts_file(),
            user: config.default_user.clone(),
        }
    }

    /// Render the block, one newline-terminated line per directive
    pub fn render(&self) -> Vec<String> {
        vec![
            format!("Host {}\n", self.alias),
            format!("    HostName {}\n", self.hostname),
            format!("    IdentityFile {}\n", self.identity_file.display()),
            format!("    UserKnownHostsFile {}\n", self.known_hosts_file.display()),
            "    IdentitiesOnly yes\n".to_string(),
            "    CheckHostIP no\n".to_string(),
            format!("    User {}\n", self.user),
        ]
    }
}
