//! SSH config host block management
//!
//! Reads an SSH client config as raw lines and supports:
//! - Listing `Host` aliases with their `HostName`
//! - Rewriting the `HostName` inside one named block
//! - Appending a default block for a new alias

mod document;
mod edit;
mod error;
mod rewriter;
mod template;

// Public exports
pub use document::{ConfigDocument, ensure_config_exists};
pub use edit::{add_host_in, list_hosts_in, update_hostname_in};
pub use error::SshConfigError;
pub use rewriter::{
    BlockState, HostEntry, UpdateOutcome, add_host, has_host, list_hosts, update_hostname,
};
pub use template::{HostTemplate, PLACEHOLDER_HOSTNAME};
