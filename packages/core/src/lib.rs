//! sswitch-core - Core library for sswitch
//!
//! Reads and rewrites SSH client config files: lists `Host` aliases, switches
//! the `HostName` of one block, and appends default blocks for new aliases.
//! Also resolves where that file lives and which defaults apply.

pub mod config;
pub mod ssh_config;

pub use config::{ConfigOverrides, SettingsError, SswitchConfig, resolve_config};
pub use ssh_config::{
    ConfigDocument, HostEntry, HostTemplate, SshConfigError, add_host_in, list_hosts_in,
    update_hostname_in,
};
