//! File-level list/update/add
//!
//! Each call reads the config file once and writes it at most once. Nothing
//! is written when the operation fails.

use std::path::Path;

use super::document::ConfigDocument;
use super::error::SshConfigError;
use super::rewriter::{self, HostEntry};
use super::template::HostTemplate;

/// List `(alias, hostname)` pairs from the config file at `path`
pub fn list_hosts_in(path: &Path) -> Result<Vec<HostEntry>, SshConfigError> {
    let document = ConfigDocument::load(path)?;
    Ok(rewriter::list_hosts(&document))
}

/// Set the `HostName` for `host` in the config file at `path`
///
/// Returns the number of lines rewritten.
pub fn update_hostname_in(
    path: &Path,
    host: &str,
    new_value: &str,
) -> Result<usize, SshConfigError> {
    let document = ConfigDocument::load(path)?;
    let outcome = rewriter::update_hostname(&document, host, new_value)?;

    outcome.document.save(path)?;

    tracing::info!(
        "Updated HostName for '{}' to '{}' in {} ({} line(s) changed)",
        host,
        new_value,
        path.display(),
        outcome.lines_changed
    );
    Ok(outcome.lines_changed)
}

/// Append the template block to the config file at `path`
pub fn add_host_in(path: &Path, template: &HostTemplate) -> Result<(), SshConfigError> {
    let document = ConfigDocument::load(path)?;
    let updated = rewriter::add_host(&document, template)?;

    updated.save(path)?;

    tracing::info!(
        "Added host '{}' to SSH config at {}",
        template.alias,
        path.display()
    );
    Ok(())
}
