//! Host block scanning and rewriting
//!
//! All operations make a single forward pass over the document's lines.
//! A host block starts at a `Host <alias>` line and runs until the next
//! `Host` line or the end of the document. Keywords match case-insensitively.

use std::sync::LazyLock;

use regex::Regex;

use super::document::{ConfigDocument, line_content};
use super::error::SshConfigError;
use super::template::HostTemplate;

static HOST_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Host\s+(.+)").expect("valid Host line pattern"));

static HOSTNAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\s*HostName\s+)(.+)").expect("valid HostName line pattern")
});

/// A `Host` alias and the `HostName` found in its block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub alias: String,
    pub hostname: String,
}

/// Where the scan is relative to the block being rewritten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    OutsideTarget,
    InsideTarget,
}

impl BlockState {
    /// State after an opener line naming `alias`
    pub fn for_opener(alias: &str, target: &str) -> Self {
        if alias_matches(alias, target) {
            BlockState::InsideTarget
        } else {
            BlockState::OutsideTarget
        }
    }
}

/// Result of a successful `HostName` update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub document: ConfigDocument,
    /// Number of `HostName` lines rewritten; zero when the block has none
    pub lines_changed: usize,
}

/// Everything after `Host ` on an opener line, exactly as written
fn opener_alias(content: &str) -> Option<&str> {
    HOST_LINE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Opener text names exactly `target`, ignoring case and trailing whitespace
///
/// `Host web db` does not match `web`.
fn alias_matches(alias: &str, target: &str) -> bool {
    alias.trim_end().to_lowercase() == target.to_lowercase()
}

/// Replace the value of a `HostName` line, keeping indentation, keyword
/// spelling, separator and line terminator
fn replace_hostname(line: &str, new_value: &str) -> Option<String> {
    let content = line_content(line);
    let prefix = HOSTNAME_LINE.captures(content)?.get(1)?.as_str();
    let terminator = &line[content.len()..];
    Some(format!("{prefix}{new_value}{terminator}"))
}

/// Collect `(alias, hostname)` pairs in the order they appear
///
/// A `HostName` line before the first `Host` line is ignored.
pub fn list_hosts(document: &ConfigDocument) -> Vec<HostEntry> {
    let mut current_alias: Option<&str> = None;
    let mut entries = Vec::new();

    for line in document.lines() {
        let content = line_content(line);

        if let Some(alias) = opener_alias(content) {
            current_alias = Some(alias);
        } else if let (Some(alias), Some(caps)) = (current_alias, HOSTNAME_LINE.captures(content))
        {
            entries.push(HostEntry {
                alias: alias.to_string(),
                hostname: caps[2].to_string(),
            });
        }
    }

    entries
}

/// Whether any opener line names exactly `alias`
pub fn has_host(document: &ConfigDocument, alias: &str) -> bool {
    document.lines().iter().any(|line| {
        opener_alias(line_content(line)).is_some_and(|found| alias_matches(found, alias))
    })
}

/// Set the `HostName` of every block opened by exactly `host`
///
/// Fails with [`SshConfigError::HostNotFound`] if no opener names `host`.
/// A matching block without a `HostName` line is left alone and still
/// counts as success.
pub fn update_hostname(
    document: &ConfigDocument,
    host: &str,
    new_value: &str,
) -> Result<UpdateOutcome, SshConfigError> {
    let mut state = BlockState::default();
    let mut host_found = false;
    let mut lines_changed = 0;
    let mut lines = Vec::with_capacity(document.len());

    for line in document.lines() {
        if let Some(alias) = opener_alias(line_content(line)) {
            state = BlockState::for_opener(alias, host);
            host_found |= state == BlockState::InsideTarget;
        }

        let rewritten = match state {
            BlockState::InsideTarget => replace_hostname(line, new_value),
            BlockState::OutsideTarget => None,
        };

        match rewritten {
            Some(rewritten) => {
                tracing::debug!("Rewriting {:?} -> {:?}", line.trim_end(), rewritten.trim_end());
                lines_changed += 1;
                lines.push(rewritten);
            }
            None => lines.push(line.clone()),
        }
    }

    if !host_found {
        return Err(SshConfigError::HostNotFound(host.to_string()));
    }

    if lines_changed == 0 {
        tracing::debug!("Host '{}' has no HostName line; nothing to change", host);
    }

    Ok(UpdateOutcome {
        document: ConfigDocument::from_lines(lines),
        lines_changed,
    })
}

/// Append the template's block unless its alias is already present
pub fn add_host(
    document: &ConfigDocument,
    template: &HostTemplate,
) -> Result<ConfigDocument, SshConfigError> {
    if has_host(document, &template.alias) {
        return Err(SshConfigError::HostAlreadyExists(template.alias.clone()));
    }

    let mut updated = document.clone();
    updated.append_lines(template.render());
    Ok(updated)
}
