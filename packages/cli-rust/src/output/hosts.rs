//! Host listing output

use console::style;
use sswitch_core::HostEntry;

/// `alias -> hostname`, alias in cyan and hostname in green
pub fn host_line(entry: &HostEntry) -> String {
    format!(
        "{} -> {}",
        style(&entry.alias).cyan(),
        style(&entry.hostname).green()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // StyledObject output includes ANSI codes when colors are enabled, so
    // check the plain text pieces with contains().
    #[test]
    fn host_line_contains_alias_and_hostname() {
        let entry = HostEntry {
            alias: "prod".to_string(),
            hostname: "10.0.0.1".to_string(),
        };
        let line = host_line(&entry);
        assert!(line.contains("prod"));
        assert!(line.contains(" -> "));
        assert!(line.contains("10.0.0.1"));
    }
}
