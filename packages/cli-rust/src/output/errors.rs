//! Error display for CLI commands
//!
//! Prints the error chain and, for the failures users hit most, a hint on
//! what to do next.

use console::style;
use sswitch_core::{SettingsError, SshConfigError};

/// Suggest a next step for known errors
pub fn error_hint(err: &anyhow::Error) -> Option<String> {
    if let Some(err) = err.downcast_ref::<SshConfigError>() {
        return match err {
            SshConfigError::ConfigFileNotFound(_) => Some(
                "Use --ssh-config <PATH>, or set ssh_config under [settings] in sswitch_config."
                    .to_string(),
            ),
            SshConfigError::HostNotFound(host) => Some(format!(
                "Run 'sswitch list' to see configured hosts, or 'sswitch add {host}' to create it."
            )),
            SshConfigError::HostAlreadyExists(host) => Some(format!(
                "Change its address with: sswitch update {host} <hostname>"
            )),
            SshConfigError::Read { .. } | SshConfigError::Write { .. } => None,
        };
    }

    match err.downcast_ref::<SettingsError>() {
        Some(SettingsError::Parse { .. }) => Some(
            "Settings use INI format: a [settings] header followed by key = value lines."
                .to_string(),
        ),
        Some(SettingsError::NoHomeDirectory) => Some("Ensure HOME is set.".to_string()),
        _ => None,
    }
}

/// Print an error to stderr with an optional hint
pub fn show_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", style("Error:").red().bold(), err);

    if let Some(hint) = error_hint(err) {
        eprintln!();
        eprintln!("  {} {}", style("Tip:").cyan(), hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn hint_for_missing_config_file() {
        let err = anyhow::Error::new(SshConfigError::ConfigFileNotFound(PathBuf::from("/x")));
        assert!(error_hint(&err).unwrap().contains("--ssh-config"));
    }

    #[test]
    fn hint_for_unknown_host_names_it() {
        let err = anyhow::Error::new(SshConfigError::HostNotFound("dev".to_string()));
        assert!(error_hint(&err).unwrap().contains("sswitch add dev"));
    }

    #[test]
    fn hint_for_existing_host_suggests_update() {
        let err = anyhow::Error::new(SshConfigError::HostAlreadyExists("dev".to_string()));
        assert!(error_hint(&err).unwrap().contains("sswitch update dev"));
    }

    #[test]
    fn hint_for_settings_parse_error() {
        let err = anyhow::Error::new(SettingsError::Parse {
            path: PathBuf::from("sswitch_config"),
            line: 1,
            message: "bad".to_string(),
        });
        assert!(error_hint(&err).unwrap().contains("[settings]"));
    }

    #[test]
    fn no_hint_for_other_errors() {
        let err = anyhow::anyhow!("something else");
        assert!(error_hint(&err).is_none());
    }

    #[test]
    fn read_error_cause_printed_once() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "not valid UTF-8");
        let err = anyhow::Error::new(SshConfigError::Read {
            path: PathBuf::from("/x/config"),
            source: io,
        });

        let shown = format!("{err:#}");
        assert_eq!(shown, "Failed to read /x/config: not valid UTF-8");
        assert_eq!(shown.matches("not valid UTF-8").count(), 1);
    }

    #[test]
    fn settings_read_error_cause_printed_once() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = anyhow::Error::new(SettingsError::Read {
            path: PathBuf::from("sswitch_config"),
            source: io,
        });

        assert_eq!(
            format!("{err:#}"),
            "Failed to read settings file sswitch_config: denied"
        );
    }

    #[test]
    fn domain_messages_match_cli_wording() {
        let err = anyhow::Error::new(SshConfigError::HostNotFound("dev".to_string()));
        assert_eq!(err.to_string(), "Host 'dev' not found in config file!");
    }
}
