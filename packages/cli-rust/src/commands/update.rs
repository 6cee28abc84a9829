//! sswitch update - Change the HostName of a host

use anyhow::Result;
use clap::Args;
use console::style;
use sswitch_core::{SswitchConfig, update_hostname_in};

/// Arguments for the update command
#[derive(Args)]
pub struct UpdateArgs {
    /// Host alias as written after `Host`
    pub host: String,

    /// New HostName value (IP address or hostname)
    pub new_value: String,
}

/// Rewrite the HostName inside the block opened by `Host <host>`
///
/// A block without a HostName line is left as is and still reported as
/// updated.
pub fn cmd_update(args: &UpdateArgs, config: &SswitchConfig, quiet: bool) -> Result<()> {
    let path = &config.ssh_config_path;
    update_hostname_in(path, &args.host, &args.new_value)?;

    if !quiet {
        println!(
            "{} HostName for '{}' to '{}' in {}",
            style("Successfully updated").green(),
            style(&args.host).cyan(),
            style(&args.new_value).cyan(),
            path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sswitch_core::SshConfigError;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const SAMPLE: &str = "Host prod\n    HostName 10.0.0.1\nHost dev\n    HostName 10.0.0.2\n";

    fn config_for(path: &Path) -> SswitchConfig {
        SswitchConfig::from_parts(PathBuf::from("/home/u"), None, Some(path.to_path_buf()))
            .unwrap()
    }

    fn args(host: &str, new_value: &str) -> UpdateArgs {
        UpdateArgs {
            host: host.to_string(),
            new_value: new_value.to_string(),
        }
    }

    #[test]
    fn update_rewrites_hostname() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, SAMPLE).unwrap();

        cmd_update(&args("dev", "10.0.0.9"), &config_for(&path), true).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Host dev\n    HostName 10.0.0.9\n"));
        assert!(contents.contains("Host prod\n    HostName 10.0.0.1\n"));
    }

    #[test]
    fn update_unknown_host_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, SAMPLE).unwrap();

        let err = cmd_update(&args("qa", "1.1.1.1"), &config_for(&path), true).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SshConfigError>(),
            Some(SshConfigError::HostNotFound(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
    }

    #[test]
    fn update_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");

        let err = cmd_update(&args("dev", "1.1.1.1"), &config_for(&path), true).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SshConfigError>(),
            Some(SshConfigError::ConfigFileNotFound(_))
        ));
    }
}
