//! sswitch add - Append a new host block

use anyhow::Result;
use clap::Args;
use console::style;
use sswitch_core::{HostTemplate, SswitchConfig, add_host_in};

/// Arguments for the add command
#[derive(Args)]
pub struct AddArgs {
    /// Alias for the new `Host` block (e.g., "staging")
    pub alias: String,
}

/// Append a default host block for `alias`
///
/// The block gets a placeholder HostName, the default identity and
/// known-hosts files, and the configured default user.
pub fn cmd_add(args: &AddArgs, config: &SswitchConfig, quiet: bool) -> Result<()> {
    let template = HostTemplate::new(&args.alias, config);
    let path = &config.ssh_config_path;

    add_host_in(path, &template)?;

    if !quiet {
        println!(
            "{} host '{}' to {}",
            style("Successfully added").green(),
            style(&args.alias).cyan(),
            path.display()
        );
        println!(
            "  {} {}",
            style("Set its address with:").dim(),
            style(format!("sswitch update {} <hostname>", args.alias)).yellow()
        );
    }

    Ok(())
}
