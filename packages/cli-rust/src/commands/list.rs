//! sswitch list - List hosts and their HostName

use anyhow::Result;
use clap::Args;
use sswitch_core::{HostEntry, SswitchConfig, list_hosts_in};

use crate::output::host_line;

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Show only host aliases (for scripting)
    #[arg(long)]
    pub names_only: bool,
}

/// Lines printed for `hosts`, in file order
fn render_hosts(hosts: &[HostEntry], names_only: bool) -> Vec<String> {
    if hosts.is_empty() {
        return if names_only {
            Vec::new()
        } else {
            vec!["no hostnames found".to_string()]
        };
    }

    hosts
        .iter()
        .map(|entry| {
            if names_only {
                entry.alias.clone()
            } else {
                host_line(entry)
            }
        })
        .collect()
}

/// The listing is the command's result, so `-q` does not affect it
pub fn cmd_list(args: &ListArgs, config: &SswitchConfig) -> Result<()> {
    let hosts = list_hosts_in(&config.ssh_config_path)?;

    for line in render_hosts(&hosts, args.names_only) {
        println!("{line}");
    }

    Ok(())
}
