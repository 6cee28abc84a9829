//! sswitch config - Show the resolved configuration

use anyhow::Result;
use clap::Args;
use console::style;
use sswitch_core::SswitchConfig;

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Text printed for `config`; JSON only when asked for
fn render_config(config: &SswitchConfig, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(config)?);
    }

    let settings = config
        .settings_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none, using defaults)".to_string());

    let lines = [
        style("sswitch configuration").cyan().bold().to_string(),
        String::new(),
        format!("  {} {}", style("Settings file:").dim(), settings),
        format!(
            "  {}    {}",
            style("SSH config:").dim(),
            config.ssh_config_path.display()
        ),
        format!("  {}  {}", style("Default user:").dim(), config.default_user),
        format!(
            "  {} {}",
            style("Identity file:").dim(),
            config.identity_file().display()
        ),
        format!(
            "  {}   {}",
            style("Known hosts:").dim(),
            config.known_hosts_file().display()
        ),
    ];
    Ok(lines.join("\n"))
}

/// The configuration is the command's result, so `-q` does not affect it
pub fn cmd_config(args: &ConfigArgs, config: &SswitchConfig) -> Result<()> {
    println!("{}", render_config(config, args.json)?);
    Ok(())
}
