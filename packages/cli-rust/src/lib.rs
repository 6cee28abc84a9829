//! sswitch CLI - Switch SSH config hosts between addresses
//!
//! This module contains the CLI implementation used by the `sswitch` binary.

mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use sswitch_core::{ConfigOverrides, resolve_config};
use tracing_subscriber::EnvFilter;

/// Manage Host entries in your SSH config
#[derive(Parser)]
#[command(name = "sswitch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List, update and add Host entries in your SSH config", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// SSH config file to operate on (overrides the settings file)
    #[arg(long, global = true, value_name = "PATH")]
    ssh_config: Option<PathBuf>,

    /// Settings file to load instead of searching for sswitch_config
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List hosts and their HostName
    List(commands::ListArgs),
    /// Change the HostName of a host
    Update(commands::UpdateArgs),
    /// Append a new host block with default settings
    Add(commands::AddArgs),
    /// Show the resolved configuration
    Config(commands::ConfigArgs),
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let overrides = ConfigOverrides {
        settings_path: cli.settings.clone(),
        ssh_config_path: cli.ssh_config.clone(),
    };
    let config = resolve_config(&overrides)?;
    tracing::debug!("Resolved configuration: {:?}", config);

    // Show verbose info if requested
    if cli.verbose > 0 {
        eprintln!(
            "{} sswitch {}",
            style("[info]").cyan(),
            env!("CARGO_PKG_VERSION")
        );
        eprintln!(
            "{} SSH config: {}",
            style("[info]").cyan(),
            config.ssh_config_path.display()
        );
    }

    match &cli.command {
        Commands::List(args) => commands::cmd_list(args, &config),
        Commands::Update(args) => commands::cmd_update(args, &config, cli.quiet),
        Commands::Add(args) => commands::cmd_add(args, &config, cli.quiet),
        Commands::Config(args) => commands::cmd_config(args, &config),
    }
}
