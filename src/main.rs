//! uptane-banners - full-screen status banners for Uptane update demos.

mod commands;

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use uptane_banners::cli::{Cli, Commands, ConfigCommands, DemoArgs};
use uptane_banners::{logging, Config};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command.unwrap_or_else(|| Commands::Demo(DemoArgs::default())) {
        Commands::Demo(args) => commands::demo::handle(&load_config(&config_path)?, &args),
        Commands::Show(args) => commands::show::handle(&load_config(&config_path)?, &args),
        Commands::List => commands::list::handle(),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(&config_path),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(&config_path),
        Commands::Config(ConfigCommands::Init { force }) => {
            commands::config::handle_init(&config_path, force)
        }
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load_from(path)?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
