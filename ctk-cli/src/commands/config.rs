use std::path::Path;

use crate::config::ConfigLoader;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (merged)
    Show,
    /// Show configuration file paths
    Path,
}

pub fn run(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(config_path),
        ConfigCommands::Path => show_paths(config_path),
    }
}

fn show_config(config_path: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str);
    Ok(())
}

fn show_paths(config_path: Option<&Path>) -> Result<()> {
    println!("System config:   {:?}", ConfigLoader::system_config_path());
    println!("Explicit config: {:?}", config_path);
    Ok(())
}
