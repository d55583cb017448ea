use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "ctk-hooks",
    about = "Generate NVIDIA Container Toolkit create-container hooks"
)]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file layered over the system config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the nvidia-ctk path hooks will invoke
    Resolve(commands::resolve::ResolveArgs),
    /// Print the container edits for a create-symlinks hook
    Symlinks(commands::symlinks::SymlinksArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries command output, so diagnostics go to stderr
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args, config_path),
        Commands::Symlinks(args) => commands::symlinks::run(args, config_path),
        Commands::Config(args) => commands::config::run(args, config_path),
    }
}
