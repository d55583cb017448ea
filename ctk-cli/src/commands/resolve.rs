use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use crate::config::{ConfigLoader, HooksConfig};

#[derive(Args)]
pub struct ResolveArgs {
    /// Executable name or absolute path (overrides `[nvidia-ctk] path`)
    #[arg(long)]
    pub nvidia_ctk_path: Option<String>,
}

pub fn run(args: ResolveArgs, config_path: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    let path = resolve(&config, args.nvidia_ctk_path.as_deref());
    println!("{}", path.display());
    Ok(())
}

/// Resolve the helper, preferring the command-line value over the config
pub fn resolve(config: &HooksConfig, nvidia_ctk_path: Option<&str>) -> PathBuf {
    let preferred = nvidia_ctk_path.unwrap_or(&config.nvidia_ctk.path);
    config.resolver().resolve(preferred)
}
