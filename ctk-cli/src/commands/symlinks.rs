use std::path::Path;

use anyhow::Result;
use clap::Args;
use ctk_discover::{ContainerEdits, create_symlink_hook};

use crate::config::{ConfigLoader, HooksConfig};

#[derive(Args)]
pub struct SymlinksArgs {
    /// Executable name or absolute path (overrides `[nvidia-ctk] path`)
    #[arg(long)]
    pub nvidia_ctk_path: Option<String>,

    /// Symlink to create, passed through to the hook verbatim (repeatable)
    #[arg(long = "link", value_name = "SPEC")]
    pub links: Vec<String>,
}

pub fn run(args: SymlinksArgs, config_path: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    let edits = container_edits(&config, &args)?;
    println!("{}", serde_json::to_string_pretty(&edits)?);
    Ok(())
}

fn container_edits(config: &HooksConfig, args: &SymlinksArgs) -> Result<ContainerEdits> {
    let nvidia_ctk = super::resolve::resolve(config, args.nvidia_ctk_path.as_deref());
    let discoverer = create_symlink_hook(&nvidia_ctk, &args.links);
    Ok(ContainerEdits::from_discoverer(discoverer.as_ref())?)
}
