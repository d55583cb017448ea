use super::types::{
    DEFAULT_ROOT, HooksConfig, LookupConfig, NvidiaCtkConfig, RawHooksConfig, RawLookupConfig,
    RawNvidiaCtkConfig,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime config file shared with the container runtime
pub const SYSTEM_CONFIG_PATH: &str = "/etc/nvidia-container-runtime/config.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (system + explicit file)
    pub fn load(explicit: Option<&Path>) -> Result<HooksConfig> {
        let mut raw = RawHooksConfig::default();

        // Layer 1: System config, skipped when absent
        let system_path = Self::system_config_path();
        if system_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&system_path)?);
        }

        // Layer 2: Explicit config, which must exist
        if let Some(path) = explicit {
            raw = Self::merge_raw(raw, Self::read_raw(path)?);
        }

        // Convert to final config with defaults applied
        Ok(Self::finalize(raw))
    }

    /// Get system config path
    /// Can be overridden with CTK_HOOKS_CONFIG env var (useful for isolated tests)
    pub fn system_config_path() -> PathBuf {
        if let Ok(path) = std::env::var("CTK_HOOKS_CONFIG") {
            PathBuf::from(path)
        } else {
            PathBuf::from(SYSTEM_CONFIG_PATH)
        }
    }

    fn read_raw(path: &Path) -> Result<RawHooksConfig> {
        debug!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawHooksConfig, overlay: RawHooksConfig) -> RawHooksConfig {
        RawHooksConfig {
            nvidia_ctk: RawNvidiaCtkConfig {
                path: overlay.nvidia_ctk.path.or(base.nvidia_ctk.path),
            },
            lookup: RawLookupConfig {
                root: overlay.lookup.root.or(base.lookup.root),
                search_paths: overlay.lookup.search_paths.or(base.lookup.search_paths),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawHooksConfig) -> HooksConfig {
        HooksConfig {
            nvidia_ctk: NvidiaCtkConfig {
                path: raw
                    .nvidia_ctk
                    .path
                    .unwrap_or_else(|| NvidiaCtkConfig::default().path),
            },
            lookup: LookupConfig {
                root: raw.lookup.root.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
                search_paths: raw.lookup.search_paths,
            },
        }
    }
}
