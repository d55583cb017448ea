use ctk_discover::{NVIDIA_CTK_EXECUTABLE, Resolver, ResolverConfig};
use ctk_lookup::ExecutableLocator;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration as stored in TOML files (with optional fields for merging)
///
/// Unknown tables are ignored so the runtime's own config file can be read.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawHooksConfig {
    #[serde(default, rename = "nvidia-ctk")]
    pub nvidia_ctk: RawNvidiaCtkConfig,

    #[serde(default)]
    pub lookup: RawLookupConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawNvidiaCtkConfig {
    /// Executable name or absolute path
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawLookupConfig {
    /// Root the search directories are joined onto
    pub root: Option<PathBuf>,

    /// Replaces `PATH` plus the default install directories
    pub search_paths: Option<Vec<PathBuf>>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HooksConfig {
    #[serde(default, rename = "nvidia-ctk")]
    pub nvidia_ctk: NvidiaCtkConfig,

    #[serde(default)]
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NvidiaCtkConfig {
    pub path: String,
}

impl Default for NvidiaCtkConfig {
    fn default() -> Self {
        Self {
            path: NVIDIA_CTK_EXECUTABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LookupConfig {
    pub root: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_paths: Option<Vec<PathBuf>>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            search_paths: None,
        }
    }
}

/// Default root for executable search
pub const DEFAULT_ROOT: &str = "/";

impl HooksConfig {
    /// Locator for the configured root and search directories
    pub fn locator(&self) -> ExecutableLocator {
        match &self.lookup.search_paths {
            Some(paths) => ExecutableLocator::with_search_paths(&self.lookup.root, paths.clone()),
            None => ExecutableLocator::new(&self.lookup.root),
        }
    }

    pub fn resolver(&self) -> Resolver<ExecutableLocator> {
        Resolver::new(ResolverConfig::default(), self.locator())
    }
}
