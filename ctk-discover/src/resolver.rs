//! Resolution of the `nvidia-ctk` executable that hooks invoke

use std::path::{Path, PathBuf};

use ctk_lookup::{ExecutableLocator, Locator};
use tracing::{debug, warn};

/// Name searched for when no executable is configured
pub const NVIDIA_CTK_EXECUTABLE: &str = "nvidia-ctk";

/// Path used when the search finds nothing
pub const NVIDIA_CTK_DEFAULT_FILE_PATH: &str = "/usr/bin/nvidia-ctk";

/// Executable name and fallback path used by a [`Resolver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub executable: String,
    pub fallback_path: PathBuf,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            executable: NVIDIA_CTK_EXECUTABLE.to_string(),
            fallback_path: PathBuf::from(NVIDIA_CTK_DEFAULT_FILE_PATH),
        }
    }
}

/// Picks the helper executable path to put in hooks
///
/// Precedence:
/// 1. an absolute path is used as-is, without checking that it exists
/// 2. otherwise the name (or the configured default name when empty) is
///    searched for and the first candidate wins
/// 3. if the search fails or finds nothing, the fallback path is used,
///    again without checking that it exists
///
/// Nothing is cached; each call searches again.
#[derive(Debug, Clone)]
pub struct Resolver<L = ExecutableLocator> {
    config: ResolverConfig,
    locator: L,
}

impl<L: Locator> Resolver<L> {
    pub fn new(config: ResolverConfig, locator: L) -> Self {
        Self { config, locator }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `preferred` (a name, an absolute path, or empty) to a path.
    /// Never fails and never returns an empty path.
    pub fn resolve(&self, preferred: &str) -> PathBuf {
        if Path::new(preferred).is_absolute() {
            debug!("Using specified NVIDIA Container Toolkit CLI path {}", preferred);
            return PathBuf::from(preferred);
        }

        let name = if preferred.is_empty() {
            self.config.executable.as_str()
        } else {
            preferred
        };
        debug!("Locating NVIDIA Container Toolkit CLI as {}", name);

        let hook_path = match self.locator.locate(name) {
            Err(e) => {
                warn!("Failed to locate {}: {}", name, e);
                self.config.fallback_path.clone()
            }
            Ok(candidates) if candidates.is_empty() => {
                warn!("{} not found", name);
                self.config.fallback_path.clone()
            }
            Ok(mut candidates) => {
                debug!("Found {} candidates for {}: {:?}", candidates.len(), name, candidates);
                candidates.swap_remove(0)
            }
        };
        debug!(
            "Using NVIDIA Container Toolkit CLI path {}",
            hook_path.display()
        );

        hook_path
    }
}

impl Default for Resolver<ExecutableLocator> {
    fn default() -> Self {
        Self::new(ResolverConfig::default(), ExecutableLocator::default())
    }
}

/// Resolve the `nvidia-ctk` path with the default name, fallback and host search
pub fn find_nvidia_ctk(preferred: &str) -> PathBuf {
    Resolver::default().resolve(preferred)
}
