//! Filesystem-backed executable search
//!
//! Searches `PATH` followed by the well-known installation directories, with
//! every directory re-rooted under a configurable root so that a driver
//! installed under e.g. `/run/nvidia/driver` can be searched like the host.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Locator, LookupError, Result};

/// Installation directories searched after the entries of `PATH`
pub const DEFAULT_SEARCH_PATHS: &[&str] = &[
    "/usr/local/sbin",
    "/usr/local/bin",
    "/usr/sbin",
    "/usr/bin",
    "/sbin",
    "/bin",
];

/// Locates executables by scanning search directories under a root
///
/// The root is made absolute on construction, so every candidate is absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableLocator {
    root: PathBuf,
    search_paths: Vec<PathBuf>,
}

impl ExecutableLocator {
    /// Create a locator for `root` searching `PATH` plus [`DEFAULT_SEARCH_PATHS`]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut search_paths: Vec<PathBuf> = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        search_paths.extend(DEFAULT_SEARCH_PATHS.iter().map(PathBuf::from));

        Self::with_search_paths(root, search_paths)
    }

    /// Create a locator for `root` searching exactly `search_paths`
    pub fn with_search_paths(
        root: impl Into<PathBuf>,
        search_paths: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> Self {
        let root = absolute_root(root.into());
        let search_paths = search_paths
            .into_iter()
            .map(|p| reroot(&root, &p.into()))
            .collect();

        Self { root, search_paths }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Search directories, already joined onto the root
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// A name with a separator is looked up relative to the root only
    fn locate_path(&self, name: &str) -> Result<Vec<PathBuf>> {
        let relative = Path::new(name).strip_prefix("/").unwrap_or(Path::new(name));
        self.which_all(relative, None)
    }

    fn locate_in_search_paths(&self, name: &str) -> Result<Vec<PathBuf>> {
        if self.search_paths.is_empty() {
            return Ok(Vec::new());
        }

        let joined = std::env::join_paths(&self.search_paths)?;
        self.which_all(name, Some(joined))
    }

    fn which_all(
        &self,
        name: impl AsRef<OsStr>,
        paths: Option<OsString>,
    ) -> Result<Vec<PathBuf>> {
        match which::which_in_all(name, paths, &self.root) {
            Ok(found) => Ok(found.collect()),
            Err(which::Error::CannotFindBinaryPath) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for ExecutableLocator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Locator for ExecutableLocator {
    fn locate(&self, name: &str) -> Result<Vec<PathBuf>> {
        if name.is_empty() {
            return Err(LookupError::EmptyName);
        }

        let candidates = if name.contains(std::path::MAIN_SEPARATOR) {
            debug!("Looking for {} under {}", name, self.root.display());
            self.locate_path(name)?
        } else {
            debug!("Searching for {} in {:?}", name, self.search_paths);
            self.locate_in_search_paths(name)?
        };

        debug!("Located {} candidates for {}: {:?}", candidates.len(), name, candidates);
        Ok(candidates)
    }
}

/// An empty root is `/`; a relative root is taken from the current directory
fn absolute_root(root: PathBuf) -> PathBuf {
    if root.as_os_str().is_empty() {
        return PathBuf::from("/");
    }
    std::path::absolute(&root).unwrap_or(root)
}

/// Join `path` onto `root`, treating an absolute `path` as relative to `root`
fn reroot(root: &Path, path: &Path) -> PathBuf {
    let relative = path.strip_prefix("/").unwrap_or(path);
    if relative.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    }
}
