//! Container edit types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Discover, Result};

/// Point in the container lifecycle at which the runtime invokes a hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HookLifecycle {
    Prestart,
    CreateRuntime,
    CreateContainer,
    StartContainer,
    Poststart,
    Poststop,
}

impl HookLifecycle {
    /// Get the lifecycle name as used in CDI specs
    pub fn as_str(&self) -> &'static str {
        match self {
            HookLifecycle::Prestart => "prestart",
            HookLifecycle::CreateRuntime => "createRuntime",
            HookLifecycle::CreateContainer => "createContainer",
            HookLifecycle::StartContainer => "startContainer",
            HookLifecycle::Poststart => "poststart",
            HookLifecycle::Poststop => "poststop",
        }
    }
}

impl std::fmt::Display for HookLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hook invocation: which executable the runtime runs, when, and with what argv
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    #[serde(rename = "hookName")]
    pub lifecycle: HookLifecycle,
    pub path: PathBuf,
    /// Full argv; `args[0]` is the base name of `path`
    pub args: Vec<String>,
}

/// A device node to expose inside the container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_path: Option<PathBuf>,
}

/// A host path to mount into the container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mount {
    pub host_path: PathBuf,
    #[serde(rename = "containerPath")]
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Everything a discoverer contributes, in the shape a runtime config expects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerEdits {
    #[serde(rename = "deviceNodes", default, skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<Device>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mounts: Vec<Mount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<Hook>,
}

impl ContainerEdits {
    /// Collect devices, mounts and hooks from a discoverer
    pub fn from_discoverer(discoverer: &dyn Discover) -> Result<Self> {
        Ok(Self {
            devices: discoverer.devices()?,
            mounts: discoverer.mounts()?,
            hooks: discoverer.hooks()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty() && self.mounts.is_empty() && self.hooks.is_empty()
    }
}

/// Last element of `path` after trailing slashes are removed.
/// An empty path gives `.` and a path of only slashes gives `/`.
pub(crate) fn base_name(path: &Path) -> String {
    let path = path.to_string_lossy();
    if path.is_empty() {
        return ".".to_string();
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    match trimmed.rfind('/') {
        Some(i) => trimmed[i + 1..].to_string(),
        None => trimmed.to_string(),
    }
}
