//! Discoverer trait and the discoverers that don't need host access

use crate::{Device, Hook, Mount, Result};

/// Core trait - any source that contributes devices, mounts or hooks
///
/// Every source implements all three capabilities, returning an empty list
/// for the ones it has nothing to contribute to, so callers can aggregate
/// sources without knowing what they are.
pub trait Discover: Send + Sync {
    /// Device nodes to expose in the container
    fn devices(&self) -> Result<Vec<Device>>;

    /// Host paths to mount into the container
    fn mounts(&self) -> Result<Vec<Mount>>;

    /// Hooks for the runtime to invoke
    fn hooks(&self) -> Result<Vec<Hook>>;
}

/// Discoverer with nothing to contribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Discover for Empty {
    fn devices(&self) -> Result<Vec<Device>> {
        Ok(Vec::new())
    }

    fn mounts(&self) -> Result<Vec<Mount>> {
        Ok(Vec::new())
    }

    fn hooks(&self) -> Result<Vec<Hook>> {
        Ok(Vec::new())
    }
}

/// A hook is its own discoverer: it contributes itself and nothing else
impl Discover for Hook {
    fn devices(&self) -> Result<Vec<Device>> {
        Ok(Vec::new())
    }

    fn mounts(&self) -> Result<Vec<Mount>> {
        Ok(Vec::new())
    }

    fn hooks(&self) -> Result<Vec<Hook>> {
        Ok(vec![self.clone()])
    }
}

/// Concatenation of several discoverers, in order
#[derive(Default)]
pub struct Merged {
    discoverers: Vec<Box<dyn Discover>>,
}

impl Merged {
    pub fn new(discoverers: Vec<Box<dyn Discover>>) -> Self {
        Self { discoverers }
    }

    pub fn push(&mut self, discoverer: Box<dyn Discover>) {
        self.discoverers.push(discoverer);
    }

    pub fn len(&self) -> usize {
        self.discoverers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discoverers.is_empty()
    }

    fn collect<T>(&self, f: impl Fn(&dyn Discover) -> Result<Vec<T>>) -> Result<Vec<T>> {
        let mut all = Vec::new();
        for discoverer in &self.discoverers {
            all.extend(f(discoverer.as_ref())?);
        }
        Ok(all)
    }
}

impl std::fmt::Debug for Merged {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Merged")
            .field("discoverers", &self.discoverers.len())
            .finish()
    }
}

impl Discover for Merged {
    fn devices(&self) -> Result<Vec<Device>> {
        self.collect(|d| d.devices())
    }

    fn mounts(&self) -> Result<Vec<Mount>> {
        self.collect(|d| d.mounts())
    }

    fn hooks(&self) -> Result<Vec<Hook>> {
        self.collect(|d| d.hooks())
    }
}
