//! ctk-lookup - locating executables on the host
//!
//! The [`Locator`] trait is the narrow seam the hook resolver depends on: given
//! a name, return zero or more candidate paths ordered by preference.
//! [`ExecutableLocator`] is the filesystem-backed implementation.

pub mod error;
pub mod executable;

pub use error::{LookupError, Result};
pub use executable::{DEFAULT_SEARCH_PATHS, ExecutableLocator};

use std::path::PathBuf;

/// Something that can find candidate paths for an executable name
pub trait Locator: Send + Sync {
    /// Locate `name`, returning candidates in preference order.
    ///
    /// An empty list means nothing was found and is not an error.
    fn locate(&self, name: &str) -> Result<Vec<PathBuf>>;
}

impl<L: Locator + ?Sized> Locator for &L {
    fn locate(&self, name: &str) -> Result<Vec<PathBuf>> {
        (**self).locate(name)
    }
}

impl<L: Locator + ?Sized> Locator for Box<L> {
    fn locate(&self, name: &str) -> Result<Vec<PathBuf>> {
        (**self).locate(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<PathBuf>);

    impl Locator for Fixed {
        fn locate(&self, _name: &str) -> Result<Vec<PathBuf>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_locator_trait_is_object_safe() {
        fn _takes_boxed_locator(_: Box<dyn Locator>) {}
    }

    #[test]
    fn test_boxed_locator_delegates() {
        let boxed: Box<dyn Locator> = Box::new(Fixed(vec![PathBuf::from("/bin/true")]));
        assert_eq!(boxed.locate("true").unwrap(), vec![PathBuf::from("/bin/true")]);
    }

    #[test]
    fn test_borrowed_locator_delegates() {
        let fixed = Fixed(vec![]);
        let borrowed = &fixed;
        assert!(borrowed.locate("anything").unwrap().is_empty());
    }
}
