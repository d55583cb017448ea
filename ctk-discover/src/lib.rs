//! ctk-discover - container edits contributed by discoverers
//!
//! Devices, mounts and hooks that end up in a container's runtime
//! configuration all come from a [`Discover`] implementation. This crate
//! provides the abstraction, the create-container hooks that invoke the
//! `nvidia-ctk` helper, and the resolver that decides which helper binary
//! those hooks point at.

pub mod discover;
pub mod error;
pub mod hooks;
pub mod resolver;
pub mod types;

pub use discover::{Discover, Empty, Merged};
pub use error::{DiscoverError, Result};
pub use hooks::{create_nvidia_ctk_hook, create_symlink_hook};
pub use resolver::{
    NVIDIA_CTK_DEFAULT_FILE_PATH, NVIDIA_CTK_EXECUTABLE, Resolver, ResolverConfig,
    find_nvidia_ctk,
};
pub use types::*;
