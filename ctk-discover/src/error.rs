//! Error types for discovery

#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("Failed to discover devices: {0}")]
    Devices(String),

    #[error("Failed to discover mounts: {0}")]
    Mounts(String),

    #[error("Failed to discover hooks: {0}")]
    Hooks(String),
}

pub type Result<T> = std::result::Result<T, DiscoverError>;
