//! Error types for executable lookup

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Executable name must not be empty")]
    EmptyName,

    #[error("Invalid search path: {0}")]
    SearchPath(#[from] std::env::JoinPathsError),

    #[error("Search failed: {0}")]
    Search(#[from] which::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;
