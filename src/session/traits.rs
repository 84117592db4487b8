//! Flag storage trait definitions

use std::path::Path;
use thiserror::Error;

/// Errors that can occur while persisting session state
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to replace state file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Durable storage for a single short text value
///
/// Implementations must be thread-safe; request handlers share one store.
pub trait FlagStore: Send + Sync {
    /// Load the stored text. `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> SessionResult<Option<String>>;

    /// Replace the stored text entirely
    fn store(&self, value: &str) -> SessionResult<()>;
}

/// Extension trait for opening stores from paths
pub trait OpenFlagStore: FlagStore + Sized {
    /// Open a store backed by `path`; the file need not exist yet
    fn open(path: impl AsRef<Path>) -> SessionResult<Self>;
}
