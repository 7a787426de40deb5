use thiserror::Error;

/// Failure reading or writing a save slot.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Another thread panicked while holding the in-memory slot table.
    #[error("save slot table lock was poisoned")]
    LockPoisoned,

    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The session could not be encoded; nothing was written.
    #[error("failed to encode session: {0}")]
    Encode(String),

    /// The slot exists but does not hold a readable session.
    #[error("save data is corrupted: {0}")]
    CorruptedData(String),
}

impl RepositoryError {
    pub(crate) fn corrupted(reason: impl std::fmt::Display) -> Self {
        Self::CorruptedData(reason.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
