//! File-based SessionRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::Session;

use crate::repository::{RepositoryError, Result, SessionRepository};

/// File-based implementation of SessionRepository.
///
/// Each slot is a file in `base_dir` named after the slot.
///
/// # File Format
///
/// ```text
/// [magic: 4 bytes "DGSV"][version: u32 LE][bincode(Session)]
/// ```
///
/// A file with the wrong magic or version loads as
/// [`RepositoryError::CorruptedData`] rather than being misread.
pub struct FileSessionRepository {
    base_dir: PathBuf,
}

impl FileSessionRepository {
    pub const MAGIC: [u8; 4] = *b"DGSV";
    pub const FORMAT_VERSION: u32 = 1;
    const HEADER_LEN: usize = 8;

    /// Create a new file-based session repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a slot file.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.base_dir.join(slot)
    }

    fn encode(session: &Session) -> Result<Vec<u8>> {
        let body = bincode::serialize(session).map_err(|e| RepositoryError::Encode(e.to_string()))?;

        let mut bytes = Vec::with_capacity(Self::HEADER_LEN + body.len());
        bytes.extend_from_slice(&Self::MAGIC);
        bytes.extend_from_slice(&Self::FORMAT_VERSION.to_le_bytes());
        bytes.extend_from_slice(&body);
        Ok(bytes)
    }

    fn decode(bytes: &[u8]) -> Result<Session> {
        if bytes.len() < Self::HEADER_LEN || bytes[..4] != Self::MAGIC {
            return Err(RepositoryError::corrupted("missing save file header"));
        }

        let mut version = [0u8; 4];
        version.copy_from_slice(&bytes[4..Self::HEADER_LEN]);
        let version = u32::from_le_bytes(version);
        if version != Self::FORMAT_VERSION {
            return Err(RepositoryError::corrupted(format_args!(
                "unsupported save format version {version} (expected {})",
                Self::FORMAT_VERSION
            )));
        }

        bincode::deserialize(&bytes[Self::HEADER_LEN..])
            .map_err(RepositoryError::corrupted)
    }
}

impl SessionRepository for FileSessionRepository {
    fn save(&self, slot: &str, session: &Session) -> Result<()> {
        let path = self.slot_path(slot);
        let temp_path = path.with_extension("tmp");

        let bytes = Self::encode(session)?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved session to {}", path.display());

        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<Session>> {
        let path = self.slot_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let session = Self::decode(&bytes)?;

        tracing::debug!("Loaded session from {}", path.display());

        Ok(Some(session))
    }

    fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).exists()
    }
}
