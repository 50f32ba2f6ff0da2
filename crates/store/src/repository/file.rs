//! File-based LoadoutRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use planner_core::Loadout;

use super::error::decode_payload;
use super::{LoadoutRepository, RepositoryError, Result};

/// File-based implementation of LoadoutRepository.
///
/// The collection lives in `<base_dir>/loadouts.json` as pretty-printed JSON
/// so it stays diffable and hand-editable. Writes go through a temp file and
/// an atomic rename.
pub struct FileLoadoutRepository {
    base_dir: PathBuf,
}

impl FileLoadoutRepository {
    pub const FILE_NAME: &'static str = "loadouts.json";

    /// Create a new file-based repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Path of the collection file.
    pub fn path(&self) -> PathBuf {
        self.base_dir.join(Self::FILE_NAME)
    }
}

impl LoadoutRepository for FileLoadoutRepository {
    fn load(&self) -> Result<Vec<serde_json::Value>> {
        let path = self.path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        let records = decode_payload(&raw)?;

        tracing::debug!("Loaded {} loadout records from {}", records.len(), path.display());

        Ok(records)
    }

    fn save(&self, loadouts: &[Loadout]) -> Result<()> {
        let path = self.path();
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(loadouts)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} loadouts to {}", loadouts.len(), path.display());

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let path = self.path();

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted {}", path.display());
        }

        Ok(())
    }
}
