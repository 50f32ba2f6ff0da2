//! Repository contract for the persisted loadout collection.

use planner_core::Loadout;

use super::Result;

/// Repository for the loadout collection.
///
/// This is for user-authored data that changes on every edit. Reference
/// tables are static content and never pass through a repository.
pub trait LoadoutRepository: Send + Sync {
    /// Load every persisted record, undecoded.
    ///
    /// An absent payload is an empty collection. A payload that is not a
    /// JSON array fails with [`RepositoryError::CorruptedData`](super::RepositoryError).
    fn load(&self) -> Result<Vec<serde_json::Value>>;

    /// Replace the persisted collection.
    fn save(&self, loadouts: &[Loadout]) -> Result<()>;

    /// Remove the persisted collection.
    fn clear(&self) -> Result<()>;
}

impl<T: LoadoutRepository + ?Sized> LoadoutRepository for Box<T> {
    fn load(&self) -> Result<Vec<serde_json::Value>> {
        (**self).load()
    }

    fn save(&self, loadouts: &[Loadout]) -> Result<()> {
        (**self).save(loadouts)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
