//! In-memory LoadoutRepository implementation for tests and ephemeral sessions.

use std::sync::RwLock;

use planner_core::Loadout;

use super::error::decode_payload;
use super::{LoadoutRepository, RepositoryError, Result};

/// In-memory implementation of LoadoutRepository.
///
/// Holds the serialized payload exactly as a browser key/value store would,
/// including an optional size quota so write failures can be exercised.
pub struct InMemoryLoadoutRepo {
    payload: RwLock<Option<String>>,
    quota: Option<usize>,
}

impl InMemoryLoadoutRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            payload: RwLock::new(None),
            quota: None,
        }
    }

    /// Create with a raw payload already stored (possibly malformed).
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RwLock::new(Some(payload.into())),
            quota: None,
        }
    }

    /// Reject saves whose serialized size exceeds `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// The currently stored payload.
    pub fn payload(&self) -> Option<String> {
        self.payload
            .read()
            .map(|payload| payload.clone())
            .unwrap_or(None)
    }
}

impl Default for InMemoryLoadoutRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadoutRepository for InMemoryLoadoutRepo {
    fn load(&self) -> Result<Vec<serde_json::Value>> {
        let payload = self
            .payload
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        match payload.as_deref() {
            None => Ok(Vec::new()),
            Some(raw) => decode_payload(raw),
        }
    }

    fn save(&self, loadouts: &[Loadout]) -> Result<()> {
        let encoded =
            serde_json::to_string(loadouts).map_err(|e| RepositoryError::Json(e.to_string()))?;
        if let Some(limit) = self.quota
            && encoded.len() > limit
        {
            return Err(RepositoryError::QuotaExceeded {
                needed: encoded.len(),
                limit,
            });
        }
        let mut payload = self
            .payload
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *payload = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut payload = self
            .payload
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *payload = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn loadout(name: &str) -> Loadout {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        Loadout::empty(name.into(), name, now)
    }

    #[test]
    fn empty_repo_loads_nothing() {
        let repo = InMemoryLoadoutRepo::new();
        assert!(repo.load().unwrap().is_empty());
        assert_eq!(repo.payload(), None);
    }

    #[test]
    fn save_then_load_returns_raw_records() {
        let repo = InMemoryLoadoutRepo::new();
        repo.save(&[loadout("a"), loadout("b")]).unwrap();

        let records = repo.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "a");
        assert_eq!(records[1]["schemaVersion"], 2);
    }

    #[test]
    fn quota_rejects_large_writes_and_keeps_previous_payload() {
        let repo = InMemoryLoadoutRepo::new().with_quota(10);
        let err = repo.save(&[loadout("a")]).unwrap_err();
        assert!(matches!(err, RepositoryError::QuotaExceeded { limit: 10, .. }));
        assert_eq!(repo.payload(), None);
    }

    #[test]
    fn clear_removes_payload() {
        let repo = InMemoryLoadoutRepo::with_payload("[]");
        repo.clear().unwrap();
        assert_eq!(repo.payload(), None);
    }
}
