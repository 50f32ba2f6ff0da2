//! The loadout collection and its mutation path.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use planner_core::schema::{
    CLASSED_ARMOR_SLOTS, is_classed_armor_slot, require_classed_slot, require_slot,
};
use planner_core::{
    ArmorClass, ItemCatalog, Loadout, LoadoutId, LoadoutPatch, MissionType, PlannerError,
    SchemaError, SlotValue,
};

use crate::migration::decode_record;
use crate::repository::{LoadoutRepository, RepositoryError};
use crate::transfer::{self, BulkImport, ImportError};

/// Generates a fresh random loadout id.
pub fn new_loadout_id() -> LoadoutId {
    LoadoutId::new(uuid::Uuid::new_v4().to_string())
}

/// Ordered loadout collection, newest first, backed by a repository.
///
/// Every mutating call persists the whole collection before returning. A
/// failed write never reaches the caller: the store logs it, keeps its
/// in-memory state and reports [`is_persisting`](Self::is_persisting) as false
/// until a later write succeeds.
pub struct LoadoutStore<R: LoadoutRepository> {
    repo: R,
    loadouts: Vec<Loadout>,
    persisting: bool,
}

impl<R: LoadoutRepository> LoadoutStore<R> {
    /// Loads and migrates the persisted collection.
    ///
    /// An unreadable payload yields an empty collection; records that fail to
    /// decode are skipped.
    pub fn open(repo: R) -> Self {
        let mut store = Self {
            repo,
            loadouts: Vec::new(),
            persisting: true,
        };
        store.load();
        store
    }

    /// Re-reads the collection from the repository, discarding in-memory state.
    pub fn load(&mut self) {
        let records = match self.repo.load() {
            Ok(records) => records,
            Err(e) => {
                log_repository_error(&e, "persisted loadouts unreadable; starting empty");
                Vec::new()
            }
        };

        self.loadouts = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match decode_record(record) {
                Ok(loadout) => Some(loadout),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping undecodable loadout record");
                    None
                }
            })
            .collect();

        tracing::info!(count = self.loadouts.len(), "loaded loadouts");
    }

    /// False after a failed write, until the next successful one.
    pub fn is_persisting(&self) -> bool {
        self.persisting
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All loadouts, newest first.
    pub fn loadouts(&self) -> &[Loadout] {
        &self.loadouts
    }

    pub fn len(&self) -> usize {
        self.loadouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loadouts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Loadout> {
        self.loadouts.iter().find(|l| l.id.as_str() == id)
    }

    /// Resolves an exact id or an unambiguous id prefix.
    pub fn find(&self, id_or_prefix: &str) -> Option<&Loadout> {
        if let Some(exact) = self.get(id_or_prefix) {
            return Some(exact);
        }
        if id_or_prefix.is_empty() {
            return None;
        }
        let mut matches = self
            .loadouts
            .iter()
            .filter(|l| l.id.as_str().starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// Loadouts of one mission type, or all of them for `None`.
    pub fn filter_by_mission(&self, mission: Option<MissionType>) -> Vec<&Loadout> {
        self.loadouts
            .iter()
            .filter(|l| mission.is_none_or(|m| l.mission_type == m))
            .collect()
    }

    /// Number of loadouts per mission type; types with none are omitted.
    pub fn mission_counts(&self) -> BTreeMap<MissionType, usize> {
        let mut counts = BTreeMap::new();
        for loadout in &self.loadouts {
            *counts.entry(loadout.mission_type).or_insert(0) += 1;
        }
        counts
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Inserts at the front.
    pub fn add(&mut self, loadout: Loadout) {
        tracing::debug!(id = %loadout.id, name = %loadout.name, "adding loadout");
        self.loadouts.insert(0, loadout);
        self.persist();
    }

    /// Creates a loadout from the mission type's preset and adds it.
    pub fn create(&mut self, name: impl Into<String>, mission: MissionType) -> LoadoutId {
        let id = new_loadout_id();
        self.add(Loadout::from_preset(id.clone(), name, mission, Utc::now()));
        id
    }

    /// Applies a patch. Returns false (and writes nothing) if `id` is unknown.
    pub fn update(&mut self, id: &str, patch: LoadoutPatch) -> bool {
        let now = Utc::now();
        let Some(loadout) = self.loadouts.iter_mut().find(|l| l.id.as_str() == id) else {
            return false;
        };
        patch.apply(loadout, now);
        self.persist();
        true
    }

    /// Replaces one slot's contents.
    ///
    /// For classed armor slots, an item the catalog knows a class for also
    /// pins that slot's class. Unknown items leave the class untouched.
    pub fn set_slot<C: ItemCatalog + ?Sized>(
        &mut self,
        id: &str,
        slot: &str,
        value: SlotValue,
        catalog: &C,
    ) -> Result<bool, SchemaError> {
        let def = require_slot(slot)?;
        let Some(loadout) = self.get(id) else {
            return Ok(false);
        };

        let detected = if is_classed_armor_slot(def.id) {
            value.equipped().and_then(|item| catalog.armor_class_of(item))
        } else {
            None
        };

        let mut slots = loadout.slots.clone();
        slots.insert(def.id.to_string(), value);
        let mut patch = LoadoutPatch::new().slots(slots);
        if let Some(class) = detected {
            let mut classes = loadout.slot_classes.clone();
            classes.insert(def.id.to_string(), class);
            patch = patch.slot_classes(classes);
        }
        Ok(self.update(id, patch))
    }

    /// Pins or clears the class of a classed armor slot.
    pub fn set_slot_class(
        &mut self,
        id: &str,
        slot: &str,
        class: Option<ArmorClass>,
    ) -> Result<bool, SchemaError> {
        let def = require_classed_slot(slot)?;
        let Some(loadout) = self.get(id) else {
            return Ok(false);
        };

        let mut classes = loadout.slot_classes.clone();
        match class {
            Some(class) => classes.insert(def.id.to_string(), class),
            None => classes.remove(def.id),
        };
        Ok(self.update(id, LoadoutPatch::new().slot_classes(classes)))
    }

    /// Re-detects slot classes from equipped armor for every loadout.
    ///
    /// Only loadouts whose classes change are updated. Returns how many were.
    pub fn reconcile_slot_classes<C: ItemCatalog + ?Sized>(&mut self, catalog: &C) -> usize {
        let changes: Vec<_> = self
            .loadouts
            .iter()
            .filter_map(|loadout| {
                let mut classes = loadout.slot_classes.clone();
                let mut changed = false;
                for slot in CLASSED_ARMOR_SLOTS {
                    let detected = loadout
                        .equipped(slot)
                        .and_then(|item| catalog.armor_class_of(item));
                    if let Some(class) = detected
                        && classes.get(slot) != Some(&class)
                    {
                        classes.insert(slot.to_string(), class);
                        changed = true;
                    }
                }
                changed.then(|| (loadout.id.clone(), classes))
            })
            .collect();

        let now = Utc::now();
        for (id, classes) in &changes {
            if let Some(loadout) = self.loadouts.iter_mut().find(|l| &l.id == id) {
                LoadoutPatch::new()
                    .slot_classes(classes.clone())
                    .apply(loadout, now);
            }
        }
        if !changes.is_empty() {
            tracing::info!(updated = changes.len(), "reconciled armor classes");
            self.persist();
        }
        changes.len()
    }

    /// Removes a loadout. Returns false if `id` is unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.loadouts.len();
        self.loadouts.retain(|l| l.id.as_str() != id);
        if self.loadouts.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Deep-copies a loadout to the front under a new id.
    pub fn duplicate(&mut self, id: &str) -> Option<LoadoutId> {
        let copy = self.get(id)?.duplicate(new_loadout_id(), Utc::now());
        let new_id = copy.id.clone();
        self.add(copy);
        Some(new_id)
    }

    /// Deletes every loadout and removes the persisted payload.
    pub fn reset_all(&mut self) {
        tracing::info!(count = self.loadouts.len(), "resetting all loadouts");
        self.loadouts.clear();
        let result = self.repo.clear();
        self.record_write(result);
    }

    /// Replaces the whole collection, as when restoring a backup.
    pub fn replace_all(&mut self, loadouts: Vec<Loadout>) {
        self.loadouts = loadouts;
        self.persist();
    }

    // ========================================================================
    // Import / export
    // ========================================================================

    /// Adds the loadout contained in a single or bulk export file.
    pub fn import_single(&mut self, json: &str) -> Result<LoadoutId, ImportError> {
        let loadout = transfer::import_single(json, new_loadout_id(), Utc::now())?;
        let id = loadout.id.clone();
        self.add(loadout);
        Ok(id)
    }

    /// Replaces the collection with a backup file's contents.
    ///
    /// Returns the reasons for any records that were skipped.
    pub fn restore(&mut self, json: &str) -> Result<Vec<String>, ImportError> {
        let BulkImport { loadouts, skipped } = transfer::import_all(json)?;
        for reason in &skipped {
            tracing::warn!(%reason, "skipped record in backup");
        }
        tracing::info!(count = loadouts.len(), "restoring backup");
        self.replace_all(loadouts);
        Ok(skipped)
    }

    pub fn export_all(&self, now: DateTime<Utc>) -> serde_json::Result<String> {
        transfer::export_all(&self.loadouts, now)
    }

    /// `None` if `id` is unknown.
    pub fn export_single(&self, id: &str, now: DateTime<Utc>) -> Option<serde_json::Result<String>> {
        self.get(id).map(|loadout| transfer::export_single(loadout, now))
    }

    fn persist(&mut self) {
        let result = self.repo.save(&self.loadouts);
        self.record_write(result);
    }

    fn record_write(&mut self, result: Result<(), RepositoryError>) {
        match result {
            Ok(()) => {
                if !self.persisting {
                    tracing::info!("loadout persistence restored");
                }
                self.persisting = true;
            }
            Err(e) => {
                log_repository_error(
                    &e,
                    "failed to persist loadouts; changes kept in memory only",
                );
                self.persisting = false;
            }
        }
    }
}

fn log_repository_error(e: &RepositoryError, message: &str) {
    let severity = e.severity();
    if severity.is_recoverable() {
        tracing::warn!(
            error = %e,
            code = e.error_code(),
            severity = severity.as_str(),
            "{message}"
        );
    } else {
        tracing::error!(
            error = %e,
            code = e.error_code(),
            severity = severity.as_str(),
            "{message}"
        );
    }
}
