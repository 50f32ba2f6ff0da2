use std::fs;

use loadout_store::{FileLoadoutRepository, LoadoutRepository, LoadoutStore};
use planner_core::MissionType;

#[test]
fn collection_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");

    let id = {
        let repo = FileLoadoutRepository::new(dir.path()).expect("repo");
        let mut store = LoadoutStore::open(repo);
        store.create("Persisted", MissionType::Salvage)
    };

    let repo = FileLoadoutRepository::new(dir.path()).expect("repo");
    assert!(repo.path().exists());
    assert!(!repo.path().with_extension("json.tmp").exists());

    let store = LoadoutStore::open(repo);
    let loadout = store.get(id.as_str()).expect("reloaded");
    assert_eq!(loadout.name, "Persisted");
    assert_eq!(loadout.mission_type, MissionType::Salvage);
}

#[test]
fn missing_file_is_empty_and_corrupt_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = FileLoadoutRepository::new(dir.path().join("nested")).expect("repo");
    assert!(repo.load().expect("absent file").is_empty());

    fs::write(repo.path(), "][").expect("write");
    assert!(repo.load().is_err());

    let store = LoadoutStore::open(repo);
    assert!(store.is_empty());
}

#[test]
fn clear_removes_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = FileLoadoutRepository::new(dir.path()).expect("repo");
    repo.save(&[]).expect("save");
    assert!(repo.path().exists());

    repo.clear().expect("clear");
    assert!(!repo.path().exists());
    repo.clear().expect("clear is idempotent");
}

#[test]
fn reset_all_deletes_the_collection_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = FileLoadoutRepository::new(dir.path()).expect("repo");
    let path = repo.path();

    let mut store = LoadoutStore::open(repo);
    store.create("Doomed", MissionType::Combat);
    assert!(path.exists());

    store.reset_all();
    assert!(store.is_persisting());
    assert!(!path.exists());
    assert!(LoadoutStore::open(FileLoadoutRepository::new(dir.path()).expect("repo")).is_empty());
}
