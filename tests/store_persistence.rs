//! Integration tests for ChoiceStore persistence through the file adapter.

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use toccaate::adapters::random::SeededPicker;
use toccaate::adapters::storage::FileSnapshotStorage;
use toccaate::application::ChoiceStore;
use toccaate::config::StorageFormat;
use toccaate::domain::choice::{Choice, ChoiceError};
use toccaate::domain::foundation::ChoiceId;
use toccaate::ports::StorageError;

async fn populated_store(storage: FileSnapshotStorage) -> ChoiceStore {
    let store = ChoiceStore::load(Arc::new(storage)).await.unwrap();
    let picker = SeededPicker::new(7);

    let cena = Choice::create(ChoiceId::new(), Some("Cena"), ["Pizza", "Sushi"]).unwrap();
    let film = Choice::create(ChoiceId::new(), Some("Film"), ["Alien", "Heat", "Up"]).unwrap();
    let open = Choice::create(ChoiceId::new(), None, ["A", "B"]).unwrap();
    let (cena_id, film_id) = (cena.id(), film.id());

    store.insert(cena).await.unwrap();
    store.insert(film).await.unwrap();
    store.insert(open).await.unwrap();

    store.modify(cena_id, |c| c.resolve_manual("Sushi")).await.unwrap();
    store.modify(cena_id, |c| c.resolve_manual("Pizza")).await.unwrap();
    store.modify(film_id, |c| c.resolve_random(&picker)).await.unwrap();

    store
}

fn write_single_record(path: &Path, record: serde_json::Value) {
    let mut document = serde_json::Map::new();
    document.insert(ChoiceId::new().to_string(), record);
    std::fs::write(path, serde_json::Value::Object(document).to_string()).unwrap();
}

#[tokio::test]
async fn json_snapshot_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("choices.json");

    let store = populated_store(FileSnapshotStorage::new(&path, StorageFormat::Json)).await;
    let reloaded = ChoiceStore::load(Arc::new(FileSnapshotStorage::new(&path, StorageFormat::Json)))
        .await
        .unwrap();

    assert_eq!(reloaded.snapshot().await, store.snapshot().await);
}

#[tokio::test]
async fn yaml_snapshot_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("choices.yaml");

    let store = populated_store(FileSnapshotStorage::new(&path, StorageFormat::Yaml)).await;
    let reloaded = ChoiceStore::load(Arc::new(FileSnapshotStorage::new(&path, StorageFormat::Yaml)))
        .await
        .unwrap();

    assert_eq!(reloaded.snapshot().await, store.snapshot().await);
}

#[tokio::test]
async fn corrupt_snapshot_refuses_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("choices.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let result = ChoiceStore::load(Arc::new(FileSnapshotStorage::new(&path, StorageFormat::Json))).await;

    assert!(matches!(result, Err(StorageError::Corrupt(_))));
}

#[tokio::test]
async fn record_with_foreign_pick_refuses_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("choices.json");
    write_single_record(
        &path,
        serde_json::json!({
            "title": "Cena",
            "options": ["Pizza", "Sushi"],
            "picked": "Tacos",
            "history": ["Tacos"]
        }),
    );

    let result = ChoiceStore::load(Arc::new(FileSnapshotStorage::new(&path, StorageFormat::Json))).await;

    assert!(matches!(result, Err(StorageError::Corrupt(_))));
}

#[tokio::test]
async fn record_with_padded_title_refuses_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("choices.json");
    write_single_record(
        &path,
        serde_json::json!({
            "title": " Cena ",
            "options": ["Pizza", "Sushi"],
            "picked": null,
            "history": []
        }),
    );

    let result = ChoiceStore::load(Arc::new(FileSnapshotStorage::new(&path, StorageFormat::Json))).await;

    assert!(matches!(result, Err(StorageError::Corrupt(_))));
}

#[tokio::test]
async fn failed_write_keeps_memory_and_file_in_step() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::create_dir(&blocker).unwrap();
    let path = blocker.join("choices.json");
    let store = ChoiceStore::load(Arc::new(FileSnapshotStorage::new(&path, StorageFormat::Json)))
        .await
        .unwrap();
    let choice = Choice::create(ChoiceId::new(), None, ["A", "B"]).unwrap();
    store.insert(choice.clone()).await.unwrap();

    // Replace the directory with a file so the next write cannot land
    std::fs::remove_dir_all(&blocker).unwrap();
    std::fs::write(&blocker, "").unwrap();

    let result = store.modify(choice.id(), |c| c.resolve_manual("B")).await;

    assert!(matches!(result, Err(ChoiceError::Storage(StorageError::Io(_)))));
    assert_eq!(store.get(choice.id()).await.unwrap(), choice);
}
