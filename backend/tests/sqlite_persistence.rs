use backend::config::{Latency, StoreConfig};
use backend::services::records::RecordService;
use backend::storage::{KeyValueStorage, SqliteStorage};
use common::model::record::{Origin, RecordInput};
use serde_json::Value;
use tempfile::TempDir;

fn config(dir: &TempDir) -> StoreConfig {
    StoreConfig {
        db_path: dir.path().join("registry.sqlite"),
        latency: Latency::NONE,
        ..StoreConfig::default()
    }
}

fn open(config: &StoreConfig) -> RecordService<SqliteStorage> {
    let storage = SqliteStorage::open(&config.db_path).unwrap();
    RecordService::from_config(storage, config)
}

fn input(first: &str, document: &str) -> RecordInput {
    RecordInput {
        first_name: first.to_string(),
        last_name: "Tester".to_string(),
        document_id: document.to_string(),
        email: None,
        city: None,
    }
}

#[tokio::test]
async fn records_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);

    let created = {
        let service = open(&config);
        service.create(input("Ana", "1"), Origin::Basic).await.unwrap();
        service
            .create(
                RecordInput {
                    email: Some(Some("eva@example.com".to_string())),
                    city: Some(Some("Cali".to_string())),
                    ..input("Eva", "2")
                },
                Origin::Extended,
            )
            .await
            .unwrap()
    };

    let reopened = open(&config);
    let records = reopened.list().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], created);

    let next = reopened.create(input("Luis", "3"), Origin::Basic).await.unwrap();
    assert_eq!(next.id, 3);
}

#[tokio::test]
async fn whole_list_is_stored_as_one_json_array_under_the_key() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let service = open(&config);

    service.create(input("Ana", "1"), Origin::Basic).await.unwrap();
    service
        .create(
            RecordInput {
                email: Some(Some("eva@example.com".to_string())),
                city: Some(Some("Cali".to_string())),
                ..input("Eva", "2")
            },
            Origin::Extended,
        )
        .await
        .unwrap();

    let raw = service.storage().get(&config.storage_key).unwrap().unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    let array = stored.as_array().unwrap();

    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["id"], 1);
    assert_eq!(array[0]["firstName"], "Ana");
    assert_eq!(array[0]["origin"], "Basic");
    assert!(array[0].get("email").is_none());
    assert_eq!(array[1]["documentId"], "2");
    assert_eq!(array[1]["city"], "Cali");
    assert_eq!(array[1]["origin"], "Extended");
}

#[tokio::test]
async fn hand_written_payload_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    let storage = SqliteStorage::open(&config.db_path).unwrap();
    storage
        .set(
            &config.storage_key,
            r#"[{"id":5,"firstName":"Ana","lastName":"Ruiz","documentId":"9","origin":"Basic"}]"#,
        )
        .unwrap();
    let service = RecordService::from_config(storage, &config);

    let records = service.list().await.unwrap();
    assert_eq!(records[0].id, 5);

    let next = service.create(input("Eva", "10"), Origin::Extended).await.unwrap();
    assert_eq!(next.id, 6);
}
