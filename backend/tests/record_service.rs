use backend::config::Latency;
use backend::error::{Operation, StoreError};
use backend::services::records::RecordService;
use backend::storage::{KeyValueStorage, MemoryStorage};
use common::model::record::{Origin, RecordInput};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

const KEY: &str = "records_db_v2";

fn service() -> RecordService<MemoryStorage> {
    RecordService::new(MemoryStorage::new(), KEY, Latency::default())
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

#[tokio::test(start_paused = true)]
async fn sequential_creates_get_contiguous_ids_from_one() {
    let service = service();

    for (n, document) in ["10", "20", "30", "40"].iter().enumerate() {
        let record = service.create(input("Ana", document), Origin::Basic).await.unwrap();
        assert_eq!(record.id, n as u64 + 1);
    }

    let ids: Vec<u64> = service.list().await.unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test(start_paused = true)]
async fn duplicate_document_is_rejected_across_origins() {
    let service = service();
    service.create(input("Ana", "555"), Origin::Basic).await.unwrap();
    let before = service.list().await.unwrap();

    let err = service
        .create(input("Eva", "555"), Origin::Extended)
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::DuplicateDocument { ref document, .. } if document == "555"));
    assert!(err.to_string().contains("555"));
    assert_eq!(service.list().await.unwrap(), before);
}

#[tokio::test(start_paused = true)]
async fn update_rejects_a_document_owned_by_another_record() {
    let service = service();
    service.create(input("Ana", "1"), Origin::Basic).await.unwrap();
    let eva = service.create(input("Eva", "2"), Origin::Basic).await.unwrap();
    let before = service.list().await.unwrap();

    let err = service.update(eva.id, input("Eva", "1")).await.unwrap_err();

    assert!(matches!(
        err,
        StoreError::DuplicateDocument { operation: Operation::Update, .. }
    ));
    assert_eq!(service.list().await.unwrap(), before);
}

#[tokio::test(start_paused = true)]
async fn update_with_own_document_succeeds() {
    let service = service();
    let ana = service.create(input("Ana", "1"), Origin::Basic).await.unwrap();

    let updated = service.update(ana.id, input("Anabel", "1")).await.unwrap();

    assert_eq!(updated.first_name, "Anabel");
    assert_eq!(service.list().await.unwrap(), vec![updated]);
}

#[tokio::test(start_paused = true)]
async fn update_of_unknown_id_is_not_found() {
    let service = service();
    service.create(input("Ana", "1"), Origin::Basic).await.unwrap();

    let err = service.update(42, input("Ghost", "9")).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(42)));
}

#[tokio::test(start_paused = true)]
async fn update_of_unknown_id_with_taken_document_is_duplicate() {
    let service = service();
    service.create(input("Ana", "1"), Origin::Basic).await.unwrap();
    let before = service.list().await.unwrap();

    let err = service.update(42, input("Ghost", "1")).await.unwrap_err();

    assert!(matches!(err, StoreError::DuplicateDocument { ref document, .. } if document == "1"));
    assert_eq!(service.list().await.unwrap(), before);
}

#[tokio::test(start_paused = true)]
async fn update_merges_and_keeps_absent_optionals() {
    let service = service();
    let luis = service
        .create(
            RecordInput {
                email: Some(Some("l@m.com".to_string())),
                city: Some(Some("Lima".to_string())),
                ..input("Luis", "7")
            },
            Origin::Extended,
        )
        .await
        .unwrap();

    let updated = service.update(luis.id, input("Lucho", "7")).await.unwrap();

    assert_eq!(updated.first_name, "Lucho");
    assert_eq!(updated.email.as_deref(), Some("l@m.com"));
    assert_eq!(updated.city.as_deref(), Some("Lima"));
    assert_eq!(service.list().await.unwrap(), vec![updated]);
}

#[tokio::test(start_paused = true)]
async fn update_with_empty_optionals_clears_them() {
    let service = service();
    let luis = service
        .create(
            RecordInput {
                email: Some(Some("l@m.com".to_string())),
                city: Some(Some("Lima".to_string())),
                ..input("Luis", "7")
            },
            Origin::Extended,
        )
        .await
        .unwrap();

    let updated = service
        .update(
            luis.id,
            RecordInput {
                email: Some(None),
                city: Some(None),
                ..input("Luis", "7")
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, None);
    assert_eq!(updated.city, None);
}

#[tokio::test(start_paused = true)]
async fn update_preserves_id_and_origin() {
    let service = service();
    let created = service.create(input("Luis", "7"), Origin::Extended).await.unwrap();

    let updated = service
        .update(
            created.id,
            RecordInput {
                email: Some(Some("luis@example.com".to_string())),
                city: Some(Some("Quito".to_string())),
                ..input("Luis", "8")
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.origin, Origin::Extended);
    assert_eq!(updated.document_id, "8");
    assert_eq!(updated.city.as_deref(), Some("Quito"));
}

#[tokio::test(start_paused = true)]
async fn delete_of_unknown_id_is_a_no_op() {
    let service = service();
    service.create(input("Ana", "1"), Origin::Basic).await.unwrap();
    let before = service.list().await.unwrap();

    service.delete(99).await.unwrap();

    assert_eq!(service.list().await.unwrap(), before);
}

#[tokio::test(start_paused = true)]
async fn delete_persists_even_on_an_empty_store() {
    let service = service();
    assert_eq!(service.storage().get(KEY).unwrap(), None);

    service.delete(1).await.unwrap();

    assert_eq!(service.storage().get(KEY).unwrap().as_deref(), Some("[]"));
}

#[tokio::test(start_paused = true)]
async fn created_record_round_trips_through_list() {
    let service = service();
    let created = service
        .create(
            RecordInput {
                email: Some(Some("eva@example.com".to_string())),
                city: Some(Some("Cali".to_string())),
                ..input("Eva", "300")
            },
            Origin::Extended,
        )
        .await
        .unwrap();

    assert_eq!(service.list().await.unwrap(), vec![created]);
}

#[tokio::test(start_paused = true)]
async fn basic_and_extended_scenario() {
    let service = service();
    let basic = service.create(input("Ana", "1"), Origin::Basic).await.unwrap();
    let extended = service.create(input("Luis", "2"), Origin::Extended).await.unwrap();
    assert_eq!((basic.id, extended.id), (1, 2));
    assert_eq!(service.list().await.unwrap().len(), 2);

    service.delete(1).await.unwrap();

    assert_eq!(service.list().await.unwrap(), vec![extended]);
}

#[tokio::test(start_paused = true)]
async fn ids_follow_the_highest_remaining_record() {
    let service = service();
    for document in ["1", "2", "3"] {
        service.create(input("Ana", document), Origin::Basic).await.unwrap();
    }
    service.delete(2).await.unwrap();

    let next = service.create(input("Eva", "4"), Origin::Basic).await.unwrap();
    assert_eq!(next.id, 4);
}

#[tokio::test(start_paused = true)]
async fn operations_wait_for_the_configured_latency() {
    let service = service();

    let start = Instant::now();
    service.create(input("Ana", "1"), Origin::Basic).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(500));

    let start = Instant::now();
    service.list().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(300));
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn rejected_calls_still_wait() {
    let service = service();
    service.create(input("Ana", "1"), Origin::Basic).await.unwrap();

    let start = Instant::now();
    let _ = service.create(input("Ana", "1"), Origin::Basic).await;
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test]
async fn services_sharing_storage_see_each_others_writes() {
    let storage = Arc::new(MemoryStorage::new());
    let first = RecordService::new(storage.clone(), KEY, Latency::NONE);
    let second = RecordService::new(storage, KEY, Latency::NONE);

    first.create(input("Ana", "1"), Origin::Basic).await.unwrap();

    let err = second.create(input("Eva", "1"), Origin::Basic).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateDocument { .. }));
}

#[tokio::test]
async fn corrupt_payload_is_reported() {
    let storage = MemoryStorage::new();
    storage.set(KEY, "not json").unwrap();
    let service = RecordService::new(storage, KEY, Latency::NONE);

    assert!(matches!(service.list().await, Err(StoreError::Corrupt(_))));
    assert!(matches!(
        service.create(input("Ana", "1"), Origin::Basic).await,
        Err(StoreError::Corrupt(_))
    ));
}
