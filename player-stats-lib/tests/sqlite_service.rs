use std::sync::Arc;

use player_stats_lib::catalog::PlayerInput;
use player_stats_lib::db::{ConnectionPool, PoolConfig, count_players};
use player_stats_lib::{PlayerService, ServiceError, SqliteGateway};

async fn service(dir: &tempfile::TempDir) -> PlayerService<SqliteGateway> {
    let pool = ConnectionPool::open(PoolConfig::new(dir.path().join("players.db")))
        .await
        .unwrap();
    PlayerService::new(SqliteGateway::new(Arc::new(pool)))
}

#[tokio::test]
async fn full_lifecycle_against_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(&dir).await;

    let silva = PlayerInput::new("A. Silva", "ST", 88, "X", "Brazil");
    let created = svc.create(&silva).await.unwrap();
    assert_eq!(svc.get(created.id).await.unwrap(), created);

    let rossi = PlayerInput::new("B. Rossi", "CB", 91, "Y", "Italy");
    let second = svc.create(&rossi).await.unwrap();
    let ids: Vec<i64> = svc.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, created.id]);

    let updated = svc
        .update(created.id, &PlayerInput::new("A. Silva", "CF", 92, "Z", "Brazil"))
        .await
        .unwrap();
    assert_eq!(svc.get(created.id).await.unwrap(), updated);

    svc.remove(created.id).await.unwrap();
    assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound)));
    assert!(matches!(svc.remove(created.id).await, Err(ServiceError::NotFound)));
}

#[tokio::test]
async fn rejected_input_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(&dir).await;
    let existing = svc
        .create(&PlayerInput::new("A. Silva", "ST", 88, "X", "Brazil"))
        .await
        .unwrap();

    let bad = PlayerInput::new("B. Rossi", "CB", 150, "Y", "Italy");
    assert!(matches!(svc.create(&bad).await, Err(ServiceError::Validation(_))));
    assert!(matches!(
        svc.update(existing.id, &bad).await,
        Err(ServiceError::Validation(_))
    ));

    let count = svc.gateway().pool().run(count_players).await.unwrap();
    assert_eq!(count, 1);
    assert_eq!(svc.get(existing.id).await.unwrap(), existing);
}

#[tokio::test]
async fn closed_pool_is_a_persistence_error() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(&dir).await;
    svc.gateway().pool().close();

    assert!(matches!(svc.list().await, Err(ServiceError::Persistence(_))));
}
