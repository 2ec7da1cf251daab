//! Runs the full migration history against an in-memory SQLite database.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::SchemaManager;

const TABLES: [&str; 13] = [
    "companies",
    "brands",
    "branches",
    "roles",
    "people",
    "users",
    "uploaded_files",
    "receipts",
    "receipt_attachments",
    "templates",
    "calendar_events",
    "events",
    "reports",
];

async fn connect() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(options).await.unwrap()
}

#[tokio::test]
async fn test_up_creates_every_table() {
    let db = connect().await;
    Migrator::up(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(manager.has_table(table).await.unwrap(), "missing table {}", table);
    }
    assert!(manager.has_column("events", "type").await.unwrap());
    assert!(manager.has_column("receipts", "level_object_id").await.unwrap());
}

#[tokio::test]
async fn test_down_removes_every_table() {
    let db = connect().await;
    Migrator::up(&db, None).await.unwrap();
    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(!manager.has_table(table).await.unwrap(), "table {} still present", table);
    }
}

#[tokio::test]
async fn test_up_is_idempotent() {
    let db = connect().await;
    Migrator::up(&db, None).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let pending = Migrator::get_pending_migrations(&db).await.unwrap();
    assert!(pending.is_empty());
}
