use mindgraph_core::db::migrations::{apply_migrations, latest_version};
use mindgraph_core::db::open_db_in_memory;
use rusqlite::Connection;

#[test]
fn open_db_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let table_count: u32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'workspace_snapshots';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(table_count, 1);
}

#[test]
fn apply_migrations_is_idempotent() {
    let mut conn = open_db_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();
}

#[test]
fn newer_schema_than_supported_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        latest_version() + 1
    ))
    .unwrap();

    assert!(apply_migrations(&mut conn).is_err());
}
