use mindgraph_core::db::{open_db, open_db_in_memory};
use mindgraph_core::{
    MemorySnapshotStore, SnapshotStore, SqliteSnapshotStore, Workspace,
};
use rusqlite::params;

#[test]
fn workspace_reopens_from_flushed_sqlite_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("workspace.db");

    let (note_id, edge_id) = {
        let store = SqliteSnapshotStore::new(open_db(&db_path).unwrap(), "study");
        let mut workspace = Workspace::open(Box::new(store)).unwrap();
        let a = workspace.create_note("A", "kept body", &["tag".to_string()]).unwrap();
        let b = workspace.create_note("B", "", &[]).unwrap();
        let edge = workspace.connect(a.id, b.id, "relates").unwrap();
        (a.id, edge.id)
    };

    let store = SqliteSnapshotStore::new(open_db(&db_path).unwrap(), "study");
    let reopened = Workspace::open(Box::new(store)).unwrap();

    assert_eq!(reopened.list_notes().len(), 2);
    let note = reopened.get_note(note_id).unwrap();
    assert_eq!(note.content, "kept body");
    assert_eq!(note.tags, vec!["tag".to_string()]);
    assert_eq!(reopened.list_edges()[0].id, edge_id);
}

#[test]
fn missing_snapshot_opens_an_empty_workspace() {
    let store = SqliteSnapshotStore::new(open_db_in_memory().unwrap(), "fresh");
    let workspace = Workspace::open(Box::new(store)).unwrap();
    assert!(workspace.list_notes().is_empty());
    assert!(workspace.list_edges().is_empty());
}

#[test]
fn corrupt_payload_is_treated_as_empty_not_an_error() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO workspace_snapshots (namespace, payload) VALUES (?1, ?2);",
        params!["study", "{not json"],
    )
    .unwrap();

    let store = SqliteSnapshotStore::new(conn, "study");
    assert!(store.load().unwrap().is_none());

    let workspace = Workspace::open(Box::new(store)).unwrap();
    assert!(workspace.list_notes().is_empty());
}

#[test]
fn namespaces_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("shared.db");

    {
        let store = SqliteSnapshotStore::new(open_db(&db_path).unwrap(), "alpha");
        let mut workspace = Workspace::open(Box::new(store)).unwrap();
        workspace.create_note("alpha note", "", &[]).unwrap();
    }

    let store = SqliteSnapshotStore::new(open_db(&db_path).unwrap(), "beta");
    let other = Workspace::open(Box::new(store)).unwrap();
    assert!(other.list_notes().is_empty());
}

#[test]
fn every_mutation_flushes_the_latest_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("flush.db");

    let store = SqliteSnapshotStore::new(open_db(&db_path).unwrap(), "study");
    let mut workspace = Workspace::open(Box::new(store)).unwrap();

    let a = workspace.create_note("A", "", &[]).unwrap();
    let b = workspace.create_note("B", "", &[]).unwrap();
    workspace.connect(a.id, b.id, "relates").unwrap();
    workspace.delete_note(b.id).unwrap();

    // Read back through an independent connection: the last committed
    // mutation must already be on disk.
    let reader = SqliteSnapshotStore::new(open_db(&db_path).unwrap(), "study");
    let flushed = reader.load().unwrap().unwrap();
    assert_eq!(flushed.notes.len(), 1);
    assert_eq!(flushed.notes[0].id, a.id);
    assert!(flushed.edges.is_empty());
}

#[test]
fn rehydration_drops_edges_with_missing_endpoints() {
    let mirror = MemorySnapshotStore::new();
    let snapshot = {
        let mut seed = Workspace::new();
        let a = seed.create_note("A", "", &[]).unwrap();
        let b = seed.create_note("B", "", &[]).unwrap();
        seed.connect(a.id, b.id, "keep").unwrap();
        let mut snapshot = seed.snapshot();
        // Simulate a hand-edited payload: drop note B but leave its edge.
        snapshot.notes.retain(|note| note.id == a.id);
        snapshot
    };
    mirror.save(&snapshot).unwrap();

    let workspace = Workspace::open(Box::new(mirror)).unwrap();
    assert_eq!(workspace.list_notes().len(), 1);
    assert!(workspace.list_edges().is_empty());
}
