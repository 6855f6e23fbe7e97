//! SQLite-backed snapshot store.
//!
//! # Invariants
//! - One row per namespace in `workspace_snapshots`; saves upsert it.
//! - A payload that fails JSON decoding is logged and treated as absent,
//!   never surfaced as an error.

use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};

use crate::model::snapshot::Snapshot;
use crate::persist::{PersistError, PersistResult, SnapshotStore};

/// Snapshot store over a migrated SQLite connection.
///
/// The connection comes from [`crate::db::open_db`] or
/// [`crate::db::open_db_in_memory`], so the schema is already in place.
pub struct SqliteSnapshotStore {
    conn: Connection,
    namespace: String,
}

impl SqliteSnapshotStore {
    pub fn new(conn: Connection, namespace: impl Into<String>) -> Self {
        Self {
            conn,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn load(&self) -> PersistResult<Option<Snapshot>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM workspace_snapshots WHERE namespace = ?1;",
                [self.namespace.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        match serde_json::from_str::<Snapshot>(&payload) {
            Ok(snapshot) => {
                debug!(
                    "event=snapshot_load module=persist status=ok namespace={} note_count={} edge_count={}",
                    self.namespace,
                    snapshot.notes.len(),
                    snapshot.edges.len()
                );
                Ok(Some(snapshot))
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=persist status=error error_code=corrupt_payload namespace={} error={err}",
                    self.namespace
                );
                Ok(None)
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> PersistResult<()> {
        let payload = serde_json::to_string(snapshot).map_err(PersistError::Serialize)?;
        self.conn.execute(
            "INSERT INTO workspace_snapshots (namespace, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(namespace) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![self.namespace.as_str(), payload],
        )?;
        Ok(())
    }
}
