//! Snapshot persistence boundary.
//!
//! # Responsibility
//! - Define the load/save contract the workspace service persists through.
//! - Provide the SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - Load never fails on missing or corrupt payloads: both come back as
//!   `None` so startup degrades to an empty workspace instead of crashing.
//! - Save replaces the whole snapshot for the namespace; persistence runs
//!   after the in-memory mutation commits, never before.

mod sqlite;

pub use sqlite::SqliteSnapshotStore;

use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;
use crate::model::snapshot::Snapshot;

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence-layer error surface.
#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "snapshot serialization failed: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for workspace snapshots, keyed by a namespace chosen
/// by the embedding application.
pub trait SnapshotStore {
    /// Reads the last saved snapshot. `None` when nothing was saved yet or
    /// the stored payload cannot be decoded.
    fn load(&self) -> PersistResult<Option<Snapshot>>;
    /// Replaces the stored snapshot.
    fn save(&self, snapshot: &Snapshot) -> PersistResult<()>;
}

/// In-process snapshot store for tests and ephemeral workspaces.
#[derive(Default)]
pub struct MemorySnapshotStore {
    slot: RefCell<Option<Snapshot>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> PersistResult<Option<Snapshot>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, snapshot: &Snapshot) -> PersistResult<()> {
        *self.slot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }
}
