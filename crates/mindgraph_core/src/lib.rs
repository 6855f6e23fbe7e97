//! Core graph-notes engine.
//!
//! Notes plus labeled, directed connections between them, with search,
//! referential integrity on delete, snapshot pub/sub, snapshot persistence
//! and a study-assistant completion boundary. This crate is the single
//! source of truth for business invariants; it has no UI.

pub mod assistant;
pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod persist;
pub mod query;
pub mod service;
pub mod store;

pub use assistant::{
    complete_with_fallback, AssistantError, AssistantResult, CompletionBackend,
    CompletionRequest, CompletionResponse, HttpCompletionClient, FALLBACK_ANSWER,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::edge::{Edge, EdgeId};
pub use model::note::{Note, NoteId, NotePatch};
pub use model::snapshot::Snapshot;
pub use model::ValidationError;
pub use notify::{ChangeNotifier, SubscriberId};
pub use persist::{MemorySnapshotStore, PersistError, SnapshotStore, SqliteSnapshotStore};
pub use query::preview::{content_preview, PREVIEW_MAX_CHARS};
pub use query::{expand, filter_by_tag, search, Neighborhood, QueryError, QueryResult};
pub use service::workspace_service::Workspace;
pub use store::graph_store::GraphStore;
pub use store::note_store::NoteStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
