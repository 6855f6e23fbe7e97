//! Workspace service: the engine's public mutation and subscription surface.
//!
//! # Responsibility
//! - Coordinate note store, graph store, change notifier and persistence.
//! - Guarantee the commit protocol: validate, mutate, publish one snapshot,
//!   then flush to the snapshot store.
//!
//! # Invariants
//! - A failed operation leaves no observable state change and publishes
//!   nothing.
//! - Deleting a note removes its edges and the note under one published
//!   snapshot; no intermediate state is ever delivered.
//! - Flush failures are logged and do not roll back the in-memory commit.

use log::{error, info, warn};

use crate::model::edge::{Edge, EdgeId};
use crate::model::note::{Note, NoteId, NotePatch};
use crate::model::snapshot::Snapshot;
use crate::notify::{ChangeNotifier, SubscriberId};
use crate::persist::{PersistResult, SnapshotStore};
use crate::query::{self, Neighborhood, QueryResult};
use crate::store::graph_store::GraphStore;
use crate::store::note_store::NoteStore;
use crate::store::{StoreError, StoreResult};

/// One notes-plus-graph workspace.
///
/// Single-threaded by design: every mutation takes `&mut self` and runs to
/// completion, so each public operation is its own critical section.
pub struct Workspace {
    notes: NoteStore,
    graph: GraphStore,
    notifier: ChangeNotifier,
    snapshot_store: Option<Box<dyn SnapshotStore>>,
}

impl Workspace {
    /// Creates an empty workspace with no persistence attached.
    pub fn new() -> Self {
        Self {
            notes: NoteStore::new(),
            graph: GraphStore::new(),
            notifier: ChangeNotifier::new(),
            snapshot_store: None,
        }
    }

    /// Opens a workspace backed by the given snapshot store.
    ///
    /// A missing or corrupt snapshot yields an empty workspace; only a hard
    /// storage failure is surfaced. Persisted edges whose endpoints are
    /// gone or that loop onto one note are dropped during rehydration.
    pub fn open(snapshot_store: Box<dyn SnapshotStore>) -> PersistResult<Self> {
        let snapshot = snapshot_store.load()?.unwrap_or_default();
        let notes = NoteStore::from_notes(snapshot.notes);

        let mut dropped = 0_usize;
        let edges: Vec<Edge> = snapshot
            .edges
            .into_iter()
            .filter(|edge| {
                let keep = edge.source != edge.target
                    && notes.contains(edge.source)
                    && notes.contains(edge.target);
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();
        if dropped > 0 {
            warn!(
                "event=workspace_open module=service status=ok dropped_edges={dropped}"
            );
        }

        info!(
            "event=workspace_open module=service status=ok note_count={} edge_count={}",
            notes.len(),
            edges.len()
        );

        Ok(Self {
            notes,
            graph: GraphStore::from_edges(edges),
            notifier: ChangeNotifier::new(),
            snapshot_store: Some(snapshot_store),
        })
    }

    // ---- note operations ------------------------------------------------

    /// Creates a note and commits.
    pub fn create_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: &[String],
    ) -> StoreResult<Note> {
        let note = self.notes.create(title, content, tags)?;
        self.commit();
        Ok(note)
    }

    /// Applies a partial update and commits.
    pub fn update_note(&mut self, id: NoteId, patch: NotePatch) -> StoreResult<Note> {
        let note = self.notes.update(id, patch)?;
        self.commit();
        Ok(note)
    }

    /// Flips the star flag; returns the new value.
    pub fn toggle_star(&mut self, id: NoteId) -> StoreResult<bool> {
        let starred = self.notes.toggle_star(id)?;
        self.commit();
        Ok(starred)
    }

    /// Sets the assistant-provenance flag.
    pub fn set_ai_generated(&mut self, id: NoteId, flag: bool) -> StoreResult<()> {
        self.notes.set_ai_generated(id, flag)?;
        self.commit();
        Ok(())
    }

    /// Deletes a note and every edge touching it; returns cascaded edge ids.
    ///
    /// Cascade and removal commit as one unit: subscribers see a single
    /// snapshot with both the note and its edges gone.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<Vec<EdgeId>> {
        if !self.notes.contains(id) {
            return Err(StoreError::NoteNotFound(id));
        }
        let cascaded = self.graph.cascade_delete_for_note(id);
        // Existence was checked above; removal cannot fail anymore.
        self.notes.remove(id)?;
        info!(
            "event=note_delete module=service status=ok note_id={id} cascaded_edges={}",
            cascaded.len()
        );
        self.commit();
        Ok(cascaded)
    }

    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    /// All notes in creation order.
    pub fn list_notes(&self) -> &[Note] {
        self.notes.list()
    }

    // ---- edge operations ------------------------------------------------

    /// Connects two existing notes and commits.
    pub fn connect(
        &mut self,
        source: NoteId,
        target: NoteId,
        label: impl Into<String>,
    ) -> StoreResult<Edge> {
        let edge = self.graph.connect(&self.notes, source, target, label)?;
        self.commit();
        Ok(edge)
    }

    /// Replaces an edge label and commits.
    pub fn relabel(&mut self, edge_id: EdgeId, label: impl Into<String>) -> StoreResult<Edge> {
        let edge = self.graph.relabel(edge_id, label)?;
        self.commit();
        Ok(edge)
    }

    /// Removes one edge and commits.
    pub fn disconnect(&mut self, edge_id: EdgeId) -> StoreResult<Edge> {
        let edge = self.graph.disconnect(edge_id)?;
        self.commit();
        Ok(edge)
    }

    /// All edges touching the note, in either direction.
    pub fn edges_of(&self, note_id: NoteId) -> Vec<&Edge> {
        self.graph.edges_of(note_id)
    }

    /// Distinct neighbor ids of the note.
    pub fn neighbors(&self, note_id: NoteId) -> std::collections::BTreeSet<NoteId> {
        self.graph.neighbors(note_id)
    }

    /// All edges in insertion order.
    pub fn list_edges(&self) -> &[Edge] {
        self.graph.list()
    }

    // ---- queries --------------------------------------------------------

    /// Builds the current full snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            notes: self.notes.list().to_vec(),
            edges: self.graph.list().to_vec(),
        }
    }

    /// Case-insensitive substring search; empty term returns all notes.
    pub fn search(&self, term: &str) -> Vec<Note> {
        query::search(&self.snapshot(), term)
    }

    /// Notes carrying the given tag.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Note> {
        query::filter_by_tag(&self.snapshot(), tag)
    }

    /// Focused neighborhood view of one note.
    pub fn expand(&self, note_id: NoteId) -> QueryResult<Neighborhood> {
        query::expand(&self.snapshot(), note_id)
    }

    // ---- subscriptions --------------------------------------------------

    /// Registers a snapshot subscriber; runs after every committed mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> SubscriberId {
        self.notifier.subscribe(callback)
    }

    /// Removes a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // ---- commit protocol ------------------------------------------------

    /// Publishes the post-mutation snapshot, then flushes it.
    ///
    /// Flush runs strictly after the in-memory commit so a failed write can
    /// never leave memory and storage diverging beyond the last flushed
    /// snapshot. Flush failures are logged, not propagated.
    fn commit(&mut self) {
        let snapshot = self.snapshot();
        self.notifier.publish(&snapshot);
        if let Some(store) = self.snapshot_store.as_ref() {
            if let Err(err) = store.save(&snapshot) {
                error!(
                    "event=snapshot_flush module=service status=error error={err}"
                );
            }
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
