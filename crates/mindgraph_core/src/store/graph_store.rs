//! Graph store: labeled directed edges over note ids.
//!
//! # Responsibility
//! - Validate and apply edge mutations.
//! - Keep the edge set free of dangling note references via cascade delete.
//!
//! # Invariants
//! - `connect` checks both endpoints against the note store at call time;
//!   edges hold ids only, never note copies.
//! - Duplicate (source, target, label) triples are allowed with distinct
//!   ids; the engine does not impose a deduplication policy.
//! - `cascade_delete_for_note` emits no notification of its own; the
//!   workspace service coalesces it with the note removal.

use std::collections::BTreeSet;

use log::debug;

use crate::model::edge::{Edge, EdgeId};
use crate::model::note::NoteId;
use crate::model::ValidationError;
use crate::store::note_store::NoteStore;
use crate::store::{StoreError, StoreResult};

/// In-memory edge collection in insertion order.
#[derive(Debug, Default)]
pub struct GraphStore {
    edges: Vec<Edge>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates a store from persisted edges, keeping their order.
    pub(crate) fn from_edges(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// Creates an edge between two existing notes.
    pub fn connect(
        &mut self,
        notes: &NoteStore,
        source: NoteId,
        target: NoteId,
        label: impl Into<String>,
    ) -> StoreResult<Edge> {
        if source == target {
            return Err(ValidationError::SelfLoop(source).into());
        }
        if !notes.contains(source) {
            return Err(StoreError::NoteNotFound(source));
        }
        if !notes.contains(target) {
            return Err(StoreError::NoteNotFound(target));
        }

        let edge = Edge::new(source, target, label);
        debug!(
            "event=edge_connect module=store status=ok edge_id={} source={source} target={target}",
            edge.id
        );
        self.edges.push(edge.clone());
        Ok(edge)
    }

    /// Replaces the label of an existing edge.
    pub fn relabel(&mut self, edge_id: EdgeId, label: impl Into<String>) -> StoreResult<Edge> {
        let edge = self
            .edges
            .iter_mut()
            .find(|edge| edge.id == edge_id)
            .ok_or(StoreError::EdgeNotFound(edge_id))?;
        edge.label = label.into();
        Ok(edge.clone())
    }

    /// Removes one edge and returns it.
    pub fn disconnect(&mut self, edge_id: EdgeId) -> StoreResult<Edge> {
        let position = self
            .edges
            .iter()
            .position(|edge| edge.id == edge_id)
            .ok_or(StoreError::EdgeNotFound(edge_id))?;
        let removed = self.edges.remove(position);
        debug!("event=edge_disconnect module=store status=ok edge_id={edge_id}");
        Ok(removed)
    }

    /// All edges touching the note, in either direction.
    pub fn edges_of(&self, note_id: NoteId) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|edge| edge.touches(note_id))
            .collect()
    }

    /// Distinct opposite endpoints of all edges touching the note.
    pub fn neighbors(&self, note_id: NoteId) -> BTreeSet<NoteId> {
        self.edges
            .iter()
            .filter_map(|edge| edge.other_endpoint(note_id))
            .collect()
    }

    /// Removes every edge touching the note; returns removed edge ids.
    ///
    /// Called only from the note-delete path. Intentionally silent: the
    /// caller publishes one snapshot covering note and edges together, so
    /// no intermediate state is ever observable.
    pub(crate) fn cascade_delete_for_note(&mut self, note_id: NoteId) -> Vec<EdgeId> {
        let mut removed = Vec::new();
        self.edges.retain(|edge| {
            if edge.touches(note_id) {
                removed.push(edge.id);
                false
            } else {
                true
            }
        });
        removed
    }

    /// All edges in insertion order.
    pub fn list(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
