//! Stateless query surface over workspace snapshots.
//!
//! # Responsibility
//! - Full-text/tag search and focused-neighborhood views.
//!
//! # Invariants
//! - Queries are pure: same snapshot, same answer. No caching; stores are
//!   expected to hold hundreds of notes, not millions.
//! - Result order is snapshot (creation) order.

pub mod preview;

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::edge::Edge;
use crate::model::note::{Note, NoteId};
use crate::model::snapshot::Snapshot;

pub type QueryResult<T> = Result<T, QueryError>;

/// Query-layer error surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    NoteNotFound(NoteId),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for QueryError {}

/// Focused view of one note: the note itself, its distinct neighbors and
/// every edge touching it, in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    pub note: Note,
    pub neighbors: Vec<Note>,
    pub edges: Vec<Edge>,
}

/// Case-insensitive substring search over title, content and tags.
///
/// An empty or whitespace-only term returns every note in snapshot order.
pub fn search(snapshot: &Snapshot, term: &str) -> Vec<Note> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return snapshot.notes.clone();
    }

    snapshot
        .notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
                || note.tags.iter().any(|tag| tag.contains(&needle))
        })
        .cloned()
        .collect()
}

/// Notes carrying the given tag, compared case-insensitively.
pub fn filter_by_tag(snapshot: &Snapshot, tag: &str) -> Vec<Note> {
    snapshot
        .notes
        .iter()
        .filter(|note| note.has_tag(tag))
        .cloned()
        .collect()
}

/// Builds the focused neighborhood view used to render one note in context.
pub fn expand(snapshot: &Snapshot, note_id: NoteId) -> QueryResult<Neighborhood> {
    let note = snapshot
        .notes
        .iter()
        .find(|note| note.id == note_id)
        .cloned()
        .ok_or(QueryError::NoteNotFound(note_id))?;

    let edges: Vec<Edge> = snapshot
        .edges
        .iter()
        .filter(|edge| edge.touches(note_id))
        .cloned()
        .collect();

    // Neighbor order follows snapshot note order; parallel edges must not
    // produce duplicate neighbor entries.
    let mut neighbor_ids: Vec<NoteId> = Vec::new();
    for edge in &edges {
        if let Some(other) = edge.other_endpoint(note_id) {
            if !neighbor_ids.contains(&other) {
                neighbor_ids.push(other);
            }
        }
    }
    let neighbors = snapshot
        .notes
        .iter()
        .filter(|note| neighbor_ids.contains(&note.id))
        .cloned()
        .collect();

    Ok(Neighborhood {
        note,
        neighbors,
        edges,
    })
}
