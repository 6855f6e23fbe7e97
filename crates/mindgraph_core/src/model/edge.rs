//! Edge domain model.
//!
//! # Invariants
//! - `source` and `target` reference notes that existed at creation time;
//!   the graph store keeps that true afterwards via cascade delete.
//! - Self-loops are never constructed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::note::NoteId;

/// Stable identifier for an edge.
pub type EdgeId = Uuid;

/// A labeled, directed relation between two notes.
///
/// Multiple edges over the same ordered pair are allowed; each carries its
/// own id and label, so two relations that happen to coincide stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NoteId,
    pub target: NoteId,
    /// Free-text relation name ("describes", "requires", ...). Mutable.
    pub label: String,
}

impl Edge {
    /// Creates an edge with a generated stable ID.
    ///
    /// Endpoint existence and the self-loop rule are enforced by the graph
    /// store, which sees both stores; this constructor only shapes data.
    pub(crate) fn new(source: NoteId, target: NoteId, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            target,
            label: label.into(),
        }
    }

    /// Returns whether this edge touches the given note in either direction.
    pub fn touches(&self, note_id: NoteId) -> bool {
        self.source == note_id || self.target == note_id
    }

    /// Returns the endpoint opposite to `note_id`, if the edge touches it.
    pub fn other_endpoint(&self, note_id: NoteId) -> Option<NoteId> {
        if self.source == note_id {
            Some(self.target)
        } else if self.target == note_id {
            Some(self.source)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Edge;
    use uuid::Uuid;

    #[test]
    fn touches_and_other_endpoint_cover_both_directions() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let edge = Edge::new(a, b, "requires");

        assert!(edge.touches(a));
        assert!(edge.touches(b));
        assert!(!edge.touches(c));
        assert_eq!(edge.other_endpoint(a), Some(b));
        assert_eq!(edge.other_endpoint(b), Some(a));
        assert_eq!(edge.other_endpoint(c), None);
    }
}
