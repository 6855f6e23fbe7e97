//! Immutable point-in-time view of the whole workspace.

use serde::{Deserialize, Serialize};

use crate::model::edge::Edge;
use crate::model::note::Note;

/// Full state of note store + graph store at one point in time.
///
/// This is the unit delivered to subscribers after every committed mutation
/// and the unit written to the persistence boundary. Notes keep creation
/// order; edges keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub notes: Vec<Note>,
    pub edges: Vec<Edge>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.edges.is_empty()
    }
}
