//! In-memory authoritative stores.
//!
//! # Responsibility
//! - Own the canonical note and edge collections.
//! - Enforce validation and referential integrity at the mutation boundary.
//!
//! # Invariants
//! - Store operations either fully commit or fail with no observable change.
//! - The graph store holds note ids only, never note copies; existence is
//!   checked against the note store at call time.

pub mod graph_store;
pub mod note_store;

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::edge::EdgeId;
use crate::model::note::NoteId;
use crate::model::ValidationError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surface shared by note and graph store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(ValidationError),
    NoteNotFound(NoteId),
    EdgeNotFound(EdgeId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::EdgeNotFound(id) => write!(f, "edge not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NoteNotFound(_) | Self::EdgeNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
