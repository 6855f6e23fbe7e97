//! Canonical domain model for the graph notes engine.
//!
//! # Responsibility
//! - Define the record shapes shared by stores, queries and persistence.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every note and edge is identified by a stable uuid, never reused.
//! - Deletion is hard delete; referential integrity is restored by edge
//!   cascade, so no tombstones are needed.

pub mod edge;
pub mod note;
pub mod snapshot;

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::note::NoteId;

/// Input-shape violations rejected at the store boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Note title is empty after trimming.
    EmptyTitle,
    /// Edge would connect a note to itself.
    SelfLoop(NoteId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
            Self::SelfLoop(id) => write!(f, "edge must not connect note {id} to itself"),
        }
    }
}

impl Error for ValidationError {}

/// Lowercases, deduplicates and sorts a tag list.
///
/// Blank entries are dropped rather than rejected; search treats tags
/// case-insensitively, so one canonical casing is stored.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: BTreeSet<String> = BTreeSet::new();
    for tag in tags {
        let trimmed = tag.trim();
        if !trimmed.is_empty() {
            normalized.insert(trimmed.to_lowercase());
        }
    }
    normalized.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_tags;

    #[test]
    fn normalize_tags_lowercases_dedups_and_sorts() {
        let input = vec![
            "Physics".to_string(),
            "MATH".to_string(),
            "physics".to_string(),
            "  ".to_string(),
        ];
        assert_eq!(
            normalize_tags(&input),
            vec!["math".to_string(), "physics".to_string()]
        );
    }
}
