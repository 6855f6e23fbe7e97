//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record used by every layer.
//! - Provide construction and patch application helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at` is set once at construction and never mutated.
//! - `title` is non-empty after trimming; enforced by `validate_title`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{normalize_tags, ValidationError};

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A titled, tagged piece of user content; the unit of knowledge in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for edges, subscriptions and persistence.
    pub id: NoteId,
    /// Display title. Non-empty after trimming.
    pub title: String,
    /// Body text. May embed `$...$` / `$$...$$` math markup, which the
    /// engine treats as opaque except for preview derivation.
    pub content: String,
    /// Lowercased, deduplicated, sorted.
    pub tags: Vec<String>,
    /// User bookmark flag.
    pub is_starred: bool,
    /// Marks notes produced by the assistant rather than typed by hand.
    pub ai_generated: bool,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
}

/// Partial update for a note.
///
/// `id` and `created_at` are deliberately absent: immutable fields cannot
/// be patched, which keeps callers simple instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_starred: Option<bool>,
    pub ai_generated: Option<bool>,
}

impl Note {
    /// Creates a new note with a generated stable ID and current timestamp.
    ///
    /// Title validation happens at the store boundary, not here, so that
    /// persistence can rehydrate historical records unchanged.
    pub fn new(title: impl Into<String>, content: impl Into<String>, tags: &[String]) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            tags: normalize_tags(tags),
            is_starred: false,
            ai_generated: false,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Applies a validated patch. Caller must have run `validate_title`
    /// on `patch.title` beforehand.
    pub(crate) fn apply(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = normalize_tags(&tags);
        }
        if let Some(is_starred) = patch.is_starred {
            self.is_starred = is_starred;
        }
        if let Some(ai_generated) = patch.ai_generated {
            self.ai_generated = ai_generated;
        }
    }

    /// Returns whether this note carries the given tag (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.trim().to_lowercase();
        self.tags.iter().any(|t| *t == needle)
    }
}

/// Rejects empty-after-trim titles.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}
