//! Note store: authoritative, creation-ordered note collection.
//!
//! # Responsibility
//! - Validate and apply note mutations.
//! - Preserve creation order for stable listing.
//!
//! # Invariants
//! - No two notes ever share an id; uuid generation guarantees ids are not
//!   reused after deletion.
//! - Every mutation validates before touching the collection, so a failed
//!   call leaves the store byte-for-byte unchanged.

use log::debug;

use crate::model::note::{validate_title, Note, NoteId, NotePatch};
use crate::store::{StoreError, StoreResult};

/// In-memory note collection in creation order.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates a store from persisted notes, keeping their order.
    pub(crate) fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Creates a note after title validation and returns it.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: &[String],
    ) -> StoreResult<Note> {
        let title = title.into();
        validate_title(&title)?;

        let note = Note::new(title, content, tags);
        debug!(
            "event=note_create module=store status=ok note_id={} tag_count={}",
            note.id,
            note.tags.len()
        );
        self.notes.push(note.clone());
        Ok(note)
    }

    /// Applies a partial update and returns the new state of the note.
    ///
    /// A patch that would blank the title is rejected before any field is
    /// touched; `id`/`created_at` are not patchable by construction.
    pub fn update(&mut self, id: NoteId, patch: NotePatch) -> StoreResult<Note> {
        if let Some(title) = patch.title.as_deref() {
            validate_title(title)?;
        }
        let note = self.get_mut(id)?;
        note.apply(patch);
        debug!("event=note_update module=store status=ok note_id={id}");
        Ok(note.clone())
    }

    /// Flips the star flag and returns the new value.
    pub fn toggle_star(&mut self, id: NoteId) -> StoreResult<bool> {
        let note = self.get_mut(id)?;
        note.is_starred = !note.is_starred;
        Ok(note.is_starred)
    }

    /// Sets the assistant-provenance flag.
    pub fn set_ai_generated(&mut self, id: NoteId, flag: bool) -> StoreResult<()> {
        let note = self.get_mut(id)?;
        note.ai_generated = flag;
        Ok(())
    }

    /// Removes a note and returns it. Edge cascade is the caller's job;
    /// the workspace service coalesces both into one committed change.
    pub fn remove(&mut self, id: NoteId) -> StoreResult<Note> {
        let position = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(StoreError::NoteNotFound(id))?;
        let removed = self.notes.remove(position);
        debug!("event=note_remove module=store status=ok note_id={id}");
        Ok(removed)
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.get(id).is_some()
    }

    /// All notes in creation order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn get_mut(&mut self, id: NoteId) -> StoreResult<&mut Note> {
        self.notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NoteNotFound(id))
    }
}
