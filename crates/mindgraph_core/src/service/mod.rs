//! Service layer orchestrating stores, notification and persistence.
//!
//! # Responsibility
//! - Expose the public mutation surface as atomic commit units.
//!
//! # Invariants
//! - Exactly one snapshot is published per committed mutation, including
//!   the note-delete path where edge cascade and note removal coalesce.

pub mod workspace_service;
