//! Domain model for notes and their owner.
//!
//! # Responsibility
//! - Define the note record and the user profile a store belongs to.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Categories are stored in canonical upper-case form.

pub mod note;
pub mod user;
