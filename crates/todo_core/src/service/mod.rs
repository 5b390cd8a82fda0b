//! Core use-case services.
//!
//! # Responsibility
//! - Execute user commands against a note store.
//! - Keep CLI code decoupled from store details.

pub mod note_service;
