//! Note storage.
//!
//! # Responsibility
//! - Hold one user's notes in memory and answer title/category lookups.
//!
//! # Invariants
//! - Store operations never fail; absence is `None` or an empty result.
//! - Uniqueness checks belong to callers (see `service::note_service`).

pub mod note_store;
