//! Core domain logic for the todo list.
//! This crate owns the note/category invariants and the command grammar.

pub mod command;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use command::parser::{parse_command, split_categories, Command, ParseError, HELP_TEXT};
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
};
pub use model::note::{normalize_category, Note, NoteId, UNCATEGORISED};
pub use model::user::UserProfile;
pub use repo::note_store::{CategoryIndex, NoteStore};
pub use service::note_service::{
    CommandOutcome, NoteService, NoteServiceError, NoteServiceResult, View,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
