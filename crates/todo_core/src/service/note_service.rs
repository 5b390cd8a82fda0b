//! Note use-case service.
//!
//! # Responsibility
//! - Own one user's `NoteStore` and execute commands against it.
//! - Enforce title uniqueness and existence before every mutation.
//! - Keep every note filed under at least one category after writes.
//!
//! # Invariants
//! - A duplicate title never reaches `NoteStore::add`.
//! - Log events carry metadata only, never note titles.

use crate::command::parser::{parse_command, Command, ParseError, HELP_TEXT};
use crate::model::note::Note;
use crate::model::user::UserProfile;
use crate::repo::note_store::{CategoryIndex, NoteStore};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NoteServiceResult<T> = Result<T, NoteServiceError>;

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// A note with this title already exists.
    DuplicateTitle(String),
    /// No note with this title exists.
    NotFound(String),
    /// Input lacked a required argument.
    MissingArgument(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTitle(title) => write!(f, "note already exists: `{title}`"),
            Self::NotFound(title) => write!(f, "no note found under the title `{title}`"),
            Self::MissingArgument(what) => write!(f, "missing argument: {what}"),
        }
    }
}

impl Error for NoteServiceError {}

impl From<ParseError> for NoteServiceError {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::MissingArgument(what) => Self::MissingArgument(what),
        }
    }
}

/// Result of a view request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Every category with its notes, in first-seen category order.
    Index(Vec<(String, Vec<Note>)>),
    /// Notes carrying all requested categories.
    Matches {
        categories: Vec<String>,
        notes: Vec<Note>,
    },
}

/// Outcome of one executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(Note),
    Viewed(View),
    Removed(Note),
    Renamed { previous_title: String, note: Note },
    Recategorized(Note),
    Help(&'static str),
    Quit,
    Unrecognized(String),
}

/// Note service facade over one user's store.
#[derive(Debug, Default)]
pub struct NoteService {
    store: NoteStore,
}

impl NoteService {
    /// Creates a service around an existing store.
    ///
    /// Category-less notes already in `store` stay as they are; only notes
    /// written through the service are filed under `UNCATEGORISED`.
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    /// Creates a service with an empty store for `owner`.
    pub fn for_user(owner: UserProfile) -> Self {
        Self::new(NoteStore::new(owner))
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn into_store(self) -> NoteStore {
        self.store
    }

    /// Adds a note after checking title uniqueness.
    ///
    /// A note added without categories is filed under `UNCATEGORISED`.
    pub fn add_note<I, S>(&mut self, title: &str, categories: I) -> NoteServiceResult<&Note>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if title.is_empty() {
            return Err(NoteServiceError::MissingArgument("title"));
        }
        if self.store.find_index(title).is_some() {
            warn!("event=note_add module=service status=rejected reason=duplicate_title");
            return Err(NoteServiceError::DuplicateTitle(title.to_string()));
        }

        let id = self.store.add(Note::new(title, categories));
        let index = self.store.len() - 1;
        self.store.normalize_categories_at(index);
        info!(
            "event=note_add module=service status=ok note_id={} total={}",
            id,
            self.store.len()
        );
        Ok(self.note_at(index))
    }

    /// Removes the note titled `title`.
    pub fn remove_note(&mut self, title: &str) -> NoteServiceResult<Note> {
        let index = self.require_index(title, "note_remove")?;
        let id = self.note_at(index).id;
        let removed = self
            .store
            .remove(id)
            .ok_or_else(|| NoteServiceError::NotFound(title.to_string()))?;
        info!(
            "event=note_remove module=service status=ok note_id={} total={}",
            removed.id,
            self.store.len()
        );
        Ok(removed)
    }

    /// Renames `title` to `new_title`.
    ///
    /// Renaming a note onto its own title succeeds without change.
    pub fn rename_note(&mut self, title: &str, new_title: &str) -> NoteServiceResult<&Note> {
        if new_title.is_empty() {
            return Err(NoteServiceError::MissingArgument("new title"));
        }
        let index = self.require_index(title, "note_rename")?;
        if let Some(existing) = self.store.find_index(new_title) {
            if existing != index {
                warn!("event=note_rename module=service status=rejected reason=duplicate_title");
                return Err(NoteServiceError::DuplicateTitle(new_title.to_string()));
            }
        }

        self.store.rename(index, new_title);
        info!(
            "event=note_rename module=service status=ok note_id={}",
            self.note_at(index).id
        );
        Ok(self.note_at(index))
    }

    /// Replaces the categories of `title`.
    ///
    /// An empty category list files the note under `UNCATEGORISED`.
    pub fn recategorize_note<I, S>(
        &mut self,
        title: &str,
        categories: I,
    ) -> NoteServiceResult<&Note>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = self.require_index(title, "note_recategorize")?;
        self.store.set_categories(index, categories);
        self.store.normalize_categories_at(index);
        let note = self.note_at(index);
        info!(
            "event=note_recategorize module=service status=ok note_id={} categories={}",
            note.id,
            note.categories.len()
        );
        Ok(note)
    }

    /// Notes carrying all `categories`, or the full index when empty.
    pub fn view<S: AsRef<str>>(&self, categories: &[S]) -> View {
        if categories.is_empty() {
            let index: CategoryIndex<'_> = self.store.all_categories();
            debug!(
                "event=note_view module=service mode=index categories={}",
                index.len()
            );
            return View::Index(index.to_owned_entries());
        }

        let notes: Vec<Note> = self
            .store
            .query_by_categories(categories)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            "event=note_view module=service mode=query filters={} matches={}",
            categories.len(),
            notes.len()
        );
        View::Matches {
            categories: categories
                .iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
            notes,
        }
    }

    /// Executes one structured command.
    pub fn execute(&mut self, command: Command) -> NoteServiceResult<CommandOutcome> {
        match command {
            Command::Add { title, categories } => self
                .add_note(&title, &categories)
                .map(|note| CommandOutcome::Added(note.clone())),
            Command::View { categories } => Ok(CommandOutcome::Viewed(self.view(&categories))),
            Command::Remove { title } => self.remove_note(&title).map(CommandOutcome::Removed),
            Command::Rename { title, new_title } => self
                .rename_note(&title, &new_title)
                .map(|note| CommandOutcome::Renamed {
                    previous_title: title.clone(),
                    note: note.clone(),
                }),
            Command::Recategorize { title, categories } => self
                .recategorize_note(&title, &categories)
                .map(|note| CommandOutcome::Recategorized(note.clone())),
            Command::Help => Ok(CommandOutcome::Help(HELP_TEXT)),
            Command::Quit => Ok(CommandOutcome::Quit),
            Command::Invalid(verb) => {
                debug!("event=command_invalid module=service status=ignored");
                Ok(CommandOutcome::Unrecognized(verb))
            }
        }
    }

    /// Parses and executes one raw input line.
    pub fn execute_line(&mut self, raw: &str) -> NoteServiceResult<CommandOutcome> {
        let command = parse_command(raw)?;
        self.execute(command)
    }

    fn require_index(&self, title: &str, event: &str) -> NoteServiceResult<usize> {
        match self.store.find_index(title) {
            Some(index) if !title.is_empty() => Ok(index),
            _ => {
                warn!("event={event} module=service status=rejected reason=not_found");
                Err(NoteServiceError::NotFound(title.to_string()))
            }
        }
    }

    fn note_at(&self, index: usize) -> &Note {
        &self.store.notes()[index]
    }
}
