//! Note domain model.
//!
//! # Responsibility
//! - Define the titled record that carries category tags.
//! - Keep category tags in canonical upper-case form.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Every stored category is upper-cased at write time.
//! - Categories are neither trimmed nor deduplicated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one note, independent of its (mutable) title.
pub type NoteId = Uuid;

/// Sentinel category assigned to notes without any category.
pub const UNCATEGORISED: &str = "UNCATEGORISED";

/// Returns the canonical (upper-case) form of a category name.
pub fn normalize_category(name: &str) -> String {
    name.to_uppercase()
}

/// Titled record with an ordered list of category tags.
///
/// Title uniqueness is owned by the store's callers, not by the note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identity used for removal; two notes may share a title but never an id.
    pub id: NoteId,
    pub title: String,
    /// Canonical upper-case tags in caller order.
    pub categories: Vec<String>,
}

impl Note {
    /// Creates a note with a generated id, upper-casing every category.
    pub fn new<I, S>(title: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_id(Uuid::new_v4(), title, categories)
    }

    /// Creates a note with a caller-provided id.
    pub fn with_id<I, S>(id: NoteId, title: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id,
            title: title.into(),
            categories: canonical_categories(categories),
        }
    }

    /// Replaces the title. Performs no uniqueness check.
    pub fn rename(&mut self, new_title: impl Into<String>) {
        self.title = new_title.into();
    }

    /// Wholesale-replaces the category list.
    pub fn set_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.categories = canonical_categories(categories);
    }

    /// Returns whether this note carries `name`, compared case-insensitively.
    pub fn has_category(&self, name: &str) -> bool {
        let wanted = normalize_category(name);
        self.categories.iter().any(|category| *category == wanted)
    }

    pub fn is_uncategorised(&self) -> bool {
        self.categories.is_empty()
    }
}

fn canonical_categories<I, S>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    categories
        .into_iter()
        .map(|category| normalize_category(category.as_ref()))
        .collect()
}
