//! In-memory note store for one user.
//!
//! # Responsibility
//! - Own every note of one user in insertion order.
//! - Answer title lookups and category-indexed queries.
//!
//! # Invariants
//! - At most one note per title. `add` does NOT check this: callers must
//!   consult `find_index` first and fail with a duplicate-title error on a
//!   match (`NoteService` does).
//! - After `normalize_categories`, every note has at least one category.
//! - Query results keep note insertion order.

use crate::model::note::{normalize_category, Note, NoteId, UNCATEGORISED};
use crate::model::user::UserProfile;

/// Ordered owner of one user's notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    owner: UserProfile,
    notes: Vec<Note>,
}

/// Category-to-notes mapping in first-seen category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex<'a> {
    entries: Vec<(String, Vec<&'a Note>)>,
}

impl<'a> CategoryIndex<'a> {
    /// Notes filed under `category`, matched case-insensitively.
    pub fn get(&self, category: &str) -> Option<&[&'a Note]> {
        let wanted = normalize_category(category);
        self.entries
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, notes)| notes.as_slice())
    }

    /// Category names in order of first appearance.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a Note])> {
        self.entries
            .iter()
            .map(|(name, notes)| (name.as_str(), notes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Detaches the index from the store by cloning every note.
    pub fn to_owned_entries(&self) -> Vec<(String, Vec<Note>)> {
        self.entries
            .iter()
            .map(|(name, notes)| {
                (
                    name.clone(),
                    notes.iter().map(|note| (*note).clone()).collect(),
                )
            })
            .collect()
    }
}

impl NoteStore {
    pub fn new(owner: UserProfile) -> Self {
        Self {
            owner,
            notes: Vec::new(),
        }
    }

    pub fn owner(&self) -> &UserProfile {
        &self.owner
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Position of the first note whose title equals `title` exactly.
    pub fn find_index(&self, title: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.title == title)
    }

    /// Appends `note` and returns its id.
    ///
    /// # Contract
    /// - Never rejects duplicates. Callers must check `find_index` first.
    pub fn add(&mut self, note: Note) -> NoteId {
        let id = note.id;
        self.notes.push(note);
        id
    }

    /// Removes the first note with identity `id`.
    ///
    /// Another note sharing the same title is left untouched.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|note| note.id == id)?;
        Some(self.notes.remove(index))
    }

    /// Renames the note at `index`. Performs no uniqueness check.
    pub fn rename(&mut self, index: usize, new_title: impl Into<String>) -> Option<&Note> {
        let note = self.notes.get_mut(index)?;
        note.rename(new_title);
        Some(&*note)
    }

    /// Replaces the categories of the note at `index`.
    pub fn set_categories<I, S>(&mut self, index: usize, categories: I) -> Option<&Note>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let note = self.notes.get_mut(index)?;
        note.set_categories(categories);
        Some(&*note)
    }

    /// Files every category-less note under `UNCATEGORISED`.
    ///
    /// Returns how many notes changed; a second run returns 0.
    pub fn normalize_categories(&mut self) -> usize {
        self.notes
            .iter_mut()
            .map(file_if_uncategorised)
            .filter(|changed| *changed)
            .count()
    }

    /// Files only the note at `index` under `UNCATEGORISED` when it has no
    /// category. Other notes are left as they are.
    pub fn normalize_categories_at(&mut self, index: usize) -> bool {
        self.notes
            .get_mut(index)
            .map(file_if_uncategorised)
            .unwrap_or(false)
    }

    /// Notes carrying every one of `category_names` (intersection).
    ///
    /// An empty `category_names` matches all notes.
    pub fn query_by_categories<S: AsRef<str>>(&self, category_names: &[S]) -> Vec<&Note> {
        let mut matches: Vec<&Note> = self.notes.iter().collect();
        for name in category_names {
            matches.retain(|note| note.has_category(name.as_ref()));
        }
        matches
    }

    /// Builds the full category index over all notes.
    ///
    /// A note with N categories appears in N buckets. Category-less notes
    /// appear nowhere unless `normalize_categories` ran first.
    pub fn all_categories(&self) -> CategoryIndex<'_> {
        let mut names: Vec<&str> = Vec::new();
        for category in self.notes.iter().flat_map(|note| note.categories.iter()) {
            if !names.contains(&category.as_str()) {
                names.push(category);
            }
        }

        let entries = names
            .into_iter()
            .map(|name| {
                let notes = self
                    .notes
                    .iter()
                    .filter(|note| note.categories.iter().any(|c| c == name))
                    .collect();
                (name.to_string(), notes)
            })
            .collect();

        CategoryIndex { entries }
    }
}

fn file_if_uncategorised(note: &mut Note) -> bool {
    if !note.is_uncategorised() {
        return false;
    }
    note.categories = vec![UNCATEGORISED.to_string()];
    true
}
