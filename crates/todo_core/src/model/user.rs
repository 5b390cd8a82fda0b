//! User profile attached to a note store.
//!
//! Name and password are carried as plain data; nothing in core validates or
//! authenticates them.

use serde::{Deserialize, Serialize};

/// Identity of the single user owning one `NoteStore`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub password: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: String::new(),
        }
    }
}
