//! Plain-text rendering of command outcomes.

use todo_core::{CommandOutcome, Note, View, HELP_TEXT};

pub fn welcome() -> String {
    format!(
        "Welcome to the todo list (core {})!\n{HELP_TEXT}",
        todo_core::core_version()
    )
}

pub fn outcome(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Added(note) => format!("Added {}", note_line(note)),
        CommandOutcome::Viewed(view) => render_view(view),
        CommandOutcome::Removed(note) => format!("Removed \"{}\"", note.title),
        CommandOutcome::Renamed {
            previous_title,
            note,
        } => format!("Renamed \"{previous_title}\" to \"{}\"", note.title),
        CommandOutcome::Recategorized(note) => format!("Updated {}", note_line(note)),
        CommandOutcome::Help(text) => (*text).to_string(),
        CommandOutcome::Quit => String::new(),
        CommandOutcome::Unrecognized(_) => {
            "Invalid command! Use h(elp) to get help.".to_string()
        }
    }
}

fn render_view(view: &View) -> String {
    match view {
        View::Index(entries) if entries.is_empty() => "No notes yet.".to_string(),
        View::Index(entries) => entries
            .iter()
            .map(|(category, notes)| {
                let mut block = format!("{category}:");
                for note in notes {
                    block.push_str(&format!("\n\t{}", note.title));
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n"),
        View::Matches { categories, notes } if notes.is_empty() => {
            format!("No notes under {}.", categories.join(";"))
        }
        View::Matches { notes, .. } => notes
            .iter()
            .map(note_line)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn note_line(note: &Note) -> String {
    format!("\"{}\" [{}]", note.title, note.categories.join(";"))
}
