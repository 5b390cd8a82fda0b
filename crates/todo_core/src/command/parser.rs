//! Command-line text to structured command.
//!
//! # Responsibility
//! - Turn one raw input line into a `Command` without touching any store.
//!
//! # Invariants
//! - Parsing is pure and never panics.
//! - Verbs are matched case-insensitively; titles keep their exact text.
//! - Category lists split on `;`, entries trimmed, empty entries dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("valid quoted segment regex"));

/// Help text describing the accepted command grammar.
pub const HELP_TEXT: &str = "\
To add a note use:
\ta(dd) \"Note\" Category1;Category2...

To view notes use:
\tv(iew) Category1;Category2...

To remove a note use:
\tr(emove) \"Note\"

To rename a note use:
\te(dit) \"Note\" \"New Note\"

To change a note's categories use:
\t(edit)c \"Note\" Category1;Category2...

Categories are optional when adding or re-categorising a note; a note without
any category is filed under UNCATEGORISED.
Viewing without categories lists every category with its notes. Viewing with
categories lists the notes carrying all of them.

To exit enter:
\tq(uit)

Everything in brackets is optional.
To display this help again use:\th(elp)";

/// One structured user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        categories: Vec<String>,
    },
    View {
        categories: Vec<String>,
    },
    Remove {
        title: String,
    },
    Rename {
        title: String,
        new_title: String,
    },
    Recategorize {
        title: String,
        categories: Vec<String>,
    },
    Help,
    Quit,
    /// Unrecognized verb, lower-cased.
    Invalid(String),
}

/// Parse failure for a recognized verb with malformed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Names the argument that could not be found.
    MissingArgument(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument(what) => write!(f, "missing argument: {what}"),
        }
    }
}

impl Error for ParseError {}

/// Parses one raw input line.
///
/// # Errors
/// - `MissingArgument("title")` when a title-taking verb has no quoted title.
/// - `MissingArgument("new title")` when `edit` lacks a second quoted title.
pub fn parse_command(raw: &str) -> Result<Command, ParseError> {
    let trimmed = raw.trim();
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };

    match verb.to_lowercase().as_str() {
        "a" | "add" => {
            let (title, tail) = leading_title(rest)?;
            Ok(Command::Add {
                title,
                categories: split_categories(tail),
            })
        }
        "v" | "view" => Ok(Command::View {
            categories: split_categories(rest),
        }),
        "r" | "remove" => {
            let (title, _) = leading_title(rest)?;
            Ok(Command::Remove { title })
        }
        "e" | "edit" => {
            let mut quoted = QUOTED_RE
                .captures_iter(rest)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()));
            let title = quoted.next().ok_or(ParseError::MissingArgument("title"))?;
            let new_title = quoted
                .next()
                .ok_or(ParseError::MissingArgument("new title"))?;
            Ok(Command::Rename { title, new_title })
        }
        "c" | "editc" => {
            let (title, tail) = leading_title(rest)?;
            Ok(Command::Recategorize {
                title,
                categories: split_categories(tail),
            })
        }
        "h" | "help" => Ok(Command::Help),
        "q" | "quit" => Ok(Command::Quit),
        other => Ok(Command::Invalid(other.to_string())),
    }
}

/// Splits a `;`-delimited category list.
pub fn split_categories(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(str::to_string)
        .collect()
}

// Returns the first quoted segment and the text after its closing quote.
fn leading_title(text: &str) -> Result<(String, &str), ParseError> {
    let caps = QUOTED_RE
        .captures(text)
        .ok_or(ParseError::MissingArgument("title"))?;
    let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
        return Err(ParseError::MissingArgument("title"));
    };
    Ok((inner.as_str().to_string(), &text[whole.end()..]))
}
