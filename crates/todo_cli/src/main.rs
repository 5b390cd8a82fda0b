//! Interactive todo list session.
//!
//! # Responsibility
//! - Read one command per line, execute it, print the outcome.
//! - Own terminal I/O; core never prints.

mod render;

use log::info;
use std::io::{self, BufRead, Write};
use todo_core::{init_logging_with, CommandOutcome, LoggingConfig, NoteService, UserProfile};

/// Names the session's user profile.
const USER_ENV: &str = "TODO_LIST_USER";

fn main() {
    let config = LoggingConfig::from_env();
    if let Err(err) = init_logging_with(&config) {
        eprintln!("logging disabled: {err}");
    }

    let user = std::env::var(USER_ENV).unwrap_or_default();
    let mut service = NoteService::for_user(UserProfile::new(user));

    println!("{}", render::welcome());
    if let Err(err) = run(&mut service, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("session aborted: {err}");
    }
    info!(
        "event=session_end module=cli status=ok notes={}",
        service.store().len()
    );
}

fn run(
    service: &mut NoteService,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut buffer = Vec::new();
    loop {
        write!(output, ">>> ")?;
        output.flush()?;
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(());
        }

        // Undecodable bytes become U+FFFD so one bad line cannot end the session.
        let line = String::from_utf8_lossy(&buffer);
        match service.execute_line(&line) {
            Ok(CommandOutcome::Quit) => return Ok(()),
            Ok(outcome) => writeln!(output, "{}", render::outcome(&outcome))?,
            Err(err) => writeln!(output, "Error! {err}")?,
        }
    }
}
