//! Session command handler
//!
//! Shows and edits the saved projection inputs.

use super::confirm;
use crate::args::SessionSubcommand;
use grade_projector::config::Config;
use grade_projector::core::session::Session;
use grade_projector::{error, info};
use std::path::Path;

/// Dispatch session subcommands
pub fn run(subcommand: Option<SessionSubcommand>, config: &Config) {
    let path = Session::path_for(config);
    match subcommand {
        None | Some(SessionSubcommand::Show) => handle_session_show(&path),
        Some(SessionSubcommand::AddTerm { average, credits }) => {
            edit_session(&path, |session| {
                session.add_term(&average, &credits);
                Ok(format!("✓ Added term {average} ({credits} credits)"))
            });
        }
        Some(SessionSubcommand::RemoveTerm { index }) => {
            edit_session(&path, |session| {
                let removed = session.remove_term(index)?;
                Ok(format!(
                    "✓ Removed term {index}: {} ({} credits)",
                    removed.average, removed.credits
                ))
            });
        }
        Some(SessionSubcommand::Set { key, value }) => {
            edit_session(&path, |session| {
                session.set(&key, &value)?;
                Ok(format!("✓ Set {key} = {value}"))
            });
        }
        Some(SessionSubcommand::Reset { yes }) => handle_session_reset(&path, yes),
    }
}

/// Load the session or exit with its error
pub fn load_or_exit(path: &Path) -> Session {
    match Session::load_from(path) {
        Ok(session) => session,
        Err(e) => {
            error!("{e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Save the session or exit with its error
pub fn save_or_exit(session: &Session, path: &Path) {
    if let Err(e) = session.save_to(path) {
        eprintln!("Failed to save session: {e}");
        std::process::exit(1);
    }
    info!("Session saved to {}", path.display());
}

/// Handle the session show subcommand
pub fn handle_session_show(path: &Path) {
    let session = load_or_exit(path);
    println!("\n=== Session ({}) ===\n", path.display());
    print!("{session}");
}

fn edit_session<F>(path: &Path, edit: F)
where
    F: FnOnce(&mut Session) -> Result<String, String>,
{
    let mut session = load_or_exit(path);
    match edit(&mut session) {
        Ok(message) => {
            save_or_exit(&session, path);
            println!("{message}");
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Handle the session reset subcommand
pub fn handle_session_reset(path: &Path, yes: bool) {
    if !path.exists() {
        println!("✓ Session is already empty");
        return;
    }

    if yes || confirm("Are you sure you want to clear all saved inputs?") {
        if let Err(e) = Session::reset(path) {
            eprintln!("Failed to remove session file: {e}");
            std::process::exit(1);
        }
        println!("✓ Session cleared");
    } else {
        println!("✗ Reset cancelled");
    }
}
