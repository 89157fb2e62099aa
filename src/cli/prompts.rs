//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use super::quiet;
use crate::terminal::{GREEN, RED, RESET, YELLOW};

/// Warning on stderr (yellow), suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error on stderr (red). Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn no_classes_fallback() {
    warn("No character class selected, using lowercase letters.");
}

pub fn settings_load_failed(path: &Path, err: &dyn std::fmt::Display) {
    warn(&format!("Failed to load settings from {}: {err}", path.display()));
    warn("Using defaults.");
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        eprintln!("{GREEN}Settings saved to {}{RESET}", path.display());
    }
}

pub fn seeded_output() {
    warn("Seeded output is reproducible. Do not use it for real passwords.");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            println!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            println!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        }
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Falls back silently in quiet or non-interactive mode.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}
