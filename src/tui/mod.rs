//! Interactive terminal mode.

mod render;
mod session;

use std::path::Path;

use crossterm::event::{Event, KeyEventKind, read};
use zeroize::Zeroize;

use passforge::pass::Generator;
use passforge::rand;
use passforge::settings::Settings;
use passforge::{Result, clipboard};

use crate::cli::prompts;
use crate::terminal::{RawModeGuard, clear, reset_terminal};
use session::{Effect, Session};

/// Run the interactive screen until the user quits.
pub fn run(path: &Path) -> Result<()> {
    let settings = Settings::load(path).unwrap_or_else(|e| {
        prompts::settings_load_failed(path, &e);
        Settings::default()
    });

    let mut session = Session::new(settings);
    let mut generator = Generator::new(rand::open(session.settings.source));
    session.regenerate(&mut generator);

    let mut guard = RawModeGuard::new()?;

    loop {
        render::draw(&session);

        let Event::Key(key) = read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(command) = session::command_for(key) else {
            continue;
        };

        match session.apply(command) {
            Effect::Regenerate => session.regenerate(&mut generator),
            Effect::Copy => copy(&mut session),
            Effect::Save => save(&mut session, path),
            Effect::Quit => break,
            Effect::Redraw => {}
        }
    }

    guard.release();
    clear();
    reset_terminal();
    Ok(())
}

fn copy(session: &mut Session) {
    let Some(password) = &session.password else {
        session.warn("No password to copy!");
        return;
    };

    let mut text = password.as_str().to_owned();
    let result = clipboard::copy(&text);
    text.zeroize();

    match result {
        Ok(()) => session.success("Password copied to clipboard!"),
        Err(e) => session.error(&format!("{e}. Select and copy it manually.")),
    }
}

fn save(session: &mut Session, path: &Path) {
    match session.settings.save(path) {
        Ok(()) => session.success(&format!("Settings saved to {}", path.display())),
        Err(e) => session.error(&e.to_string()),
    }
}
