//! Interactive session state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use passforge::pass::{CharacterClass, Generator, Password, StrengthScore, score};
use passforge::rand::RandomSource;
use passforge::settings::Settings;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Regenerate,
    Copy,
    Longer,
    Shorter,
    Toggle(CharacterClass),
    Save,
    Quit,
}

/// What the event loop must do after a command is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Regenerate,
    Copy,
    Save,
    Quit,
    Redraw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Regenerate),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Copy),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Regenerate),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::Longer),
        KeyCode::Left | KeyCode::Char('-') => Some(Command::Shorter),
        KeyCode::Char('1') => Some(Command::Toggle(CharacterClass::Uppercase)),
        KeyCode::Char('2') => Some(Command::Toggle(CharacterClass::Lowercase)),
        KeyCode::Char('3') => Some(Command::Toggle(CharacterClass::Digit)),
        KeyCode::Char('4') => Some(Command::Toggle(CharacterClass::Symbol)),
        KeyCode::Char('s') if !ctrl => Some(Command::Save),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

pub struct Session {
    pub settings: Settings,
    pub password: Option<Password>,
    pub score: Option<StrengthScore>,
    pub notice: Option<Notice>,
}

impl Session {
    pub fn new(mut settings: Settings) -> Self {
        settings.length = settings.length.clamp(MIN_LENGTH, MAX_LENGTH);
        Session {
            settings,
            password: None,
            score: None,
            notice: None,
        }
    }

    pub fn apply(&mut self, command: Command) -> Effect {
        self.notice = None;
        match command {
            Command::Regenerate => Effect::Regenerate,
            Command::Copy => Effect::Copy,
            Command::Save => Effect::Save,
            Command::Quit => Effect::Quit,
            Command::Longer if self.settings.length < MAX_LENGTH => {
                self.settings.length += 1;
                Effect::Regenerate
            }
            Command::Shorter if self.settings.length > MIN_LENGTH => {
                self.settings.length -= 1;
                Effect::Regenerate
            }
            Command::Longer | Command::Shorter => Effect::Redraw,
            Command::Toggle(class) => {
                self.toggle(class);
                Effect::Regenerate
            }
        }
    }

    /// Flip a class. Turning off the last one re-enables Lowercase.
    fn toggle(&mut self, class: CharacterClass) {
        let mut classes = self.settings.classes();
        classes.toggle(class);
        if classes.is_empty() {
            classes.insert(CharacterClass::Lowercase);
            self.warn("At least one character type must be selected!");
        }
        self.settings.set_classes(&classes);
    }

    pub fn regenerate<R: RandomSource>(&mut self, generator: &mut Generator<R>) {
        let (request, substituted) = self.settings.request();
        if substituted {
            self.settings.set_classes(&request.classes);
            self.warn("No character type was selected, using lowercase letters.");
        }
        match generator.generate(&request) {
            Ok(password) => {
                self.score = Some(score(password.as_str()));
                self.password = Some(password);
            }
            Err(e) => self.error(&e.to_string()),
        }
    }

    pub fn success(&mut self, text: &str) {
        self.notice(NoticeKind::Success, text);
    }

    pub fn warn(&mut self, text: &str) {
        self.notice(NoticeKind::Warning, text);
    }

    pub fn error(&mut self, text: &str) {
        self.notice(NoticeKind::Error, text);
    }

    fn notice(&mut self, kind: NoticeKind, text: &str) {
        self.notice = Some(Notice {
            kind,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passforge::rand::SeededSource;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(command_for(key(KeyCode::Enter)), Some(Command::Regenerate));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(Command::Regenerate)
        );
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Copy)
        );
        assert_eq!(
            command_for(key(KeyCode::Char('3'))),
            Some(Command::Toggle(CharacterClass::Digit))
        );
        assert_eq!(command_for(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn length_stays_within_slider_range() {
        let mut session = Session::new(Settings {
            length: MAX_LENGTH,
            ..Default::default()
        });
        assert_eq!(session.apply(Command::Longer), Effect::Redraw);
        assert_eq!(session.settings.length, MAX_LENGTH);

        let mut session = Session::new(Settings {
            length: MIN_LENGTH,
            ..Default::default()
        });
        assert_eq!(session.apply(Command::Shorter), Effect::Redraw);
        assert_eq!(session.apply(Command::Longer), Effect::Regenerate);
        assert_eq!(session.settings.length, MIN_LENGTH + 1);
    }

    #[test]
    fn loaded_length_is_clamped() {
        let session = Session::new(Settings {
            length: 74,
            ..Default::default()
        });
        assert_eq!(session.settings.length, MAX_LENGTH);
    }

    #[test]
    fn clearing_last_class_restores_lowercase() {
        let mut session = Session::new(Settings {
            uppercase: false,
            lowercase: false,
            digits: false,
            ..Default::default()
        });

        assert_eq!(
            session.apply(Command::Toggle(CharacterClass::Symbol)),
            Effect::Regenerate
        );
        assert!(session.settings.lowercase);
        assert!(!session.settings.symbols);
        assert_eq!(session.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Warning));
    }

    #[test]
    fn regenerate_updates_password_and_score() {
        let mut session = Session::new(Settings::default());
        let mut generator = Generator::new(SeededSource::new(11));
        session.regenerate(&mut generator);

        let password = session.password.as_ref().unwrap();
        assert_eq!(password.len(), 16);
        assert_eq!(session.score, Some(score(password.as_str())));
    }

    #[test]
    fn loaded_settings_without_classes_show_the_fallback() {
        let mut session = Session::new(Settings {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..Default::default()
        });
        let mut generator = Generator::new(SeededSource::new(4));
        session.regenerate(&mut generator);

        assert_eq!(session.settings.classes(), [CharacterClass::Lowercase].into_iter().collect());
        assert_eq!(session.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Warning));
        let password = session.password.as_ref().unwrap();
        assert!(password.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn commands_clear_previous_notice() {
        let mut session = Session::new(Settings::default());
        session.success("copied");
        session.apply(Command::Regenerate);
        assert!(session.notice.is_none());
    }
}
