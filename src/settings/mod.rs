//! User preferences for the shell.

mod file;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pass::{CharacterClass, ClassSet, GenerationRequest};
use crate::rand::SourceKind;

pub use file::default_path;

/// Longest password the shells will generate.
pub const MAX_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub count: usize,
    pub source: SourceKind,
}

impl Settings {
    pub fn classes(&self) -> ClassSet {
        let mut classes = ClassSet::empty();
        for (enabled, class) in [
            (self.uppercase, CharacterClass::Uppercase),
            (self.lowercase, CharacterClass::Lowercase),
            (self.digits, CharacterClass::Digit),
            (self.symbols, CharacterClass::Symbol),
        ] {
            if enabled {
                classes.insert(class);
            }
        }
        classes
    }

    pub fn set_classes(&mut self, classes: &ClassSet) {
        self.uppercase = classes.contains(CharacterClass::Uppercase);
        self.lowercase = classes.contains(CharacterClass::Lowercase);
        self.digits = classes.contains(CharacterClass::Digit);
        self.symbols = classes.contains(CharacterClass::Symbol);
    }

    /// Build a request from these settings. With every class disabled,
    /// Lowercase is substituted and the returned flag is set so the caller
    /// can tell the user.
    pub fn request(&self) -> (GenerationRequest, bool) {
        let mut classes = self.classes();
        let substituted = classes.is_empty();
        if substituted {
            log::warn!("no character class enabled, using lowercase");
            classes.insert(CharacterClass::Lowercase);
        }
        (GenerationRequest::new(self.length, classes), substituted)
    }

    /// Reject a length above [`MAX_LENGTH`], e.g. from a hand-edited file.
    pub fn check_length(&self) -> Result<()> {
        if self.length > MAX_LENGTH {
            return Err(Error::LengthLimit {
                length: self.length,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            count: 1,
            source: SourceKind::Os,
        }
    }
}
