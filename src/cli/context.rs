//! CLI context - bundles settings, flags, and the settings path.

use std::io::{self, BufRead};
use std::path::PathBuf;

use zeroize::Zeroize;

use super::output::{ignore_broken_pipe, joined, write_passwords};
use super::{CliFlags, Command, prompts};
use crate::terminal::{box_bottom, box_line, box_top, entropy_strength};
use passforge::pass::{CharacterClass, Generator, charset, score};
use passforge::rand::{self, RandomSource, SeededSource};
use passforge::settings::Settings;
use passforge::{Result, clipboard};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    path: PathBuf,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let path = flags.config_path();
        let settings = Settings::load(&path).unwrap_or_else(|e| {
            prompts::settings_load_failed(&path, &e);
            Settings::default()
        });

        Self {
            settings,
            flags,
            path,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.apply_flags();
        self.settings.check_length()?;

        if matches!(self.flags.command, Some(Command::Stats)) {
            self.print_stats();
            return Ok(());
        }

        if self.flags.save {
            self.settings.save(&self.path)?;
            prompts::settings_saved(&self.path);
        }

        self.generate_output()
    }

    /// Explicit flags override the saved settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.count = num;
        }
        if let Some(source) = self.flags.source {
            self.settings.source = source;
        }
        if self.flags.has_class_flags() {
            self.settings.uppercase = !self.flags.no_upper;
            self.settings.lowercase = !self.flags.no_lower;
            self.settings.digits = !self.flags.no_digits;
            self.settings.symbols = !self.flags.no_symbols;
        }
    }

    fn open_source(&self) -> Box<dyn RandomSource> {
        match self.flags.seed {
            Some(seed) => {
                prompts::seeded_output();
                Box::new(SeededSource::new(seed))
            }
            None => rand::open(self.settings.source),
        }
    }

    /// Generate passwords and send them to the clipboard or stdout.
    pub fn generate_output(&mut self) -> Result<()> {
        let (request, substituted) = self.settings.request();
        if substituted {
            prompts::no_classes_fallback();
        }

        let count = self.settings.count.max(1);
        let mut generator = Generator::new(self.open_source());
        let passwords = generator.generate_batch(&request, count)?;

        if self.flags.clipboard {
            let mut text = joined(&passwords);
            let copied = clipboard::copy(&text);
            text.zeroize();
            match copied {
                Ok(()) => {
                    prompts::clipboard_copied(count);
                    return Ok(());
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    if !prompts::clipboard_fallback_prompt() {
                        return Ok(());
                    }
                }
            }
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        ignore_broken_pipe(write_passwords(&mut out, &passwords, self.flags.strength))?;
        Ok(())
    }

    fn print_stats(&self) {
        let (request, _) = self.settings.request();
        let bits = request.entropy_bits();

        box_top("Stats");
        box_line(&format!("Length:        {}", self.settings.length));
        box_line(&format!("Count:         {}", self.settings.count));
        for class in CharacterClass::ALL {
            let mark = if self.settings.classes().contains(class) { "x" } else { " " };
            box_line(&format!("[{mark}] {}", class.label()));
        }
        box_line(&format!(
            "Alphabet:      {} chars",
            charset::alphabet_size(&request.classes)
        ));
        box_line(&format!("Entropy:       {:.1} bits ({})", bits, entropy_strength(bits)));
        box_line(&format!("Source:        {}", rand::source_name(self.settings.source)));
        box_line(&format!("Settings file: {}", self.path.display()));
        box_bottom();
    }
}

/// Score a password from the argument or the first line of stdin.
/// Runs without touching the settings file.
pub fn check(password: Option<String>) -> Result<()> {
    let mut password = match password {
        Some(p) => p,
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
            line.zeroize();
            trimmed
        }
    };

    let s = score(&password);
    println!("Score: {} ({})", s, s.level());
    for hint in score::feedback(&password) {
        println!("  - {hint}");
    }

    password.zeroize();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use passforge::rand::SourceKind;

    fn context(args: &[&str], dir: &tempfile::TempDir) -> Context {
        use clap::Parser;
        let path = dir.path().join("settings.toml");
        let mut argv = vec!["passforge".to_string(), "--config".into(), path.display().to_string()];
        argv.extend(args.iter().map(|s| s.to_string()));
        Context::new(CliFlags::try_parse_from(argv).unwrap())
    }

    #[test]
    fn flags_override_saved_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(&["-l", "30", "-n", "4", "--no-digits", "--source", "hw"], &dir);
        ctx.apply_flags();
        assert_eq!(ctx.settings.length, 30);
        assert_eq!(ctx.settings.count, 4);
        assert_eq!(ctx.settings.source, SourceKind::Hw);
        assert!(!ctx.settings.digits);
        assert!(ctx.settings.uppercase && ctx.settings.lowercase && ctx.settings.symbols);
    }

    #[test]
    fn saved_classes_survive_without_class_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        Settings {
            symbols: false,
            ..Default::default()
        }
        .save(&path)
        .unwrap();

        let mut ctx = context(&["-l", "10"], &dir);
        ctx.apply_flags();
        assert!(!ctx.settings.symbols);
        assert_eq!(ctx.settings.length, 10);
    }

    #[test]
    fn save_flag_persists_options() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(&["-l", "22", "--no-symbols", "--save", "-q"], &dir);
        ctx.apply_flags();
        ctx.settings.save(&ctx.path).unwrap();
        let loaded = Settings::load(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(loaded.length, 22);
        assert!(!loaded.symbols);
    }

    #[test]
    fn too_short_request_is_reported_not_fixed() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(&["-l", "2", "--seed", "1", "-q"], &dir);
        ctx.apply_flags();
        let err = ctx.generate_output().unwrap_err();
        assert!(matches!(err, passforge::Error::InvalidRequest(_)));
        assert_eq!(ctx.settings.length, 2);
    }

    #[test]
    fn oversized_length_from_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.toml"), "length = 100000000000\n").unwrap();

        let mut ctx = context(&["--seed", "1", "-q"], &dir);
        let err = ctx.run().unwrap_err();
        assert!(matches!(err, passforge::Error::LengthLimit { length: 100000000000, .. }));
    }
}
