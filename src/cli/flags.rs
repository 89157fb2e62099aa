use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

use passforge::rand::SourceKind;
use passforge::settings;

/// Generate passwords that contain every enabled character class.
///
/// Run without arguments to open the interactive screen.
#[derive(Debug, Default, Parser)]
#[command(name = "passforge", version, about, long_about = None)]
pub struct CliFlags {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Characters per password
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=settings::MAX_LENGTH as u64)
    )]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print the strength score next to each password
    #[arg(short, long)]
    pub strength: bool,

    /// Seed for reproducible output (not for real passwords)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Random source
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Store these options as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Open the interactive screen
    #[arg(short, long)]
    pub interactive: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Settings file
    #[arg(long, global = true, env = "PASSFORGE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a password (argument or first line of stdin)
    Check { password: Option<String> },
    /// Show the active settings and their entropy
    Stats,
}

impl CliFlags {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(settings::default_path)
    }

    pub fn has_class_flags(&self) -> bool {
        self.no_upper || self.no_lower || self.no_digits || self.no_symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn short_and_long_flags() {
        let flags = parse(&["passforge", "-l", "20", "-n", "3", "--no-symbols", "-b", "-s"]);
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_symbols && flags.clipboard && flags.strength);
        assert!(flags.has_class_flags());
        assert!(flags.command.is_none());
    }

    #[test]
    fn source_and_seed() {
        let flags = parse(&["passforge", "--source", "hw", "--seed", "42"]);
        assert_eq!(flags.source, Some(SourceKind::Hw));
        assert_eq!(flags.seed, Some(42));
    }

    #[test]
    fn check_takes_optional_password() {
        let flags = parse(&["passforge", "check", "hunter2"]);
        assert!(matches!(flags.command, Some(Command::Check { password: Some(ref p) }) if p == "hunter2"));
        let flags = parse(&["passforge", "check"]);
        assert!(matches!(flags.command, Some(Command::Check { password: None })));
    }

    #[test]
    fn global_options_after_subcommand() {
        let flags = parse(&["passforge", "stats", "--config", "/tmp/x.toml", "-q"]);
        assert!(matches!(flags.command, Some(Command::Stats)));
        assert_eq!(flags.config_path(), PathBuf::from("/tmp/x.toml"));
        assert!(flags.quiet);
    }

    #[test]
    fn rejects_unknown_flags_and_bad_numbers() {
        assert!(CliFlags::try_parse_from(["passforge", "--bogus"]).is_err());
        assert!(CliFlags::try_parse_from(["passforge", "-l", "ten"]).is_err());
    }

    #[test]
    fn length_is_bounded() {
        assert_eq!(parse(&["passforge", "-l", "4096"]).length, Some(settings::MAX_LENGTH));
        assert!(CliFlags::try_parse_from(["passforge", "-l", "4097"]).is_err());
        assert!(CliFlags::try_parse_from(["passforge", "-l", "9223372036854775807"]).is_err());
        assert!(CliFlags::try_parse_from(["passforge", "-l", "0"]).is_err());
    }
}
