//! Heuristic strength scoring.
//!
//! The score is additive and capped at 100:
//!
//! | rule                                         | points |
//! |----------------------------------------------|--------|
//! | length >= 8 / >= 12 / >= 16 (cumulative)     | 25 / 15 / 10 |
//! | lowercase, uppercase, digit                  | 10 each |
//! | any character outside `[a-zA-Z0-9]`         | 15 |
//! | distinct / total characters > 0.7            | 10 |
//! | no repeating pattern                         | 5 |
//!
//! This is not an entropy measure. It only promises determinism and the
//! reward structure above.

use std::collections::HashSet;
use std::fmt;

const MAX_SCORE: u32 = 100;
const UNIQUE_RATIO: f64 = 0.7;
const TRIVIAL_SEQUENCES: [&str; 5] = ["123", "abc", "ABC", "qwe", "QWE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn level(self) -> Strength {
        match self.0 / 25 {
            0 => Strength::VeryWeak,
            1 => Strength::Weak,
            2 => Strength::Good,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Good,
    VeryStrong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Good => "Good",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a password from 0 to 100.
pub fn score(password: &str) -> StrengthScore {
    let length = password.chars().count();
    if length == 0 {
        return StrengthScore(0);
    }

    let mut total: u32 = 0;

    if length >= 8 {
        total += 25;
    }
    if length >= 12 {
        total += 15;
    }
    if length >= 16 {
        total += 10;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        total += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        total += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        total += 10;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        total += 15;
    }

    let unique: HashSet<char> = password.chars().collect();
    if unique.len() as f64 / length as f64 > UNIQUE_RATIO {
        total += 10;
    }

    if !has_repeating_pattern(password) {
        total += 5;
    }

    StrengthScore(total.min(MAX_SCORE) as u8)
}

/// A run of three identical characters, or one of the trivial sequences.
pub fn has_repeating_pattern(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        return true;
    }
    TRIVIAL_SEQUENCES.iter().any(|seq| password.contains(seq))
}

/// Suggestions for raising the score of `password`.
pub fn feedback(password: &str) -> Vec<&'static str> {
    let mut hints = Vec::new();
    let length = password.chars().count();

    if length < 8 {
        hints.push("Use at least 8 characters");
    } else if length < 12 {
        hints.push("Increase length to at least 12 characters");
    } else if length < 16 {
        hints.push("For maximum strength, use 16 or more characters");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        hints.push("Add lowercase letters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        hints.push("Add uppercase letters");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        hints.push("Add digits");
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        hints.push("Add symbols");
    }
    if length > 0 {
        let unique: HashSet<char> = password.chars().collect();
        if unique.len() as f64 / length as f64 <= UNIQUE_RATIO {
            hints.push("Use more distinct characters");
        }
    }
    if has_repeating_pattern(password) {
        hints.push("Avoid runs like 'aaa' and sequences like '123' or 'qwe'");
    }

    hints
}
