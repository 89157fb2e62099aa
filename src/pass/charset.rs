//! Character classes and the alphabets built from them.

use std::collections::BTreeSet;
use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A named group of characters with a fixed alphabet.
///
/// Declaration order is the canonical order: alphabets are concatenated and
/// guaranteed characters are drawn in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Digit => "Digits (0-9)",
            CharacterClass::Symbol => "Symbols (!@#...)",
        }
    }

    /// Whether `c` belongs to this class's alphabet.
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// Set of enabled character classes, iterated in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet(BTreeSet<CharacterClass>);

impl ClassSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, class: CharacterClass) -> bool {
        self.0.insert(class)
    }

    pub fn remove(&mut self, class: CharacterClass) -> bool {
        self.0.remove(&class)
    }

    /// Flip `class` on or off. Returns whether it is now enabled.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        if self.0.remove(&class) {
            false
        } else {
            self.0.insert(class);
            true
        }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0.contains(&class)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        ClassSet(iter.into_iter().collect())
    }
}

/// Build the combined character pool for the enabled classes.
pub fn combined_alphabet(classes: &ClassSet) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(alphabet_size(classes));

    for class in classes.iter() {
        chars.extend(class.alphabet().chars());
    }

    chars
}

/// Size of the combined pool (for entropy calculation).
pub fn alphabet_size(classes: &ClassSet) -> usize {
    classes.iter().map(|c| c.alphabet().chars().count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint() {
        for a in CharacterClass::ALL {
            for b in CharacterClass::ALL {
                if a == b {
                    continue;
                }
                assert!(!a.alphabet().chars().any(|c| b.contains(c)), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn combined_alphabet_follows_canonical_order() {
        let classes: ClassSet = [CharacterClass::Symbol, CharacterClass::Digit]
            .into_iter()
            .collect();
        let chars: String = combined_alphabet(&classes).into_iter().collect();
        assert_eq!(chars, format!("{DIGITS}{SYMBOLS}"));
    }

    #[test]
    fn alphabet_size_matches_pool() {
        let all = ClassSet::all();
        assert_eq!(alphabet_size(&all), 26 + 26 + 10 + 26);
        assert_eq!(alphabet_size(&all), combined_alphabet(&all).len());
        assert_eq!(alphabet_size(&ClassSet::empty()), 0);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = ClassSet::empty();
        assert!(set.toggle(CharacterClass::Digit));
        assert!(set.contains(CharacterClass::Digit));
        assert!(!set.toggle(CharacterClass::Digit));
        assert!(set.is_empty());
    }
}
