//! Built-in word bank and the fixed fallback word set.
//!
//! The bank serves two purposes:
//! - topping up a word source that supplied too few words
//! - supplying static hints for words that arrive without one
//!
//! ## Example
//!
//! ```
//! use crossword_duel::words::WordBank;
//!
//! let bank = WordBank::builtin();
//! assert_eq!(bank.hint_for("boot"), Some("Segeln"));
//! assert_eq!(bank.hint_for("ZEBRA"), None);
//! ```

use rustc_hash::FxHashMap;

use super::candidate::{normalize_word, Candidate};

/// Words and hints shipped with the game.
pub const BUILTIN_WORDS: [(&str, &str); 16] = [
    ("HAUS", "Wohnen"),
    ("KATZE", "Tier"),
    ("BLUME", "Pflanze"),
    ("WAGEN", "Fahrzeug"),
    ("STUHL", "Möbel"),
    ("TISCH", "Einrichtung"),
    ("MAUS", "Nager"),
    ("HUND", "Freund"),
    ("BUCH", "Lesen"),
    ("BALL", "Sport"),
    ("BAUM", "Wald"),
    ("BROT", "Essen"),
    ("UFER", "Wasser"),
    ("SEIL", "Klettern"),
    ("BOOT", "Segeln"),
    ("MOND", "Himmel"),
];

/// Fixed horizontal words, rows 1..=7.
pub const FIXED_HORIZONTAL: [(&str, &str); 7] = [
    ("TRAUM", "Schlaf"),
    ("ALTAR", "Kirche"),
    ("STERT", "Ende"),
    ("TENKE", "Denken"),
    ("ENDE", "Schluss"),
    ("WIND", "Luft"),
    ("SEE", "Wasser"),
];

/// Fixed vertical words, columns 1..=7. Letters that clash with the
/// horizontal words are rewritten when the grid is built.
pub const FIXED_VERTICAL: [(&str, &str); 7] = [
    ("TOREN", "Narren"),
    ("RASTE", "Pause"),
    ("ALTEN", "Senioren"),
    ("UTEND", "Wütend"),
    ("MARKE", "Marke"),
    ("ORTE", "Plätze"),
    ("KATZS", "Tier"),
];

/// Convert a static word table into candidates.
#[must_use]
pub fn candidates_from(table: &[(&str, &str)]) -> Vec<Candidate> {
    table
        .iter()
        .map(|(word, hint)| Candidate::new(*word).with_hint(*hint))
        .collect()
}

/// Word list with hint lookup.
///
/// Words keep insertion order; lookups are by normalized word.
#[derive(Clone, Debug, Default)]
pub struct WordBank {
    words: Vec<Candidate>,
    hints: FxHashMap<String, String>,
}

impl WordBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bank shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        let mut bank = Self::new();
        for (word, hint) in BUILTIN_WORDS {
            bank.insert(word, hint);
        }
        bank
    }

    /// Add a word and its hint. Unusable words are ignored; re-inserting a
    /// word replaces its hint.
    ///
    /// Returns whether the word was usable.
    pub fn insert(&mut self, word: &str, hint: &str) -> bool {
        let Some(word) = normalize_word(word) else {
            return false;
        };
        if self.hints.insert(word.clone(), hint.to_string()).is_none() {
            self.words.push(Candidate::new(word.clone()));
        }
        if let Some(entry) = self.words.iter_mut().find(|c| c.word == word) {
            entry.hint = Some(hint.to_string());
        }
        true
    }

    /// Static hint for a word, if the bank knows it.
    #[must_use]
    pub fn hint_for(&self, word: &str) -> Option<&str> {
        let word = normalize_word(word)?;
        self.hints.get(&word).map(String::as_str)
    }

    /// Check if the bank contains a word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.hint_for(word).is_some()
    }

    /// All words with their hints, in insertion order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
