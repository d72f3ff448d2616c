//! Candidate words and normalization.
//!
//! Words are compared and stored uppercase. A usable word is non-empty and
//! made only of letters (umlauts and ß included); everything else is dropped
//! before it can reach the grid.

use serde::{Deserialize, Serialize};

/// A word offered for the grid, optionally with its own hint.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub hint: Option<String>,
}

impl Candidate {
    /// A candidate without a hint.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hint: None,
        }
    }

    /// Attach a hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Normalized copy, or `None` if the word is unusable.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        let word = normalize_word(&self.word)?;
        let hint = self
            .hint
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_string);
        Some(Self { word, hint })
    }
}

impl From<&str> for Candidate {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

/// Uppercase a single letter.
///
/// Letters whose uppercase form is more than one character (`ß`) are kept
/// as they are.
#[must_use]
pub fn normalize_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// Trim and uppercase a word. `None` if it is empty or has non-letters.
///
/// ```
/// use crossword_duel::words::normalize_word;
///
/// assert_eq!(normalize_word(" wind "), Some("WIND".to_string()));
/// assert_eq!(normalize_word("Möbel"), Some("MÖBEL".to_string()));
/// assert_eq!(normalize_word("R2D2"), None);
/// assert_eq!(normalize_word(""), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(trimmed.chars().map(normalize_letter).collect())
}

/// Normalize and deduplicate candidates, keeping the first occurrence.
pub fn usable_candidates<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> Vec<Candidate> {
    let mut seen = rustc_hash::FxHashSet::default();
    candidates
        .into_iter()
        .filter_map(Candidate::normalized)
        .filter(|c| seen.insert(c.word.clone()))
        .collect()
}
