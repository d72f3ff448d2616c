//! Grid construction.
//!
//! ## Placement rules
//!
//! - Horizontal word `i` goes in row `i + 1`, starting at column 1.
//! - Vertical word `i` goes in column `i + 1`, starting at row 1.
//! - Words longer than 7 letters are truncated.
//! - Where a vertical word crosses a horizontal one with a different letter,
//!   the horizontal letter stays and the vertical word is rewritten to match.
//!
//! The last rule means a built layout can never disagree with itself: every
//! entry spells exactly what its cells hold.
//!
//! ## Example
//!
//! ```
//! use crossword_duel::grid::{GridBuilder, Provenance};
//!
//! let layout = GridBuilder::new().build_fixed();
//! assert_eq!(layout.provenance(), &Provenance::Fixed);
//! assert_eq!(layout.horizontal_words()[5].text(), "WIND");
//! assert!(layout.is_consistent());
//! ```

use tracing::{debug, info, instrument, warn};

use super::entry::{HintCell, WordEntry};
use super::solution::SolutionGrid;
use crate::core::{Axis, BuildError, GameRng, MAX_WORD_LEN, SLOTS_PER_AXIS};
use crate::words::{
    candidates_from, usable_candidates, Candidate, WordBank, WordSource, FIXED_HORIZONTAL,
    FIXED_VERTICAL,
};

/// Words needed to fill every slot on both axes.
pub const WORDS_NEEDED: usize = 2 * SLOTS_PER_AXIS;

/// Where a layout's words came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// Randomly selected from supplied (and possibly bank) words.
    Dynamic,
    /// The fixed word set, by choice.
    Fixed,
    /// The fixed word set, because a dynamic build was not possible.
    Fallback(BuildError),
}

impl Provenance {
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        !matches!(self, Provenance::Dynamic)
    }
}

/// A built grid: answer key, words, and hints.
#[derive(Clone, Debug)]
pub struct GridLayout {
    solution: SolutionGrid,
    horizontal: Vec<WordEntry>,
    vertical: Vec<WordEntry>,
    hints: Vec<HintCell>,
    provenance: Provenance,
}

impl GridLayout {
    #[must_use]
    pub fn solution(&self) -> &SolutionGrid {
        &self.solution
    }

    /// Horizontal words, top to bottom. Fewer than 7 if slots were skipped.
    #[must_use]
    pub fn horizontal_words(&self) -> &[WordEntry] {
        &self.horizontal
    }

    /// Vertical words, left to right. Fewer than 7 if slots were skipped.
    #[must_use]
    pub fn vertical_words(&self) -> &[WordEntry] {
        &self.vertical
    }

    /// All words, horizontal first.
    pub fn words(&self) -> impl Iterator<Item = &WordEntry> {
        self.horizontal.iter().chain(self.vertical.iter())
    }

    /// Hint cells, ordered by coordinate.
    #[must_use]
    pub fn hints(&self) -> &[HintCell] {
        &self.hints
    }

    #[must_use]
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Whether every word spells exactly what the solution holds at its
    /// cells, inside the word area.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.words().all(|word| {
            (1..=MAX_WORD_LEN).contains(&word.length())
                && word.cells().count() == word.length()
                && word
                    .letters()
                    .all(|(cell, letter)| cell.is_word_area() && self.solution.letter(cell) == Some(letter))
        })
    }
}

/// Builds grid layouts from candidate words.
///
/// Holds the word bank used for top-ups and hints, and the fixed word set
/// used when a dynamic build is not possible or not wanted.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    bank: WordBank,
    fallback_horizontal: Vec<Candidate>,
    fallback_vertical: Vec<Candidate>,
    min_source_words: usize,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self {
            bank: WordBank::builtin(),
            fallback_horizontal: candidates_from(&FIXED_HORIZONTAL),
            fallback_vertical: candidates_from(&FIXED_VERTICAL),
            min_source_words: SLOTS_PER_AXIS,
        }
    }
}

impl GridBuilder {
    /// Builder with the built-in bank and fixed word set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different word bank.
    #[must_use]
    pub fn with_bank(mut self, bank: WordBank) -> Self {
        self.bank = bank;
        self
    }

    /// Use a different fixed word set.
    #[must_use]
    pub fn with_fallback(mut self, horizontal: Vec<Candidate>, vertical: Vec<Candidate>) -> Self {
        self.fallback_horizontal = horizontal;
        self.fallback_vertical = vertical;
        self
    }

    /// Fewest usable supplied words before the bank may top them up.
    #[must_use]
    pub fn with_min_source_words(mut self, count: usize) -> Self {
        self.min_source_words = count;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Build from supplied words, falling back to the fixed set if there are
    /// not enough of them.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub fn build(&self, candidates: &[Candidate], rng: &mut GameRng) -> GridLayout {
        match self.select(candidates, rng) {
            Ok((horizontal, vertical)) => {
                info!("building grid from selected words");
                self.layout(&horizontal, &vertical, Provenance::Dynamic)
            }
            Err(err) => {
                info!(%err, "using fixed word set");
                self.fixed_layout(Provenance::Fallback(err))
            }
        }
    }

    /// Fetch words from `source` and build from them. A failing source
    /// yields the fixed layout.
    pub fn build_from_source(&self, source: &mut dyn WordSource, rng: &mut GameRng) -> GridLayout {
        match source.fetch() {
            Ok(candidates) => self.build(&candidates, rng),
            Err(err) => {
                warn!(source = source.name(), %err, "word source failed, using fixed word set");
                self.fixed_layout(Provenance::Fallback(err.into()))
            }
        }
    }

    /// Build the fixed layout.
    #[must_use]
    pub fn build_fixed(&self) -> GridLayout {
        self.fixed_layout(Provenance::Fixed)
    }

    fn fixed_layout(&self, provenance: Provenance) -> GridLayout {
        self.layout(&self.fallback_horizontal, &self.fallback_vertical, provenance)
    }

    /// Pick 7 horizontal and 7 vertical words at random.
    fn select(
        &self,
        candidates: &[Candidate],
        rng: &mut GameRng,
    ) -> Result<(Vec<Candidate>, Vec<Candidate>), BuildError> {
        let mut pool = usable_candidates(candidates);
        let usable = pool.len();

        if usable < WORDS_NEEDED {
            if usable < self.min_source_words {
                return Err(BuildError::InsufficientWords {
                    usable,
                    required: self.min_source_words,
                });
            }

            let mut extra: Vec<Candidate> = self
                .bank
                .candidates()
                .iter()
                .filter(|c| !pool.iter().any(|p| p.word == c.word))
                .cloned()
                .collect();
            rng.shuffle(&mut extra);

            let missing = WORDS_NEEDED - usable;
            debug!(usable, missing, "topping up from word bank");
            pool.extend(extra.into_iter().take(missing));

            if pool.len() < WORDS_NEEDED {
                return Err(BuildError::InsufficientWords {
                    usable: pool.len(),
                    required: WORDS_NEEDED,
                });
            }
        }

        rng.shuffle(&mut pool);
        pool.truncate(WORDS_NEEDED);
        let vertical = pool.split_off(SLOTS_PER_AXIS);
        Ok((pool, vertical))
    }

    /// Place words in slot order without any randomness.
    ///
    /// Unusable words (empty, non-letters) leave their slot vacant; later
    /// words keep their own slot. At most 7 words per axis are used.
    #[must_use]
    pub fn layout(
        &self,
        horizontal: &[Candidate],
        vertical: &[Candidate],
        provenance: Provenance,
    ) -> GridLayout {
        let mut solution = SolutionGrid::new();
        let mut hints = Vec::new();

        let mut horizontal_entries = Vec::new();
        for (slot, candidate) in horizontal.iter().take(SLOTS_PER_AXIS).enumerate() {
            let Some(entry) = self.entry_for(candidate, Axis::Horizontal, slot) else {
                debug!(slot, word = %candidate.word, "skipping unusable horizontal word");
                continue;
            };
            for (cell, letter) in entry.letters() {
                solution.set_letter(cell, letter);
            }
            debug!(word = entry.text(), row = slot + 1, "placed horizontal word");
            hints.push(hint_cell(&entry, slot));
            horizontal_entries.push(entry);
        }

        let mut vertical_entries = Vec::new();
        for (slot, candidate) in vertical.iter().take(SLOTS_PER_AXIS).enumerate() {
            let Some(mut entry) = self.entry_for(candidate, Axis::Vertical, slot) else {
                debug!(slot, word = %candidate.word, "skipping unusable vertical word");
                continue;
            };
            let letters: Vec<_> = entry.letters().collect();
            for (offset, (cell, letter)) in letters.into_iter().enumerate() {
                match solution.letter(cell) {
                    Some(existing) if existing != letter => {
                        debug!(%cell, %existing, %letter, "conflict, keeping horizontal letter");
                        entry.replace_letter(offset, existing);
                    }
                    Some(_) => {}
                    None => solution.set_letter(cell, letter),
                }
            }
            debug!(word = entry.text(), column = slot + 1, "placed vertical word");
            hints.push(hint_cell(&entry, slot));
            vertical_entries.push(entry);
        }

        hints.sort_by_key(|h| h.coordinate);

        let layout = GridLayout {
            solution,
            horizontal: horizontal_entries,
            vertical: vertical_entries,
            hints,
            provenance,
        };
        debug_assert!(layout.is_consistent());
        debug!(provenance = ?layout.provenance, "grid laid out:\n{}", layout.solution);
        layout
    }

    fn entry_for(&self, candidate: &Candidate, axis: Axis, slot: usize) -> Option<WordEntry> {
        let candidate = candidate.normalized()?;
        let hint = self.resolve_hint(&candidate);
        let text: String = candidate.word.chars().take(MAX_WORD_LEN).collect();
        Some(WordEntry::new(text, hint, axis, axis.slot_start(slot)))
    }

    /// The candidate's own hint, else the bank's, else the word itself.
    fn resolve_hint(&self, candidate: &Candidate) -> String {
        candidate
            .hint
            .clone()
            .or_else(|| self.bank.hint_for(&candidate.word).map(str::to_string))
            .unwrap_or_else(|| candidate.word.clone())
    }
}

fn hint_cell(entry: &WordEntry, slot: usize) -> HintCell {
    HintCell {
        coordinate: entry.axis().slot_hint(slot),
        text: entry.hint().to_string(),
        axis: entry.axis(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coordinate, SourceError};
    use crate::words::FnSource;

    fn words(list: &[&str]) -> Vec<Candidate> {
        list.iter().map(|w| Candidate::new(*w)).collect()
    }

    #[test]
    fn test_fixed_layout_rows() {
        let layout = GridBuilder::new().build_fixed();
        let texts: Vec<_> = layout.horizontal_words().iter().map(WordEntry::text).collect();
        assert_eq!(texts, vec!["TRAUM", "ALTAR", "STERT", "TENKE", "ENDE", "WIND", "SEE"]);
        assert!(layout.is_consistent());
    }

    #[test]
    fn test_fixed_layout_resolves_conflicts() {
        let layout = GridBuilder::new().build_fixed();
        let texts: Vec<_> = layout.vertical_words().iter().map(WordEntry::text).collect();
        assert_eq!(
            texts,
            vec!["TASTE", "RLTEN", "ATEND", "UARKE", "MRTEE", "ORTE", "KATZS"]
        );
        // Column 5 extends below ENDE, so its last letter is the vertical one.
        assert_eq!(layout.solution().letter(Coordinate::at(5, 5)), Some('E'));
    }

    #[test]
    fn test_hints() {
        let layout = GridBuilder::new().build_fixed();
        assert_eq!(layout.hints().len(), 14);

        let top = &layout.hints()[0];
        assert_eq!(top.coordinate, Coordinate::at(0, 1));
        assert_eq!(top.text, "Narren");
        assert_eq!(top.axis, Axis::Vertical);

        let wind_hint = layout
            .hints()
            .iter()
            .find(|h| h.coordinate == Coordinate::at(6, 0))
            .unwrap();
        assert_eq!(wind_hint.text, "Luft");
        assert_eq!(wind_hint.axis, Axis::Horizontal);
    }

    #[test]
    fn test_hint_fallbacks() {
        let builder = GridBuilder::new();
        let horizontal = vec![
            Candidate::new("boot").with_hint("Kahn"),
            Candidate::new("boot"),
            Candidate::new("zebra"),
        ];
        let layout = builder.layout(&horizontal, &[], Provenance::Dynamic);
        let hints: Vec<_> = layout.horizontal_words().iter().map(WordEntry::hint).collect();
        assert_eq!(hints, vec!["Kahn", "Segeln", "ZEBRA"]);
    }

    #[test]
    fn test_long_words_are_truncated() {
        let layout = GridBuilder::new().layout(
            &words(&["Wasserfall"]),
            &words(&["Lokomotive"]),
            Provenance::Dynamic,
        );
        assert_eq!(layout.horizontal_words()[0].text(), "WASSERF");
        assert_eq!(layout.horizontal_words()[0].length(), 7);
        // (1, 1) belongs to the horizontal word.
        assert_eq!(layout.vertical_words()[0].text(), "WOKOMOT");
        assert!(layout.is_consistent());
    }

    #[test]
    fn test_empty_words_leave_slot_vacant() {
        let layout = GridBuilder::new().layout(
            &words(&["", "HAUS", "   "]),
            &words(&["MAUS", ""]),
            Provenance::Dynamic,
        );

        assert_eq!(layout.horizontal_words().len(), 1);
        assert_eq!(layout.horizontal_words()[0].start(), Coordinate::at(2, 1));
        assert_eq!(layout.vertical_words().len(), 1);
        assert_eq!(layout.hints().len(), 2);
        assert_eq!(layout.solution().letter(Coordinate::at(1, 2)), None);
        assert!(layout.is_consistent());
    }

    #[test]
    fn test_build_with_enough_words_is_dynamic() {
        let list = words(&[
            "HAUS", "KATZE", "BLUME", "WAGEN", "STUHL", "TISCH", "MAUS", "HUND", "BUCH", "BALL",
            "BAUM", "BROT", "UFER", "SEIL",
        ]);
        let layout = GridBuilder::new().build(&list, &mut GameRng::new(1));

        assert_eq!(layout.provenance(), &Provenance::Dynamic);
        assert_eq!(layout.horizontal_words().len(), 7);
        assert_eq!(layout.vertical_words().len(), 7);
        assert!(layout.is_consistent());
    }

    #[test]
    fn test_build_tops_up_from_bank() {
        let list = words(&["EINS", "ZWEI", "DREI", "VIER", "FUENF", "SECHS", "SIEBEN", "ACHT"]);
        let layout = GridBuilder::new().build(&list, &mut GameRng::new(5));

        assert_eq!(layout.provenance(), &Provenance::Dynamic);
        assert_eq!(layout.words().count(), 14);

        // Supplied words have no hint of their own and are not in the bank,
        // so their hint is the word itself. Conflicts never touch hints.
        let supplied = ["EINS", "ZWEI", "DREI", "VIER", "FUENF", "SECHS", "SIEBEN", "ACHT"];
        let from_source = layout.words().filter(|w| supplied.contains(&w.hint())).count();
        assert_eq!(from_source, 8);
    }

    #[test]
    fn test_build_with_few_words_falls_back() {
        let list = words(&["EINS", "ZWEI", "DREI", "VIER", "FUENF"]);
        let layout = GridBuilder::new().build(&list, &mut GameRng::new(5));

        assert_eq!(
            layout.provenance(),
            &Provenance::Fallback(BuildError::InsufficientWords { usable: 5, required: 7 })
        );
        assert_eq!(layout.horizontal_words()[0].text(), "TRAUM");
    }

    #[test]
    fn test_build_counts_only_usable_words() {
        let list = words(&["haus", "HAUS", "Haus", "", "42", "MAUS", "BOOT", "SEE", "UFER", "SEIL"]);
        let layout = GridBuilder::new().build(&list, &mut GameRng::new(5));
        assert_eq!(
            layout.provenance(),
            &Provenance::Fallback(BuildError::InsufficientWords { usable: 6, required: 7 })
        );

        let list = words(&["HAUS", "MAUS", "BOOT", "SEE", "UFER", "SEIL", "MOND"]);
        let layout = GridBuilder::new().build(&list, &mut GameRng::new(5));
        assert_eq!(layout.provenance(), &Provenance::Dynamic);
    }

    #[test]
    fn test_build_is_deterministic_per_seed() {
        let builder = GridBuilder::new();
        let list = WordBank::builtin().candidates().to_vec();

        let a = builder.build(&list, &mut GameRng::new(9));
        let b = builder.build(&list, &mut GameRng::new(9));
        let texts = |l: &GridLayout| l.words().map(|w| w.text().to_string()).collect::<Vec<_>>();
        assert_eq!(texts(&a), texts(&b));
    }

    #[test]
    fn test_failing_source_falls_back() {
        let mut source = FnSource::new("offline", || Err(SourceError::Failed("offline".into())));
        let layout = GridBuilder::new().build_from_source(&mut source, &mut GameRng::new(1));

        assert_eq!(
            layout.provenance(),
            &Provenance::Fallback(BuildError::ExternalSourceUnavailable {
                reason: "word source failed: offline".to_string()
            })
        );
        assert!(layout.provenance().is_fixed());
    }

    #[test]
    fn test_custom_fallback() {
        let builder = GridBuilder::new().with_fallback(words(&["AB"]), words(&["AC"]));
        let layout = builder.build_fixed();

        assert_eq!(layout.horizontal_words()[0].text(), "AB");
        assert_eq!(layout.vertical_words()[0].text(), "AC");
        assert_eq!(layout.solution().letter_count(), 3);
    }
}
