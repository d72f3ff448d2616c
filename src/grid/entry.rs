//! Placed words and their hint cells.

use serde::{Deserialize, Serialize};

use crate::core::{Axis, Coordinate};

/// Identity of a placed word: where it starts, which way it runs, and what
/// it spells.
///
/// Ordered by axis, then start, so sets of ids iterate horizontal words
/// first, top to bottom, then vertical words left to right.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId {
    pub axis: Axis,
    pub start: Coordinate,
    pub text: String,
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", self.text, self.axis.marker(), self.start)
    }
}

/// A word placed on the grid.
///
/// `length` always equals the number of letters in `text`, and every cell
/// lies in rows/columns 1..=7.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    text: String,
    hint: String,
    axis: Axis,
    start: Coordinate,
    length: usize,
}

impl WordEntry {
    pub(crate) fn new(text: String, hint: String, axis: Axis, start: Coordinate) -> Self {
        let length = text.chars().count();
        Self {
            text,
            hint,
            axis,
            start,
            length,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn id(&self) -> WordId {
        WordId {
            axis: self.axis,
            start: self.start,
            text: self.text.clone(),
        }
    }

    /// Cells covered by the word, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length).filter_map(move |i| self.start.step(self.axis, i))
    }

    /// Letters paired with the cell each one occupies.
    pub fn letters(&self) -> impl Iterator<Item = (Coordinate, char)> + '_ {
        self.cells().zip(self.text.chars())
    }

    /// Whether the word covers `at`.
    #[must_use]
    pub fn contains(&self, at: Coordinate) -> bool {
        self.offset_of(at).is_some()
    }

    /// Position of `at` within the word.
    #[must_use]
    pub fn offset_of(&self, at: Coordinate) -> Option<usize> {
        let (along, across, start_along, start_across) = match self.axis {
            Axis::Horizontal => (at.col(), at.row(), self.start.col(), self.start.row()),
            Axis::Vertical => (at.row(), at.col(), self.start.row(), self.start.col()),
        };
        if across != start_across || along < start_along {
            return None;
        }
        let offset = (along - start_along) as usize;
        (offset < self.length).then_some(offset)
    }

    /// Letter at `offset`.
    #[must_use]
    pub fn letter_at(&self, offset: usize) -> Option<char> {
        self.text.chars().nth(offset)
    }

    /// Overwrite the letter at `offset`. Used only while resolving
    /// intersection conflicts during the build.
    pub(crate) fn replace_letter(&mut self, offset: usize, letter: char) {
        self.text = self
            .text
            .chars()
            .enumerate()
            .map(|(i, c)| if i == offset { letter } else { c })
            .collect();
    }
}

/// Longest hint shown in full; longer hints are cut down.
const HINT_DISPLAY_MAX: usize = 8;

/// Characters of a long hint kept before the ellipsis.
const HINT_DISPLAY_KEEP: usize = 6;

/// Non-playable cell showing a word's hint and direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintCell {
    pub coordinate: Coordinate,
    pub text: String,
    pub axis: Axis,
}

impl HintCell {
    /// Hint as it fits in a cell, followed by the direction marker.
    ///
    /// ```
    /// use crossword_duel::core::{Axis, Coordinate};
    /// use crossword_duel::grid::HintCell;
    ///
    /// let cell = HintCell {
    ///     coordinate: Coordinate::new(0, 3).unwrap(),
    ///     text: "Einrichtung".to_string(),
    ///     axis: Axis::Vertical,
    /// };
    /// assert_eq!(cell.display_text(), "Einric... ↓");
    /// ```
    #[must_use]
    pub fn display_text(&self) -> String {
        let short: String = if self.text.chars().count() > HINT_DISPLAY_MAX {
            let kept: String = self.text.chars().take(HINT_DISPLAY_KEEP).collect();
            format!("{kept}...")
        } else {
            self.text.clone()
        };
        format!("{short} {}", self.axis.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, axis: Axis, row: u8, col: u8) -> WordEntry {
        WordEntry::new(
            text.to_string(),
            "hint".to_string(),
            axis,
            Coordinate::new(row, col).unwrap(),
        )
    }

    #[test]
    fn test_cells_horizontal() {
        let wind = entry("WIND", Axis::Horizontal, 6, 1);
        let cells: Vec<_> = wind.cells().map(|c| (c.row(), c.col())).collect();
        assert_eq!(cells, vec![(6, 1), (6, 2), (6, 3), (6, 4)]);
        assert_eq!(wind.length(), 4);
    }

    #[test]
    fn test_cells_vertical() {
        let orte = entry("ORTE", Axis::Vertical, 1, 6);
        let letters: Vec<_> = orte.letters().map(|(c, l)| (c.row(), c.col(), l)).collect();
        assert_eq!(
            letters,
            vec![(1, 6, 'O'), (2, 6, 'R'), (3, 6, 'T'), (4, 6, 'E')]
        );
    }

    #[test]
    fn test_offset_of() {
        let wind = entry("WIND", Axis::Horizontal, 6, 1);
        assert_eq!(wind.offset_of(Coordinate::new(6, 3).unwrap()), Some(2));
        assert_eq!(wind.offset_of(Coordinate::new(6, 5).unwrap()), None);
        assert_eq!(wind.offset_of(Coordinate::new(5, 3).unwrap()), None);
        assert_eq!(wind.offset_of(Coordinate::new(6, 0).unwrap()), None);

        let orte = entry("ORTE", Axis::Vertical, 1, 6);
        assert!(orte.contains(Coordinate::new(4, 6).unwrap()));
        assert!(!orte.contains(Coordinate::new(5, 6).unwrap()));
    }

    #[test]
    fn test_replace_letter_keeps_length() {
        let mut word = entry("TOREN", Axis::Vertical, 1, 1);
        word.replace_letter(1, 'A');
        assert_eq!(word.text(), "TAREN");
        assert_eq!(word.length(), 5);
        assert_eq!(word.letter_at(1), Some('A'));
    }

    #[test]
    fn test_word_id_ordering() {
        let h = entry("SEE", Axis::Horizontal, 7, 1).id();
        let v = entry("KATZS", Axis::Vertical, 1, 7).id();
        assert!(h < v);
        assert_eq!(h.to_string(), "SEE → at (7, 1)");
    }

    #[test]
    fn test_short_hint_is_kept() {
        let cell = HintCell {
            coordinate: Coordinate::new(6, 0).unwrap(),
            text: "Luft".to_string(),
            axis: Axis::Horizontal,
        };
        assert_eq!(cell.display_text(), "Luft →");
    }
}
