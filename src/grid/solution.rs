//! The solution grid: the answer key built once per session.

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, GRID_SIZE};

/// Content of one solution cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolutionCell {
    /// Not part of any word.
    #[default]
    Empty,
    /// The `(0, 0)` marker.
    Origin,
    /// The letter a player must place here.
    Letter(char),
}

/// 9x9 answer key.
///
/// Only the grid builder writes letters. Once a layout is built the grid is
/// read-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionGrid {
    cells: [[SolutionCell; GRID_SIZE]; GRID_SIZE],
}

impl SolutionGrid {
    /// An empty grid with only the origin marker set.
    pub(crate) fn new() -> Self {
        let mut cells = [[SolutionCell::Empty; GRID_SIZE]; GRID_SIZE];
        cells[0][0] = SolutionCell::Origin;
        Self { cells }
    }

    pub(crate) fn set_letter(&mut self, at: Coordinate, letter: char) {
        self.cells[at.row() as usize][at.col() as usize] = SolutionCell::Letter(letter);
    }

    #[must_use]
    pub fn get(&self, at: Coordinate) -> SolutionCell {
        self.cells[at.row() as usize][at.col() as usize]
    }

    /// The solution letter at `at`, if the cell belongs to a word.
    #[must_use]
    pub fn letter(&self, at: Coordinate) -> Option<char> {
        match self.get(at) {
            SolutionCell::Letter(letter) => Some(letter),
            SolutionCell::Empty | SolutionCell::Origin => None,
        }
    }

    /// Number of cells holding a letter.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        Coordinate::all().filter(|c| self.letter(*c).is_some()).count()
    }
}

impl std::fmt::Display for SolutionGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    SolutionCell::Empty => '.',
                    SolutionCell::Origin => '0',
                    SolutionCell::Letter(letter) => *letter,
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
