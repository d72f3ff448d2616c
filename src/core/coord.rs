//! Grid coordinates and word axes.
//!
//! ## Layout
//!
//! The board is a 9x9 square addressed by `(row, col)`:
//! - `(0, 0)`: origin marker
//! - `(0, 1..=7)`: hint cells for vertical words
//! - `(1..=7, 0)`: hint cells for horizontal words
//! - `(1..=7, 1..=7)`: the word area
//! - row 8 and column 8: spacers, never part of a word
//!
//! ```
//! use crossword_duel::core::{Axis, Coordinate};
//!
//! let start = Coordinate::new(6, 1).unwrap();
//! assert!(start.is_word_area());
//!
//! let third = start.step(Axis::Horizontal, 2).unwrap();
//! assert_eq!((third.row(), third.col()), (6, 3));
//!
//! assert!(Coordinate::new(9, 0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::CoordinateError;

/// Width and height of the board, spacers included.
pub const GRID_SIZE: usize = 9;

/// Word slots per axis (rows 1..=7 and columns 1..=7).
pub const SLOTS_PER_AXIS: usize = 7;

/// Longest word that fits in a slot.
pub const MAX_WORD_LEN: usize = 7;

/// A cell on the 9x9 board.
///
/// Always in bounds: construct with [`Coordinate::new`] or `TryFrom<(u8, u8)>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// The origin marker cell.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a coordinate, rejecting anything outside the 9x9 board.
    pub fn new(row: u8, col: u8) -> Result<Self, CoordinateError> {
        if (row as usize) < GRID_SIZE && (col as usize) < GRID_SIZE {
            Ok(Self { row, col })
        } else {
            Err(CoordinateError::OutOfBounds { row, col })
        }
    }

    /// In-crate constructor for positions already known to be in bounds.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Create a coordinate from a linear index (`row * 9 + col`).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < GRID_SIZE * GRID_SIZE).then(|| Self::at(index / GRID_SIZE, index % GRID_SIZE))
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Linear index, row-major.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    /// Row 8 or column 8.
    #[must_use]
    pub const fn is_spacer(self) -> bool {
        self.row as usize == GRID_SIZE - 1 || self.col as usize == GRID_SIZE - 1
    }

    /// Inside rows 1..=7 and columns 1..=7.
    #[must_use]
    pub const fn is_word_area(self) -> bool {
        self.row >= 1
            && self.row as usize <= SLOTS_PER_AXIS
            && self.col >= 1
            && self.col as usize <= SLOTS_PER_AXIS
    }

    /// Move `by` cells along `axis`. `None` if that leaves the board.
    #[must_use]
    pub fn step(self, axis: Axis, by: usize) -> Option<Self> {
        let (row, col) = match axis {
            Axis::Horizontal => (self.row as usize, self.col as usize + by),
            Axis::Vertical => (self.row as usize + by, self.col as usize),
        };
        (row < GRID_SIZE && col < GRID_SIZE).then(|| Self::at(row, col))
    }

    /// Iterate over every cell on the board, row-major.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE * GRID_SIZE).map(|i| Self::at(i / GRID_SIZE, i % GRID_SIZE))
    }
}

impl TryFrom<(u8, u8)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (u8, u8) {
    fn from(c: Coordinate) -> Self {
        (c.row, c.col)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a word runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right along a row; hint sits in column 0.
    Horizontal,
    /// Top to bottom along a column; hint sits in row 0.
    Vertical,
}

impl Axis {
    /// Direction marker shown next to a hint.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Axis::Horizontal => '→',
            Axis::Vertical => '↓',
        }
    }

    /// Where the word in `slot` (0-based) starts.
    pub(crate) const fn slot_start(self, slot: usize) -> Coordinate {
        match self {
            Axis::Horizontal => Coordinate::at(slot + 1, 1),
            Axis::Vertical => Coordinate::at(1, slot + 1),
        }
    }

    /// Where the hint for the word in `slot` (0-based) sits.
    pub(crate) const fn slot_hint(self, slot: usize) -> Coordinate {
        match self {
            Axis::Horizontal => Coordinate::at(slot + 1, 0),
            Axis::Vertical => Coordinate::at(0, slot + 1),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}
