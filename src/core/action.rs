//! Placement and move records.
//!
//! A move is a batch of placements: each one says "this letter from my rack
//! goes on that cell". Placements are ephemeral and live only for the turn;
//! accepted moves are kept as `MoveRecord`s in the session history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coordinate;
use super::player::PlayerId;
use crate::grid::WordId;
use crate::words::normalize_letter;

/// One letter dragged onto the grid this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Placed letter, stored uppercase.
    pub letter: char,

    /// Cell the letter was dropped on.
    pub target: Coordinate,

    /// Rack position the letter came from at the time it was placed.
    pub source_rack_index: usize,
}

impl PlacementRecord {
    /// Create a placement, uppercasing the letter.
    #[must_use]
    pub fn new(letter: char, target: Coordinate, source_rack_index: usize) -> Self {
        Self {
            letter: normalize_letter(letter),
            target,
            source_rack_index,
        }
    }
}

/// Placements submitted together.
pub type Placements = SmallVec<[PlacementRecord; 5]>;

/// An accepted move, as recorded in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: PlayerId,

    /// Turn number the move was made on (starts at 1).
    pub turn: u32,

    /// The letters placed.
    pub placements: Placements,

    /// Points awarded.
    pub score_delta: u32,

    /// Words completed by this move.
    pub completed: Vec<WordId>,
}
