//! Move validation and scoring.
//!
//! A submitted move is judged all-or-nothing:
//! - no placements: rejected, nothing changes
//! - any letter that does not match the solution: rejected, nothing changes
//! - otherwise accepted: letters are committed, and every word the move
//!   finishes scores its length for the mover
//!
//! A word is finished when each of its cells holds a letter, whether placed
//! earlier or by this move. A word scores at most once.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::core::{Coordinate, GameSession, PlacementRecord};
use crate::grid::WordId;
use crate::words::normalize_letter;

/// Why a move was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("no letters placed")]
    NoLettersPlaced,

    /// Cells whose letter does not match, sorted and without duplicates.
    #[error("{} placed letters do not match", .mismatched.len())]
    WrongLetters { mismatched: Vec<Coordinate> },
}

/// Points and completions from an accepted move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub score_delta: u32,
    /// Words finished by the move, in `WordId` order.
    pub completed: Vec<WordId>,
}

/// Outcome of validating a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    Accepted(ScoredMove),
    Rejected(MoveRejection),
}

impl MoveResult {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    /// Points awarded; zero for a rejected move.
    #[must_use]
    pub fn score_delta(&self) -> u32 {
        match self {
            MoveResult::Accepted(scored) => scored.score_delta,
            MoveResult::Rejected(_) => 0,
        }
    }
}

/// Judge `placements` for the current player and apply them if accepted.
///
/// A rejected move leaves the session untouched.
#[instrument(skip_all, fields(player = %session.current_player(), placed = placements.len()))]
pub fn validate(session: &mut GameSession, placements: &[PlacementRecord]) -> MoveResult {
    if placements.is_empty() {
        debug!("empty move");
        return MoveResult::Rejected(MoveRejection::NoLettersPlaced);
    }

    let mut mismatched: Vec<Coordinate> = placements
        .iter()
        .filter(|p| session.solution_letter(p.target) != Some(normalize_letter(p.letter)))
        .map(|p| p.target)
        .collect();
    if !mismatched.is_empty() {
        mismatched.sort_unstable();
        mismatched.dedup();
        info!(wrong = mismatched.len(), "move rejected");
        return MoveResult::Rejected(MoveRejection::WrongLetters { mismatched });
    }

    let filled =
        |at: Coordinate| session.letter_at(at).is_some() || placements.iter().any(|p| p.target == at);

    let mut finished: Vec<(WordId, u32)> = Vec::new();
    for placement in placements {
        for word in session.words_at(placement.target) {
            let id = word.id();
            if session.is_completed(&id) || finished.iter().any(|(f, _)| *f == id) {
                continue;
            }
            if word.cells().all(|at| filled(at)) {
                debug!(word = %id, "word completed");
                finished.push((id, word.length() as u32));
            }
        }
    }
    finished.sort_unstable();

    let score_delta = finished.iter().map(|(_, len)| len).sum();
    let completed: Vec<WordId> = finished.into_iter().map(|(id, _)| id).collect();

    session.commit_move(placements, completed.clone(), score_delta);
    info!(score_delta, completed = completed.len(), "move accepted");

    MoveResult::Accepted(ScoredMove {
        score_delta,
        completed,
    })
}
