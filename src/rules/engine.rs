//! Rules engine trait and game results.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::validator::{validate, MoveResult};
use crate::core::{GameSession, PlacementRecord, PlayerId};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// The turn manager calls these methods and never judges letters itself.
///
/// ## Implementation Notes
///
/// - `judge`: A rejected move must leave the session untouched
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Judge and, if accepted, apply a move for the current player.
    fn judge(&self, session: &mut GameSession, placements: &[PlacementRecord]) -> MoveResult;

    /// Check if the game is over.
    fn is_terminal(&self, session: &GameSession) -> Option<GameResult>;
}

/// Standard rules: exact letters only, words score their length, the game
/// ends when every word is complete and the higher score wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrosswordRules;

impl RulesEngine for CrosswordRules {
    fn judge(&self, session: &mut GameSession, placements: &[PlacementRecord]) -> MoveResult {
        validate(session, placements)
    }

    fn is_terminal(&self, session: &GameSession) -> Option<GameResult> {
        if !session.all_words_completed() {
            return None;
        }
        let first = session.score(PlayerId::FIRST);
        let second = session.score(PlayerId::SECOND);
        Some(match first.cmp(&second) {
            Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            Ordering::Equal => GameResult::Draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coordinate, GameRng};
    use crate::grid::{GridBuilder, Provenance};
    use crate::words::Candidate;

    #[test]
    fn test_is_winner() {
        assert!(GameResult::Winner(PlayerId::SECOND).is_winner(PlayerId::SECOND));
        assert!(!GameResult::Winner(PlayerId::SECOND).is_winner(PlayerId::FIRST));
        assert!(!GameResult::Draw.is_winner(PlayerId::FIRST));
    }

    #[test]
    fn test_game_continues_until_all_words_complete() {
        let session = GameSession::new(GridBuilder::new().build_fixed(), GameRng::new(1), 5);
        assert_eq!(CrosswordRules.is_terminal(&session), None);
    }

    #[test]
    fn test_single_word_grid() {
        let layout = GridBuilder::new().layout(&[Candidate::new("AB")], &[], Provenance::Dynamic);
        let mut session = GameSession::new(layout, GameRng::new(1), 5);
        let placements = [
            PlacementRecord::new('A', Coordinate::at(1, 1), 0),
            PlacementRecord::new('B', Coordinate::at(1, 2), 1),
        ];

        assert_eq!(CrosswordRules.judge(&mut session, &placements).score_delta(), 2);
        assert_eq!(
            CrosswordRules.is_terminal(&session),
            Some(GameResult::Winner(PlayerId::FIRST))
        );
    }

    #[test]
    fn test_empty_grid_is_a_draw() {
        let layout = GridBuilder::new().layout(&[], &[], Provenance::Dynamic);
        let session = GameSession::new(layout, GameRng::new(1), 5);
        assert_eq!(CrosswordRules.is_terminal(&session), Some(GameResult::Draw));
    }
}
