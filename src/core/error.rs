//! Error types shared across the engine.
//!
//! Move rejections live with the validator in `rules`; everything here is
//! either a construction error or a build-time condition that the grid
//! builder recovers from by falling back to the fixed word set.

use std::time::Duration;

use thiserror::Error;

use super::coord::Coordinate;

/// A `(row, col)` pair outside the 9x9 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("coordinate ({row}, {col}) is outside the 9x9 board")]
    OutOfBounds { row: u8, col: u8 },
}

/// Why a dynamic build was abandoned in favour of the fixed word set.
///
/// Never returned to callers: it is recorded in
/// [`Provenance::Fallback`](crate::grid::Provenance::Fallback).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("only {usable} usable words, {required} required")]
    InsufficientWords { usable: usize, required: usize },

    #[error("word source unavailable: {reason}")]
    ExternalSourceUnavailable { reason: String },
}

impl From<SourceError> for BuildError {
    fn from(err: SourceError) -> Self {
        BuildError::ExternalSourceUnavailable {
            reason: err.to_string(),
        }
    }
}

/// Failure reported by a [`WordSource`](crate::words::WordSource).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("word source timed out after {0:?}")]
    Timeout(Duration),

    #[error("word source failed: {0}")]
    Failed(String),

    #[error("word source worker disconnected")]
    Disconnected,
}

/// Illegal request to the turn manager.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("rack index {index} out of range (rack holds {len} letters)")]
    RackIndexOutOfRange { index: usize, len: usize },

    #[error("cell {0} is not part of any word")]
    NotPlayable(Coordinate),

    #[error("cell {0} already holds a letter")]
    Occupied(Coordinate),

    #[error("no pending letter at {0}")]
    NothingPlaced(Coordinate),

    #[error("rejected letters must be cleared before continuing")]
    AwaitingRevert,

    #[error("no rejected move is waiting to be cleared")]
    NotAwaitingRevert,

    #[error("the game is finished")]
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CoordinateError::OutOfBounds { row: 9, col: 1 };
        assert_eq!(err.to_string(), "coordinate (9, 1) is outside the 9x9 board");

        let err = BuildError::InsufficientWords { usable: 5, required: 7 };
        assert_eq!(err.to_string(), "only 5 usable words, 7 required");

        let err = TurnError::Occupied(Coordinate::at(6, 1));
        assert_eq!(err.to_string(), "cell (6, 1) already holds a letter");
    }

    #[test]
    fn test_source_error_converts_to_unavailable() {
        let err: BuildError = SourceError::Timeout(Duration::from_millis(250)).into();
        assert_eq!(
            err,
            BuildError::ExternalSourceUnavailable {
                reason: "word source timed out after 250ms".to_string()
            }
        );
    }
}
