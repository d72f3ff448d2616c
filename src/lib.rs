//! # crossword-duel
//!
//! A two-player competitive crossword engine.
//!
//! Two players share a 9x9 grid of seven horizontal and seven vertical
//! words. On each turn a player places letters from a random rack; the move
//! is accepted only if every letter matches the hidden solution. Finishing a
//! word scores its length.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Everything about a game lives in one `GameSession`
//!    value. Nothing is global.
//!
//! 2. **Hidden Answers**: The solution never leaves the crate. Hosts render
//!    from `PublicView`.
//!
//! 3. **Always Playable**: Word sources may fail or time out; the builder
//!    then falls back to a fixed word set and records why.
//!
//! 4. **Deterministic**: A seed reproduces the same grid and racks.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Completed words and history use `im`,
//!   so sessions snapshot cheaply.
//!
//! - **Pluggable Words**: `WordSource` implementations supply candidates;
//!   `TimeoutSource` bounds how long a build may wait for one.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, racks, RNG, configuration, errors, session
//! - `words`: Candidate words, the built-in bank, word sources
//! - `grid`: Grid layout construction
//! - `rules`: Move validation, scoring, game results
//! - `games`: The duel turn manager
//!
//! ## Example
//!
//! ```
//! use crossword_duel::{Coordinate, DuelGameBuilder, MoveResult, TurnPhase};
//!
//! let mut game = DuelGameBuilder::new().seed(7).racks("XIND".chars(), "ABC".chars()).build();
//! game.place(0, Coordinate::new(6, 1).unwrap()).unwrap();
//!
//! let result = game.submit().unwrap();
//! assert!(matches!(result, MoveResult::Rejected(_)));
//! assert!(matches!(game.phase(), TurnPhase::ShowingError { .. }));
//!
//! game.clear_rejected().unwrap();
//! assert_eq!(game.rack().len(), 4);
//! ```

pub mod core;
pub mod games;
pub mod grid;
pub mod rules;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    Axis, Coordinate, GameConfig, GameRng, GameSession, MoveRecord, PlacementRecord, PlayerId,
    PlayerMap, PublicCell, PublicView, PublicWord, TurnError, WordStrategy,
};

pub use crate::grid::{GridBuilder, GridLayout, HintCell, Provenance, WordEntry, WordId};

pub use crate::rules::{CrosswordRules, GameResult, MoveRejection, MoveResult, RulesEngine};

pub use crate::words::{Candidate, WordBank, WordSource};

pub use crate::games::duel::{DuelGame, DuelGameBuilder, TurnPhase};
