//! Core engine types: coordinates, players, RNG, configuration, errors,
//! placements, and the session state.
//!
//! Nothing in here knows how words are chosen or how moves are judged; the
//! `grid` and `rules` modules build on these types.

pub mod action;
pub mod config;
pub mod coord;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{MoveRecord, PlacementRecord, Placements};
pub use config::{GameConfig, WordStrategy};
pub use coord::{Axis, Coordinate, GRID_SIZE, MAX_WORD_LEN, SLOTS_PER_AXIS};
pub use error::{BuildError, CoordinateError, SourceError, TurnError};
pub use player::{PlayerId, PlayerMap, PlayerState, Rack, PLAYER_COUNT, RACK_ALPHABET};
pub use rng::GameRng;
pub use state::{GameSession, PublicCell, PublicView, PublicWord};
