//! Game modes built on the engine.

pub mod duel;
