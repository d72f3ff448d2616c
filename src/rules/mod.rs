//! Move judging and game results.
//!
//! `validator` holds the all-or-nothing move check and scoring. Turn
//! managers reach it through the `RulesEngine` trait and never interpret
//! letters or words directly.

pub mod engine;
pub mod validator;

pub use engine::{CrosswordRules, GameResult, RulesEngine};
pub use validator::{validate, MoveRejection, MoveResult, ScoredMove};
