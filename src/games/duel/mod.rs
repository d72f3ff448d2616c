//! Two-player crossword duel.
//!
//! Players alternate turns on one shared grid:
//! - Each player holds a rack of random letters
//! - On your turn: drag letters onto open cells, then submit
//! - Wrong letters are shown, then returned to your rack; you try again
//! - Correct letters stay; every word you finish scores its length
//! - Stuck with letters that fit nowhere: exchange the rack and pass
//! - When every word is finished the higher score wins
//!
//! ```
//! use crossword_duel::core::Coordinate;
//! use crossword_duel::games::duel::DuelGameBuilder;
//!
//! let mut game = DuelGameBuilder::new().racks("WIND".chars(), "SEE".chars()).build();
//! for col in 1..=4 {
//!     game.place(0, Coordinate::new(6, col).unwrap()).unwrap();
//! }
//! assert_eq!(game.submit().unwrap().score_delta(), 4);
//! ```

mod game;

pub use game::{DuelGame, DuelGameBuilder, TurnPhase};
