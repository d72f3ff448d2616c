//! Grid construction: the answer key, placed words, and hint cells.
//!
//! [`GridBuilder`] turns candidate words into a [`GridLayout`]. A layout is
//! immutable once built; the session reads it to judge moves.

pub mod builder;
pub mod entry;
pub mod solution;

pub use builder::{GridBuilder, GridLayout, Provenance, WORDS_NEEDED};
pub use entry::{HintCell, WordEntry, WordId};
pub use solution::{SolutionCell, SolutionGrid};
