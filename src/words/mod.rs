//! Word supply: candidates, the built-in bank, and word sources.
//!
//! Everything the grid builder needs to know about words comes through this
//! module. Sources are pluggable (`WordSource`); the bank and the fixed word
//! set are always available so a session can start without any source.

pub mod bank;
pub mod candidate;
pub mod source;

pub use bank::{candidates_from, WordBank, BUILTIN_WORDS, FIXED_HORIZONTAL, FIXED_VERTICAL};
pub use candidate::{normalize_letter, normalize_word, usable_candidates, Candidate};
pub use source::{parse_feed, BankSource, FeedSource, FnSource, TimeoutSource, WordSource};
