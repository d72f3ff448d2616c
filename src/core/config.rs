//! Game configuration.
//!
//! Everything a host may want to tune lives in [`GameConfig`]. The struct is
//! serde-serializable so hosts can load it from whatever format they use.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the session's word set is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordStrategy {
    /// Always use the fixed fallback word set.
    #[default]
    Fixed,
    /// Draw words from a word source, falling back to the fixed set when the
    /// source fails or supplies too few words.
    Dynamic,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for word selection and rack draws.
    pub seed: u64,

    /// Letters dealt whenever a rack is (re)filled.
    pub rack_size: usize,

    /// Grace window before rejected letters are cleared, in milliseconds.
    pub revert_delay_ms: u64,

    /// Upper bound on waiting for a word source, in milliseconds.
    pub source_timeout_ms: u64,

    /// Fixed or dynamic word selection.
    pub strategy: WordStrategy,

    /// Fewest usable words a source must supply before the bank may top it
    /// up. Below this the fixed set is used.
    pub min_source_words: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rack_size: 5,
            revert_delay_ms: 3_000,
            source_timeout_ms: 2_000,
            strategy: WordStrategy::Fixed,
            min_source_words: 7,
        }
    }
}

impl GameConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the rack size.
    #[must_use]
    pub fn with_rack_size(mut self, rack_size: usize) -> Self {
        self.rack_size = rack_size;
        self
    }

    /// Set the word strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: WordStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the revert grace window.
    #[must_use]
    pub fn with_revert_delay(mut self, delay: Duration) -> Self {
        self.revert_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the word source timeout.
    #[must_use]
    pub fn with_source_timeout(mut self, timeout: Duration) -> Self {
        self.source_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set the minimum number of usable source words.
    #[must_use]
    pub fn with_min_source_words(mut self, count: usize) -> Self {
        self.min_source_words = count;
        self
    }

    #[must_use]
    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }

    #[must_use]
    pub fn source_timeout(&self) -> Duration {
        Duration::from_millis(self.source_timeout_ms)
    }
}
