//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! A duel always has exactly two players. Indices are 0-based; `Display`
//! shows them 1-based the way players see them ("Player 1", "Player 2").
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexable by `PlayerId`.
//!
//! ## PlayerState
//!
//! A player's rack of letters and score.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::rng::GameRng;

/// Number of players in a duel.
pub const PLAYER_COUNT: usize = 2;

/// Letters a rack can be dealt from.
pub const RACK_ALPHABET: [char; 29] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ü',
];

/// Player identifier: `PlayerId(0)` moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: Self = Self(0);
    pub const SECOND: Self = Self(1);

    /// Create a player ID from a 0-based index. `None` unless 0 or 1.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PLAYER_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both players in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage, one slot per player.
///
/// ```
/// use crossword_duel::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::default();
/// scores[PlayerId::SECOND] += 4;
///
/// assert_eq!(scores[PlayerId::FIRST], 0);
/// assert_eq!(scores[PlayerId::SECOND], 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Map every entry to a new value.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|p| f(&self.data[p.index()]))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A player's rack.
pub type Rack = SmallVec<[char; 5]>;

/// Letters in hand and points scored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub rack: Rack,
    pub score: u32,
}

impl PlayerState {
    /// A fresh player holding `rack_size` random letters.
    #[must_use]
    pub fn dealt(rack_size: usize, rng: &mut GameRng) -> Self {
        let mut state = Self::default();
        state.deal(rack_size, rng);
        state
    }

    /// Replace the rack with `rack_size` random letters.
    pub fn deal(&mut self, rack_size: usize, rng: &mut GameRng) {
        self.rack = (0..rack_size)
            .filter_map(|_| rng.draw_letter(&RACK_ALPHABET))
            .collect();
    }

    /// Remove and return the letter at `index`; later letters shift left.
    pub fn take_letter(&mut self, index: usize) -> Option<char> {
        (index < self.rack.len()).then(|| self.rack.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::new(1), Some(PlayerId::SECOND));
        assert_eq!(PlayerId::new(2), None);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    }

    #[test]
    fn test_player_map() {
        let mut map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 * 10);
        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);

        map[PlayerId::FIRST] = 7;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &7), (PlayerId::SECOND, &10)]);

        let doubled = map.map(|v| v * 2);
        assert_eq!(doubled[PlayerId::SECOND], 20);
    }

    #[test]
    fn test_deal_uses_alphabet() {
        let mut rng = GameRng::new(3);
        let player = PlayerState::dealt(5, &mut rng);

        assert_eq!(player.rack.len(), 5);
        assert_eq!(player.score, 0);
        assert!(player.rack.iter().all(|c| RACK_ALPHABET.contains(c)));
    }

    #[test]
    fn test_take_letter() {
        let mut player = PlayerState {
            rack: Rack::from_slice(&['A', 'B', 'C']),
            score: 0,
        };

        assert_eq!(player.take_letter(1), Some('B'));
        assert_eq!(player.rack.as_slice(), &['A', 'C']);
        assert_eq!(player.take_letter(2), None);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
