//! Session state: private answer key and the public view.
//!
//! ## GameSession
//!
//! Complete session state:
//! - The grid layout, solution included
//! - Letters committed to the board
//! - Completed words (grows only)
//! - Racks, scores, turn, history
//! - The rack RNG
//!
//! ## PublicView
//!
//! What players may see: hint cells, open cells with committed letters,
//! word shapes, scores and whose turn it is. Never a solution letter.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::action::{MoveRecord, PlacementRecord, Placements};
use super::coord::{Axis, Coordinate, GRID_SIZE};
use super::player::{PlayerId, PlayerMap, PlayerState};
use super::rng::GameRng;
use crate::grid::{GridLayout, Provenance, WordEntry, WordId};
use crate::words::normalize_letter;

/// One session of the duel.
///
/// Uses `im` structures for completed words and history so snapshots are
/// cheap to clone.
#[derive(Clone, Debug)]
pub struct GameSession {
    layout: GridLayout,
    board: [[Option<char>; GRID_SIZE]; GRID_SIZE],
    completed: OrdSet<WordId>,
    current_player: PlayerId,
    players: PlayerMap<PlayerState>,
    turn_number: u32,
    history: Vector<MoveRecord>,
    rng: GameRng,
    rack_size: usize,
}

impl GameSession {
    /// Start a session on `layout`. Both racks are dealt from `rng`.
    ///
    /// ## Defaults
    ///
    /// - `current_player`: Player 1
    /// - `turn_number`: 1
    #[must_use]
    pub fn new(layout: GridLayout, mut rng: GameRng, rack_size: usize) -> Self {
        let players = PlayerMap::new(|_| PlayerState::dealt(rack_size, &mut rng));
        Self {
            layout,
            board: [[None; GRID_SIZE]; GRID_SIZE],
            completed: OrdSet::new(),
            current_player: PlayerId::FIRST,
            players,
            turn_number: 1,
            history: Vector::new(),
            rng,
            rack_size,
        }
    }

    // === Grid ===

    pub(crate) fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub(crate) fn solution_letter(&self, at: Coordinate) -> Option<char> {
        self.layout.solution().letter(at)
    }

    /// Words covering `at`: none, one, or two at an intersection.
    pub(crate) fn words_at(&self, at: Coordinate) -> impl Iterator<Item = &WordEntry> {
        self.layout.words().filter(move |w| w.contains(at))
    }

    /// Where the words came from.
    #[must_use]
    pub fn provenance(&self) -> &Provenance {
        self.layout.provenance()
    }

    /// Whether `at` belongs to a word.
    #[must_use]
    pub fn is_playable(&self, at: Coordinate) -> bool {
        self.solution_letter(at).is_some()
    }

    /// Letter committed at `at` by an accepted move.
    #[must_use]
    pub fn letter_at(&self, at: Coordinate) -> Option<char> {
        self.board[at.row() as usize][at.col() as usize]
    }

    /// Number of words on the grid.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.layout.horizontal_words().len() + self.layout.vertical_words().len()
    }

    #[must_use]
    pub fn completed_words(&self) -> &OrdSet<WordId> {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, word: &WordId) -> bool {
        self.completed.contains(word)
    }

    #[must_use]
    pub fn all_words_completed(&self) -> bool {
        self.completed.len() == self.word_count()
    }

    // === Players ===

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.players[player].score
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.players.map(|p| p.score)
    }

    #[must_use]
    pub fn rack(&self, player: PlayerId) -> &[char] {
        &self.players[player].rack
    }

    #[must_use]
    pub fn rack_size(&self) -> usize {
        self.rack_size
    }

    // === Turns ===

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Pass the turn to the other player.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn_number += 1;
    }

    /// Deal a fresh rack to `player` if theirs is empty.
    ///
    /// Returns whether a rack was dealt.
    pub fn refill_rack_if_empty(&mut self, player: PlayerId) -> bool {
        if !self.players[player].rack.is_empty() {
            return false;
        }
        self.players[player].deal(self.rack_size, &mut self.rng);
        true
    }

    /// Replace `player`'s rack with a fresh one, whatever it held.
    pub fn redeal_rack(&mut self, player: PlayerId) {
        self.players[player].deal(self.rack_size, &mut self.rng);
    }

    /// Record an accepted move for the current player: commit its letters,
    /// mark words completed, add the score, append to history.
    pub(crate) fn commit_move(
        &mut self,
        placements: &[PlacementRecord],
        completed: Vec<WordId>,
        score_delta: u32,
    ) {
        for placement in placements {
            let at = placement.target;
            self.board[at.row() as usize][at.col() as usize] = Some(normalize_letter(placement.letter));
        }
        for word in &completed {
            self.completed.insert(word.clone());
        }
        let player = self.current_player;
        self.players[player].score += score_delta;
        self.history.push_back(MoveRecord {
            player,
            turn: self.turn_number,
            placements: Placements::from_slice(placements),
            score_delta,
            completed,
        });
    }

    // === Export ===

    /// Redacted view of the session.
    #[must_use]
    pub fn public_view(&self) -> PublicView {
        self.public_view_with_pending(&[])
    }

    /// Redacted view with uncommitted letters overlaid.
    pub(crate) fn public_view_with_pending(&self, pending: &[PlacementRecord]) -> PublicView {
        let words: Vec<PublicWord> = self
            .layout
            .words()
            .map(|word| {
                let id = word.id();
                PublicWord {
                    axis: word.axis(),
                    start: word.start(),
                    length: word.length(),
                    hint: word.hint().to_string(),
                    solved: self.is_completed(&id).then_some(id.text),
                }
            })
            .collect();

        let cells = Coordinate::all()
            .map(|at| self.public_cell(at, pending))
            .collect();

        PublicView {
            cells,
            words,
            scores: self.scores(),
            current_player: self.current_player,
            turn: self.turn_number,
        }
    }

    fn public_cell(&self, at: Coordinate, pending: &[PlacementRecord]) -> PublicCell {
        if at == Coordinate::ORIGIN {
            return PublicCell::Origin;
        }
        if at.is_spacer() {
            return PublicCell::Spacer;
        }
        if let Some(hint) = self.layout.hints().iter().find(|h| h.coordinate == at) {
            return PublicCell::Hint {
                text: hint.text.clone(),
                display: hint.display_text(),
                axis: hint.axis,
            };
        }
        if !self.is_playable(at) {
            return PublicCell::Blank;
        }

        let slot = |axis: Axis| {
            self.layout
                .words()
                .position(|w| w.axis() == axis && w.contains(at))
        };
        let staged = pending.iter().rev().find(|p| p.target == at);
        let committed = self.letter_at(at);

        PublicCell::Open {
            horizontal: slot(Axis::Horizontal),
            vertical: slot(Axis::Vertical),
            letter: committed.or(staged.map(|p| p.letter)),
            pending: committed.is_none() && staged.is_some(),
        }
    }
}

/// A cell as players see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicCell {
    /// The `(0, 0)` marker.
    Origin,
    /// A word's hint.
    Hint {
        text: String,
        /// Shortened hint with direction marker, as shown in the cell.
        display: String,
        axis: Axis,
    },
    /// A cell that takes a letter.
    Open {
        /// Index into [`PublicView::words`] of the horizontal word here.
        horizontal: Option<usize>,
        /// Index into [`PublicView::words`] of the vertical word here.
        vertical: Option<usize>,
        letter: Option<char>,
        /// `letter` is placed but not yet submitted.
        pending: bool,
    },
    /// Not part of any word.
    Blank,
    /// Row 8 or column 8.
    Spacer,
}

/// A word's shape and hint. The text is only present once solved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicWord {
    pub axis: Axis,
    pub start: Coordinate,
    pub length: usize,
    pub hint: String,
    pub solved: Option<String>,
}

/// Everything a player may observe about a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicView {
    /// All 81 cells, row-major.
    pub cells: Vec<PublicCell>,
    /// Horizontal words first, then vertical.
    pub words: Vec<PublicWord>,
    pub scores: PlayerMap<u32>,
    pub current_player: PlayerId,
    pub turn: u32,
}

impl PublicView {
    /// Cell at `at`.
    #[must_use]
    pub fn cell(&self, at: Coordinate) -> Option<&PublicCell> {
        self.cells.get(at.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridBuilder;

    fn session() -> GameSession {
        GameSession::new(GridBuilder::new().build_fixed(), GameRng::new(42), 5)
    }

    #[test]
    fn test_session_new() {
        let session = session();
        assert_eq!(session.current_player(), PlayerId::FIRST);
        assert_eq!(session.turn_number(), 1);
        assert_eq!(session.word_count(), 14);
        assert!(session.completed_words().is_empty());
        assert!(session.history().is_empty());
        for player in PlayerId::all() {
            assert_eq!(session.rack(player).len(), 5);
            assert_eq!(session.score(player), 0);
        }
    }

    #[test]
    fn test_playable_cells() {
        let session = session();
        assert!(session.is_playable(Coordinate::at(6, 4)));
        assert!(!session.is_playable(Coordinate::at(6, 5)));
        assert!(!session.is_playable(Coordinate::at(0, 3)));
        assert!(!session.is_playable(Coordinate::ORIGIN));
        assert_eq!(session.words_at(Coordinate::at(1, 1)).count(), 2);
        assert_eq!(session.words_at(Coordinate::at(6, 2)).count(), 1);
    }

    #[test]
    fn test_turn_advance() {
        let mut session = session();
        session.advance_turn();
        assert_eq!(session.current_player(), PlayerId::SECOND);
        assert_eq!(session.turn_number(), 2);
        session.advance_turn();
        assert_eq!(session.current_player(), PlayerId::FIRST);
    }

    #[test]
    fn test_refill_only_when_empty() {
        let mut session = session();
        assert!(!session.refill_rack_if_empty(PlayerId::FIRST));

        session.player_mut(PlayerId::FIRST).rack.clear();
        assert!(session.refill_rack_if_empty(PlayerId::FIRST));
        assert_eq!(session.rack(PlayerId::FIRST).len(), 5);
    }

    #[test]
    fn test_commit_move() {
        let mut session = session();
        let wind = session.layout().horizontal_words()[5].clone();
        let placements: Vec<_> = wind
            .letters()
            .enumerate()
            .map(|(i, (at, letter))| PlacementRecord::new(letter, at, i))
            .collect();

        session.commit_move(&placements, vec![wind.id()], 4);

        assert_eq!(session.letter_at(Coordinate::at(6, 3)), Some('N'));
        assert!(session.is_completed(&wind.id()));
        assert_eq!(session.score(PlayerId::FIRST), 4);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].turn, 1);
        assert_eq!(session.history()[0].placements.len(), 4);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut session = session();
        let snapshot = session.clone();
        session.commit_move(
            &[PlacementRecord::new('S', Coordinate::at(7, 1), 0)],
            Vec::new(),
            0,
        );

        assert_eq!(snapshot.letter_at(Coordinate::at(7, 1)), None);
        assert!(snapshot.history().is_empty());
    }

    #[test]
    fn test_public_view_hides_solution() {
        let view = session().public_view();
        assert_eq!(view.cells.len(), 81);
        assert_eq!(view.words.len(), 14);
        assert!(view.words.iter().all(|w| w.solved.is_none()));

        for cell in &view.cells {
            if let PublicCell::Open { letter, pending, .. } = cell {
                assert_eq!(*letter, None);
                assert!(!pending);
            }
        }
    }

    #[test]
    fn test_public_view_cells() {
        let view = session().public_view();
        assert_eq!(view.cell(Coordinate::ORIGIN), Some(&PublicCell::Origin));
        assert_eq!(view.cell(Coordinate::at(8, 2)), Some(&PublicCell::Spacer));
        assert_eq!(view.cell(Coordinate::at(7, 5)), Some(&PublicCell::Blank));
        assert_eq!(
            view.cell(Coordinate::at(6, 0)),
            Some(&PublicCell::Hint {
                text: "Luft".to_string(),
                display: "Luft →".to_string(),
                axis: Axis::Horizontal,
            })
        );
        assert_eq!(
            view.cell(Coordinate::at(1, 1)),
            Some(&PublicCell::Open {
                horizontal: Some(0),
                vertical: Some(7),
                letter: None,
                pending: false,
            })
        );
    }

    #[test]
    fn test_pending_overlay() {
        let session = session();
        let pending = [PlacementRecord::new('w', Coordinate::at(6, 1), 0)];
        let view = session.public_view_with_pending(&pending);

        assert_eq!(
            view.cell(Coordinate::at(6, 1)),
            Some(&PublicCell::Open {
                horizontal: Some(5),
                vertical: None,
                letter: Some('W'),
                pending: true,
            })
        );
    }

    #[test]
    fn test_public_view_is_idempotent() {
        let session = session();
        assert_eq!(session.public_view(), session.public_view());
    }

    #[test]
    fn test_public_view_serialization() {
        let view = session().public_view();
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: PublicView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
