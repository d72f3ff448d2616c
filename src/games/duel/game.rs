//! Two-player turn manager.

use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::core::{
    Coordinate, GameConfig, GameRng, GameSession, PlacementRecord, Placements, PlayerId, PublicView,
    Rack, TurnError, WordStrategy,
};
use crate::grid::{GridBuilder, GridLayout};
use crate::rules::{CrosswordRules, GameResult, MoveRejection, MoveResult, RulesEngine};
use crate::words::{BankSource, Candidate, TimeoutSource, WordBank, WordSource};

/// Where the turn currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// The current player may place, take back, and submit letters.
    AwaitingPlacements,
    /// The last submission had wrong letters. The host shows them for
    /// `retry_after`, then calls [`DuelGame::clear_rejected`].
    ShowingError {
        mismatched: Vec<Coordinate>,
        retry_after: Duration,
    },
    /// Every word is complete.
    Finished(GameResult),
}

/// Builder for creating a DuelGame.
pub struct DuelGameBuilder {
    config: GameConfig,
    source: Option<Box<dyn WordSource>>,
    candidates: Option<Vec<Candidate>>,
    bank: Option<WordBank>,
    fallback: Option<(Vec<Candidate>, Vec<Candidate>)>,
    racks: Option<[Rack; 2]>,
}

impl Default for DuelGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            source: None,
            candidates: None,
            bank: None,
            fallback: None,
            racks: None,
        }
    }
}

impl DuelGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn strategy(mut self, strategy: WordStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn rack_size(mut self, size: usize) -> Self {
        self.config.rack_size = size;
        self
    }

    /// Draw words from `source`. Implies [`WordStrategy::Dynamic`].
    ///
    /// The source runs under the configured timeout.
    pub fn word_source(mut self, source: impl WordSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self.config.strategy = WordStrategy::Dynamic;
        self
    }

    /// Build from these words. Implies [`WordStrategy::Dynamic`] and takes
    /// precedence over a word source.
    pub fn candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = Some(candidates);
        self.config.strategy = WordStrategy::Dynamic;
        self
    }

    /// Word bank for top-ups and hints.
    pub fn bank(mut self, bank: WordBank) -> Self {
        self.bank = Some(bank);
        self
    }

    /// Fixed word set used by [`WordStrategy::Fixed`] and as the fallback.
    pub fn fallback(mut self, horizontal: Vec<Candidate>, vertical: Vec<Candidate>) -> Self {
        self.fallback = Some((horizontal, vertical));
        self
    }

    /// Opening racks instead of random ones. Later refills are random.
    pub fn racks(
        mut self,
        first: impl IntoIterator<Item = char>,
        second: impl IntoIterator<Item = char>,
    ) -> Self {
        self.racks = Some([first.into_iter().collect(), second.into_iter().collect()]);
        self
    }

    /// Build a duel with the standard rules.
    pub fn build(self) -> DuelGame {
        self.build_with_rules(CrosswordRules)
    }

    /// Build a duel judged by `rules`.
    #[instrument(skip_all, fields(seed = self.config.seed, strategy = ?self.config.strategy))]
    pub fn build_with_rules<R: RulesEngine>(self, rules: R) -> DuelGame<R> {
        let config = self.config;
        let root = GameRng::new(config.seed);
        let mut word_rng = root.for_context("words");

        let mut builder = GridBuilder::new().with_min_source_words(config.min_source_words);
        if let Some(bank) = self.bank {
            builder = builder.with_bank(bank);
        }
        if let Some((horizontal, vertical)) = self.fallback {
            builder = builder.with_fallback(horizontal, vertical);
        }

        let layout: GridLayout = match (config.strategy, self.candidates, self.source) {
            (WordStrategy::Fixed, _, _) => builder.build_fixed(),
            (WordStrategy::Dynamic, Some(candidates), _) => builder.build(&candidates, &mut word_rng),
            (WordStrategy::Dynamic, None, Some(source)) => {
                let mut bounded = TimeoutSource::new(source, config.source_timeout());
                builder.build_from_source(&mut bounded, &mut word_rng)
            }
            (WordStrategy::Dynamic, None, None) => {
                let mut bank = BankSource::new(builder.bank().clone());
                builder.build_from_source(&mut bank, &mut word_rng)
            }
        };
        info!(provenance = ?layout.provenance(), words = layout.words().count(), "duel ready");

        let mut session = GameSession::new(layout, root.for_context("racks"), config.rack_size);
        if let Some([first, second]) = self.racks {
            session.player_mut(PlayerId::FIRST).rack = first;
            session.player_mut(PlayerId::SECOND).rack = second;
        }

        DuelGame::new(session, config, rules)
    }
}

/// A running duel: the session plus the current player's staged letters.
///
/// Letters move from the rack to `pending` with [`place`](Self::place) and
/// back with [`take_back`](Self::take_back); [`submit`](Self::submit) hands
/// them to the rules engine.
#[derive(Clone, Debug)]
pub struct DuelGame<R = CrosswordRules> {
    session: GameSession,
    rules: R,
    config: GameConfig,
    pending: Placements,
    phase: TurnPhase,
}

impl<R: RulesEngine> DuelGame<R> {
    /// Wrap an existing session.
    pub fn new(session: GameSession, config: GameConfig, rules: R) -> Self {
        let phase = match rules.is_terminal(&session) {
            Some(result) => TurnPhase::Finished(result),
            None => TurnPhase::AwaitingPlacements,
        };
        Self {
            session,
            rules,
            config,
            pending: Placements::new(),
            phase,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.session.current_player()
    }

    /// The current player's rack.
    #[must_use]
    pub fn rack(&self) -> &[char] {
        self.session.rack(self.current_player())
    }

    /// Letters placed this turn and not yet accepted.
    #[must_use]
    pub fn pending(&self) -> &[PlacementRecord] {
        &self.pending
    }

    /// Session view with this turn's letters overlaid.
    #[must_use]
    pub fn view(&self) -> PublicView {
        self.session.public_view_with_pending(&self.pending)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match &self.phase {
            TurnPhase::Finished(result) => Some(result.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, TurnPhase::Finished(_))
    }

    // === Actions ===

    /// Move the letter at `rack_index` onto `target`.
    pub fn place(
        &mut self,
        rack_index: usize,
        target: Coordinate,
    ) -> Result<PlacementRecord, TurnError> {
        self.ensure_awaiting()?;

        let player = self.current_player();
        let len = self.session.rack(player).len();
        if rack_index >= len {
            return Err(TurnError::RackIndexOutOfRange {
                index: rack_index,
                len,
            });
        }
        if !self.session.is_playable(target) {
            return Err(TurnError::NotPlayable(target));
        }
        if self.session.letter_at(target).is_some() || self.pending.iter().any(|p| p.target == target)
        {
            return Err(TurnError::Occupied(target));
        }

        let letter = self
            .session
            .player_mut(player)
            .take_letter(rack_index)
            .ok_or(TurnError::RackIndexOutOfRange {
                index: rack_index,
                len,
            })?;
        let placement = PlacementRecord::new(letter, target, rack_index);
        self.pending.push(placement);
        debug!(%player, %letter, %target, "letter placed");
        Ok(placement)
    }

    /// Return the pending letter at `target` to the rack.
    pub fn take_back(&mut self, target: Coordinate) -> Result<char, TurnError> {
        self.ensure_awaiting()?;

        let position = self
            .pending
            .iter()
            .position(|p| p.target == target)
            .ok_or(TurnError::NothingPlaced(target))?;
        let placement = self.pending.remove(position);
        self.return_to_rack(placement);
        Ok(placement.letter)
    }

    /// Hand the pending letters to the rules engine.
    ///
    /// - Accepted: the turn passes and the next player's rack is refilled
    ///   if empty, or the game finishes.
    /// - Wrong letters: the phase becomes [`TurnPhase::ShowingError`].
    /// - Nothing placed: no change.
    #[instrument(skip(self), fields(player = %self.current_player(), pending = self.pending.len()))]
    pub fn submit(&mut self) -> Result<MoveResult, TurnError> {
        self.ensure_awaiting()?;

        let result = self.rules.judge(&mut self.session, &self.pending);
        match &result {
            MoveResult::Accepted(_) => {
                self.pending.clear();
                if let Some(outcome) = self.rules.is_terminal(&self.session) {
                    info!(?outcome, "game finished");
                    self.phase = TurnPhase::Finished(outcome);
                } else {
                    self.session.advance_turn();
                    let next = self.session.current_player();
                    if self.session.refill_rack_if_empty(next) {
                        debug!(player = %next, "rack refilled");
                    }
                }
            }
            MoveResult::Rejected(MoveRejection::WrongLetters { mismatched }) => {
                self.phase = TurnPhase::ShowingError {
                    mismatched: mismatched.clone(),
                    retry_after: self.config.revert_delay(),
                };
            }
            MoveResult::Rejected(MoveRejection::NoLettersPlaced) => {}
        }
        Ok(result)
    }

    /// Give up the turn for a fresh rack.
    ///
    /// Pending letters are discarded with the old rack, the current player
    /// is dealt a new one, and the turn passes. This is the way out for a
    /// rack that fits nowhere on the grid.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn exchange(&mut self) -> Result<(), TurnError> {
        self.ensure_awaiting()?;

        let player = self.current_player();
        self.pending.clear();
        self.session.redeal_rack(player);
        self.session.advance_turn();
        let next = self.session.current_player();
        if self.session.refill_rack_if_empty(next) {
            debug!(player = %next, "rack refilled");
        }
        info!(%player, "rack exchanged");
        Ok(())
    }

    /// Remove the rejected letters from the grid and put them back on the
    /// rack. Correct letters from the same submission stay placed.
    pub fn clear_rejected(&mut self) -> Result<Vec<PlacementRecord>, TurnError> {
        let mismatched = match &self.phase {
            TurnPhase::ShowingError { mismatched, .. } => mismatched.clone(),
            TurnPhase::Finished(_) => return Err(TurnError::Finished),
            TurnPhase::AwaitingPlacements => return Err(TurnError::NotAwaitingRevert),
        };

        let (mut rejected, kept): (Vec<_>, Vec<_>) = self
            .pending
            .iter()
            .copied()
            .partition(|p| mismatched.contains(&p.target));
        self.pending = kept.into_iter().collect();

        rejected.sort_by_key(|p| p.source_rack_index);
        for placement in &rejected {
            self.return_to_rack(*placement);
        }
        self.phase = TurnPhase::AwaitingPlacements;
        debug!(cleared = rejected.len(), "rejected letters returned");
        Ok(rejected)
    }

    fn ensure_awaiting(&self) -> Result<(), TurnError> {
        match self.phase {
            TurnPhase::AwaitingPlacements => Ok(()),
            TurnPhase::ShowingError { .. } => Err(TurnError::AwaitingRevert),
            TurnPhase::Finished(_) => Err(TurnError::Finished),
        }
    }

    fn return_to_rack(&mut self, placement: PlacementRecord) {
        let player = self.current_player();
        let rack = &mut self.session.player_mut(player).rack;
        let index = placement.source_rack_index.min(rack.len());
        rack.insert(index, placement.letter);
    }
}
