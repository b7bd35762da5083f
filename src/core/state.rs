//! Round state.
//!
//! ## Round
//!
//! Everything one playthrough needs:
//! - The dealt deck (fixed positions, `im` backed for cheap snapshots)
//! - The in-progress selection (0-2 card indices)
//! - Score, turn and mismatch counters
//! - The pending flip-back, if a mismatched pair is still showing
//!
//! The transitions live in [`crate::rules`]; this module holds the data and
//! read-only queries a renderer needs.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;
use crate::cards::{Card, CardId, Deck, Symbol};

/// Indices of the cards picked so far this turn.
pub type Selection = SmallVec<[usize; 2]>;

/// Identifies one scheduled flip-back.
///
/// `generation` ties the token to the round that issued it; `sequence`
/// counts mismatches within that round. A token only applies to the round
/// and mismatch that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlipBackToken {
    pub generation: u64,
    pub sequence: u32,
}

/// A mismatched pair waiting to be turned face-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFlipBack {
    pub token: FlipBackToken,
    /// Captured by id, not position.
    pub cards: [CardId; 2],
}

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card picked this turn.
    AwaitingFirst,
    /// One card picked.
    AwaitingSecond,
    /// A mismatched pair is showing; selections are locked until it flips back.
    Evaluating,
    /// All pairs matched. Terminal until the next round is dealt.
    Won,
}

/// One round of play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) generation: u64,
    pub(crate) deck: Deck,
    pub(crate) selection: Selection,
    pub(crate) score: usize,
    pub(crate) pending: Option<PendingFlipBack>,
    pub(crate) turns: u32,
    pub(crate) mismatches: u32,
    pub(crate) reveal_delay_ms: u64,
}

impl Round {
    /// Deal a shuffled round from already-validated symbols.
    pub(crate) fn deal(
        symbols: &[Symbol],
        reveal_delay_ms: u64,
        rng: &mut GameRng,
        generation: u64,
    ) -> Self {
        Self::from_deck(Deck::shuffled(symbols, rng), reveal_delay_ms, generation)
    }

    /// Start a round on an explicit deck layout.
    ///
    /// Useful for replays and for hosts that deal their own decks.
    #[must_use]
    pub fn from_deck(deck: Deck, reveal_delay_ms: u64, generation: u64) -> Self {
        Self {
            generation,
            deck,
            selection: Selection::new(),
            score: 0,
            pending: None,
            turns: 0,
            mismatches: 0,
            reveal_delay_ms,
        }
    }

    /// Ordinal of this round within its session.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generation of the round that replaces this one.
    #[must_use]
    pub fn next_generation(&self) -> u64 {
        self.generation.wrapping_add(1)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Card at a position.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.deck.get(index)
    }

    /// Iterate over cards in position order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.deck.iter()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.deck.pair_count()
    }

    /// Indices picked so far this turn.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Pairs matched this round.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Completed turns (two cards picked and evaluated).
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Turns that ended in a mismatch.
    #[must_use]
    pub fn mismatches(&self) -> u32 {
        self.mismatches
    }

    #[must_use]
    pub fn pending_flip_back(&self) -> Option<&PendingFlipBack> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.score == self.pair_count()
    }

    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        if self.is_won() {
            TurnPhase::Won
        } else if self.pending.is_some() {
            TurnPhase::Evaluating
        } else if self.selection.is_empty() {
            TurnPhase::AwaitingFirst
        } else {
            TurnPhase::AwaitingSecond
        }
    }

    /// Positions a selection would currently accept.
    ///
    /// Empty while a flip-back is pending or once the round is won.
    #[must_use]
    pub fn selectable_indices(&self) -> Vec<usize> {
        match self.turn_phase() {
            TurnPhase::Evaluating | TurnPhase::Won => Vec::new(),
            TurnPhase::AwaitingFirst | TurnPhase::AwaitingSecond => self
                .deck
                .iter()
                .enumerate()
                .filter(|(index, card)| !card.matched && !self.selection.contains(index))
                .map(|(index, _)| index)
                .collect(),
        }
    }
}
