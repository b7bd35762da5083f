//! Scripted players.
//!
//! A `PlayerPolicy` picks the next card to select. Policies only learn card
//! values through [`PlayerPolicy::observe`], i.e. by seeing cards that are
//! face-up.

use rustc_hash::FxHashMap;

use crate::cards::{CardId, Symbol};
use crate::core::{GameRng, Round};

/// Chooses card selections for a round.
pub trait PlayerPolicy {
    /// Pick the next card index, or `None` if nothing can be selected.
    fn choose(&mut self, round: &Round, rng: &mut GameRng) -> Option<usize>;

    /// Look at the table after a selection.
    fn observe(&mut self, _round: &Round) {}

    /// Forget everything before a new round.
    fn reset(&mut self) {}
}

/// Picks uniformly among selectable cards.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl PlayerPolicy for RandomPolicy {
    fn choose(&mut self, round: &Round, rng: &mut GameRng) -> Option<usize> {
        rng.choose(&round.selectable_indices()).copied()
    }
}

/// Remembers every value it has seen and plays known pairs first.
///
/// With perfect recall this wins an `n`-pair round in at most `2n` turns.
#[derive(Clone, Debug, Default)]
pub struct MemoryPolicy {
    seen: FxHashMap<CardId, Symbol>,
}

impl MemoryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards whose value is remembered.
    pub fn known_cards(&self) -> usize {
        self.seen.len()
    }

    fn known_value(&self, round: &Round, index: usize) -> Option<Symbol> {
        let card = round.card(index)?;
        self.seen.get(&card.id).copied()
    }

    /// First card of a remembered pair among `candidates`.
    fn known_pair(&self, round: &Round, candidates: &[usize]) -> Option<usize> {
        let mut by_value: FxHashMap<Symbol, usize> = FxHashMap::default();
        for &index in candidates {
            if let Some(value) = self.known_value(round, index) {
                if let Some(first) = by_value.insert(value, index) {
                    return Some(first);
                }
            }
        }
        None
    }

    /// A card never seen before, falling back to any candidate.
    fn explore(&self, round: &Round, candidates: &[usize], rng: &mut GameRng) -> Option<usize> {
        let unseen: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&index| self.known_value(round, index).is_none())
            .collect();

        rng.choose(&unseen)
            .copied()
            .or_else(|| rng.choose(candidates).copied())
    }
}

impl PlayerPolicy for MemoryPolicy {
    fn choose(&mut self, round: &Round, rng: &mut GameRng) -> Option<usize> {
        let candidates = round.selectable_indices();
        if candidates.is_empty() {
            return None;
        }

        match round.selection() {
            [first] => {
                let value = round.card(*first)?.value;
                candidates
                    .iter()
                    .copied()
                    .find(|&index| self.known_value(round, index) == Some(value))
                    .or_else(|| self.explore(round, &candidates, rng))
            }
            _ => self
                .known_pair(round, &candidates)
                .or_else(|| self.explore(round, &candidates, rng)),
        }
    }

    fn observe(&mut self, round: &Round) {
        for card in round.cards().filter(|card| card.revealed) {
            self.seen.insert(card.id, card.value);
        }
    }

    fn reset(&mut self) {
        self.seen.clear();
    }
}
