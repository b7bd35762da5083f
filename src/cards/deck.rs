//! Deck construction and shuffling.
//!
//! A deck holds `2 * pair_count` cards, one pair per symbol. Positions are
//! fixed once the deck is dealt; only the shuffle at construction reorders
//! cards.
//!
//! The cards live in an `im::Vector` so that cloning a round for a renderer
//! snapshot is O(1).

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::symbol::Symbol;
use crate::core::rng::GameRng;

/// The ordered cards of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Build an unshuffled deck: pair `i` uses `symbols[i]` and gets card
    /// ids `2i` and `2i + 1`.
    #[must_use]
    pub fn ordered(symbols: &[Symbol]) -> Self {
        Self::from_cards(Self::pairs(symbols))
    }

    /// Build a deck and shuffle it with `rng`.
    #[must_use]
    pub fn shuffled(symbols: &[Symbol], rng: &mut GameRng) -> Self {
        let mut cards = Self::pairs(symbols);
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// Wrap an explicit card layout.
    ///
    /// No pairing check is made here; see [`Deck::verify_pairs`].
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: Vector::from(cards),
        }
    }

    fn pairs(symbols: &[Symbol]) -> Vec<Card> {
        let mut cards = Vec::with_capacity(symbols.len() * 2);
        for (i, &value) in symbols.iter().enumerate() {
            let base = i * 2;
            cards.push(Card::face_down(CardId::new(base), value));
            cards.push(Card::face_down(CardId::new(base + 1), value));
        }
        cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get the card at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Iterate over cards in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find the position of a card by id.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    pub(crate) fn card_by_id_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let index = self.position_of(id)?;
        self.cards.get_mut(index)
    }

    /// Cards that are face-up but not matched.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_pending()).count()
    }

    /// Cards that are matched.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count()
    }

    /// How many cards carry each value.
    #[must_use]
    pub fn pair_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.value).or_insert(0) += 1;
        }
        counts
    }

    /// Check deck integrity: every value appears exactly twice and every id
    /// is unique.
    #[must_use]
    pub fn verify_pairs(&self) -> bool {
        let mut ids = FxHashSet::default();
        let unique_ids = self.cards.iter().all(|card| ids.insert(card.id));

        unique_ids && self.pair_counts().values().all(|&count| count == 2)
    }
}
