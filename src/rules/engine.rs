//! Round transitions.
//!
//! Three transitions move a round forward:
//! - `new_round`: deal a fresh shuffled deck (also the reset entry point)
//! - `select_card`: reveal a card and, on the second pick, evaluate the pair
//! - `flip_back`: turn a mismatched pair face-down when its timer fires
//!
//! Each is available both as a method on [`Round`] and as a free function
//! that takes the round by value and hands it back with its effects.
//!
//! ## Selection lock
//!
//! A mismatch leaves two cards face-up until the flip-back token comes back.
//! While that flip-back is pending every selection is rejected with
//! [`SelectError::AwaitingFlipBack`], so at most two cards are ever
//! revealed without being matched.

use tracing::{debug, info};

use super::effect::{Effect, Effects};
use crate::core::{
    ConfigError, FlipBackToken, GameRng, PendingFlipBack, Round, RoundConfig, SelectError,
};

/// Result of delivering a flip-back token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipBackOutcome {
    /// The mismatched pair was turned face-down.
    Applied,
    /// The token did not belong to the current pending flip-back; nothing changed.
    Stale,
}

/// Deal a new round.
///
/// Takes the first `pair_count` symbols of the alphabet, builds two cards
/// per symbol and shuffles them. Pass the round being replaced as
/// `previous`: the new round's generation follows it, so flip-back tokens
/// issued by `previous` are stale against the new round. `None` deals
/// generation 0.
pub fn new_round(
    config: &RoundConfig,
    rng: &mut GameRng,
    previous: Option<&Round>,
) -> Result<Round, ConfigError> {
    config.validate()?;
    let generation = previous.map_or(0, Round::next_generation);
    let round = Round::deal(config.symbols(), config.reveal_delay_ms, rng, generation);
    info!(generation, pairs = config.pair_count, "dealt new round");
    Ok(round)
}

/// Select the card at `index`, returning the updated round and its effects.
///
/// Invalid selections leave the round unchanged and yield no effects.
pub fn select_card(mut round: Round, index: usize) -> (Round, Effects) {
    let effects = round.select(index);
    (round, effects)
}

/// Deliver a flip-back token, returning the updated round.
pub fn flip_back(mut round: Round, token: FlipBackToken) -> (Round, FlipBackOutcome) {
    let outcome = round.flip_back(token);
    (round, outcome)
}

impl Round {
    /// Select a card, ignoring invalid selections.
    pub fn select(&mut self, index: usize) -> Effects {
        match self.try_select(index) {
            Ok(effects) => effects,
            Err(err) => {
                debug!(generation = self.generation, index, %err, "selection ignored");
                Effects::new()
            }
        }
    }

    /// Select a card, reporting why an invalid selection was rejected.
    ///
    /// On error the round is left untouched.
    pub fn try_select(&mut self, index: usize) -> Result<Effects, SelectError> {
        self.check_selectable(index)?;

        if let Some(card) = self.deck.get_mut(index) {
            card.reveal();
        }
        self.selection.push(index);

        if self.selection.len() < 2 {
            return Ok(Effects::new());
        }
        Ok(self.evaluate())
    }

    fn check_selectable(&self, index: usize) -> Result<(), SelectError> {
        let card = self.deck.get(index).ok_or(SelectError::OutOfRange {
            index,
            len: self.deck.len(),
        })?;

        if self.is_won() {
            return Err(SelectError::RoundOver);
        }
        if self.pending.is_some() {
            return Err(SelectError::AwaitingFlipBack);
        }
        if card.matched {
            return Err(SelectError::AlreadyMatched(index));
        }
        if self.selection.contains(&index) {
            return Err(SelectError::AlreadySelected(index));
        }
        Ok(())
    }

    /// Resolve a full selection. Always leaves the selection empty.
    fn evaluate(&mut self) -> Effects {
        let (first, second) = (self.selection[0], self.selection[1]);
        self.selection.clear();
        self.turns += 1;

        let mut effects = Effects::new();
        let (Some(&a), Some(&b)) = (self.deck.get(first), self.deck.get(second)) else {
            return effects;
        };

        if a.value == b.value {
            for index in [first, second] {
                if let Some(card) = self.deck.get_mut(index) {
                    card.mark_matched();
                }
            }
            self.score += 1;
            effects.push(Effect::PlayCorrectSound);
            debug!(generation = self.generation, value = %a.value, score = self.score, "pair matched");

            if self.is_won() {
                effects.push(Effect::RoundWon);
                info!(generation = self.generation, turns = self.turns, "round won");
            }
        } else {
            self.mismatches += 1;
            let token = FlipBackToken {
                generation: self.generation,
                sequence: self.mismatches,
            };
            self.pending = Some(PendingFlipBack {
                token,
                cards: [a.id, b.id],
            });
            effects.push(Effect::PlayIncorrectSound);
            effects.push(Effect::ScheduleFlipBack {
                token,
                delay: self.reveal_delay(),
            });
            debug!(generation = self.generation, first = %a.id, second = %b.id, "pair mismatched");
        }

        effects
    }

    /// Turn the pending mismatched pair face-down if `token` is current.
    pub fn flip_back(&mut self, token: FlipBackToken) -> FlipBackOutcome {
        match self.pending {
            Some(pending) if pending.token == token => {
                for id in pending.cards {
                    if let Some(card) = self.deck.card_by_id_mut(id) {
                        card.hide();
                    }
                }
                self.pending = None;
                FlipBackOutcome::Applied
            }
            _ => {
                debug!(generation = self.generation, ?token, "stale flip-back ignored");
                FlipBackOutcome::Stale
            }
        }
    }
}
