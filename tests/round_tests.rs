//! Round transition tests.
//!
//! These tests drive `Round` directly, without a session, and check the
//! selection lock, match accounting, the win condition and idempotent
//! ignores.

use memory_match::cards::Symbol;
use memory_match::core::{GameRng, Round, RoundConfig, SelectError, TurnPhase};
use memory_match::rules::{flip_back, new_round, select_card, Effect, FlipBackOutcome};
use proptest::prelude::*;

fn dealt_round(seed: u64) -> Round {
    let config = RoundConfig::default().with_seed(seed);
    new_round(&config, &mut config.make_rng(), None).unwrap()
}

/// Positions of the two cards carrying `value`.
fn pair_positions(round: &Round, value: Symbol) -> (usize, usize) {
    let positions: Vec<usize> = round
        .cards()
        .enumerate()
        .filter(|(_, card)| card.value == value)
        .map(|(index, _)| index)
        .collect();
    (positions[0], positions[1])
}

/// Two positions with different values.
fn mismatched_pair(round: &Round) -> (usize, usize) {
    let first = round.card(0).unwrap().value;
    let second = round.cards().position(|card| card.value != first).unwrap();
    (0, second)
}

fn revealed_unmatched(round: &Round) -> usize {
    round.cards().filter(|card| card.is_pending()).count()
}

// =============================================================================
// Selection Lock
// =============================================================================

/// After a mismatch, no third card can be revealed until the flip-back.
#[test]
fn test_third_selection_rejected_during_flip_back() {
    let mut round = dealt_round(42);
    let (a, b) = mismatched_pair(&round);

    round.select(a);
    let effects = round.select(b);
    assert!(effects.contains(&Effect::PlayIncorrectSound));
    assert_eq!(round.turn_phase(), TurnPhase::Evaluating);

    for index in 0..round.deck().len() {
        let before = round.clone();
        assert!(round.try_select(index).is_err());
        assert_eq!(round, before);
    }
    assert_eq!(revealed_unmatched(&round), 2);
    assert!(round.selectable_indices().is_empty());
}

/// Once the flip-back applies, play resumes.
#[test]
fn test_selection_unlocks_after_flip_back() {
    let mut round = dealt_round(42);
    let (a, b) = mismatched_pair(&round);
    round.select(a);
    round.select(b);

    let token = round.pending_flip_back().unwrap().token;
    assert_eq!(round.flip_back(token), FlipBackOutcome::Applied);
    assert_eq!(revealed_unmatched(&round), 0);

    assert!(round.try_select(a).is_ok());
    assert_eq!(round.selection(), &[a]);
}

/// The lock rejects with a dedicated reason.
#[test]
fn test_lock_reason() {
    let mut round = dealt_round(7);
    let (a, b) = mismatched_pair(&round);
    round.select(a);
    round.select(b);

    let other = (0..8).find(|&i| i != a && i != b).unwrap();
    assert_eq!(round.try_select(other), Err(SelectError::AwaitingFlipBack));
}

// =============================================================================
// Match Accounting
// =============================================================================

/// A match scores exactly one and marks both cards.
#[test]
fn test_match_scores_once() {
    let mut round = dealt_round(42);
    let (a, b) = pair_positions(&round, Symbol('C'));

    round.select(a);
    let effects = round.select(b);

    assert_eq!(effects.as_slice(), &[Effect::PlayCorrectSound]);
    assert_eq!(round.score(), 1);
    assert!(round.card(a).unwrap().matched && round.card(a).unwrap().revealed);
    assert!(round.card(b).unwrap().matched && round.card(b).unwrap().revealed);
    assert!(round.pending_flip_back().is_none());
}

/// A mismatch never decrements the score.
#[test]
fn test_mismatch_keeps_score() {
    let mut round = dealt_round(3);
    let (a, b) = pair_positions(&round, Symbol('A'));
    round.select(a);
    round.select(b);

    let (c, _) = pair_positions(&round, Symbol('B'));
    let (d, _) = pair_positions(&round, Symbol('D'));
    round.select(c);
    round.select(d);

    assert_eq!(round.score(), 1);
    assert_eq!(round.mismatches(), 1);
    assert_eq!(round.turns(), 2);
}

// =============================================================================
// Win Condition
// =============================================================================

/// `RoundWon` arrives exactly once, with the last pair.
#[test]
fn test_round_won_exactly_once() {
    let mut round = dealt_round(99);
    let mut won_count = 0;

    for (i, value) in "ABCD".chars().map(Symbol).enumerate() {
        let (a, b) = pair_positions(&round, value);
        round.select(a);
        let effects = round.select(b);

        let won_now = effects.iter().filter(|e| **e == Effect::RoundWon).count();
        if i < 3 {
            assert_eq!(won_now, 0, "won before the last pair");
            assert!(!round.is_won());
        }
        won_count += won_now;
    }

    assert_eq!(won_count, 1);
    assert_eq!(round.score(), 4);
    assert_eq!(round.turn_phase(), TurnPhase::Won);
    assert!(round.cards().all(|card| card.matched));
}

/// A won round ignores further selections.
#[test]
fn test_won_round_ignores_selection() {
    let mut round = dealt_round(99);
    for value in "ABCD".chars().map(Symbol) {
        let (a, b) = pair_positions(&round, value);
        round.select(a);
        round.select(b);
    }

    let before = round.clone();
    assert_eq!(round.try_select(0), Err(SelectError::RoundOver));
    assert_eq!(round, before);
}

/// A fresh round replaces a won one.
#[test]
fn test_new_round_after_win() {
    let config = RoundConfig::default().with_seed(1);
    let mut rng = config.make_rng();
    let mut round = new_round(&config, &mut rng, None).unwrap();
    for value in "ABCD".chars().map(Symbol) {
        let (a, b) = pair_positions(&round, value);
        round.select(a);
        round.select(b);
    }
    assert!(round.is_won());

    let round = new_round(&config, &mut rng, Some(&round)).unwrap();
    assert_eq!(round.score(), 0);
    assert_eq!(round.generation(), 1);
    assert_eq!(round.turn_phase(), TurnPhase::AwaitingFirst);
}

// =============================================================================
// Idempotent Ignore
// =============================================================================

/// Re-selecting the card already in the selection changes nothing.
#[test]
fn test_reselect_is_noop() {
    let mut round = dealt_round(42);
    round.select(5);
    let before = round.clone();

    let effects = round.select(5);

    assert!(effects.is_empty());
    assert_eq!(round, before);
}

/// Selecting a matched card changes nothing.
#[test]
fn test_select_matched_is_noop() {
    let mut round = dealt_round(42);
    let (a, b) = pair_positions(&round, Symbol('B'));
    round.select(a);
    round.select(b);
    let before = round.clone();

    let (round, effects) = select_card(round, a);

    assert!(effects.is_empty());
    assert_eq!(round, before);
}

/// Out-of-range indices are ignored.
#[test]
fn test_out_of_range_is_noop() {
    let round = dealt_round(42);
    let before = round.clone();

    let (round, effects) = select_card(round, 8);

    assert!(effects.is_empty());
    assert_eq!(round, before);
}

/// Tokens from another generation never apply.
#[test]
fn test_foreign_token_is_stale() {
    let mut old = dealt_round(1);
    let (a, b) = mismatched_pair(&old);
    old.select(a);
    old.select(b);
    let old_token = old.pending_flip_back().unwrap().token;

    let config = RoundConfig::default().with_seed(2);
    let mut fresh = new_round(&config, &mut GameRng::new(2), Some(&old)).unwrap();
    let (c, d) = mismatched_pair(&fresh);
    fresh.select(c);
    fresh.select(d);
    let before = fresh.clone();

    let (fresh, outcome) = flip_back(fresh, old_token);
    assert_eq!(outcome, FlipBackOutcome::Stale);
    assert_eq!(fresh, before);
}

/// Resetting through `new_round` makes the replaced round's pending token
/// stale, even when the new round is mid-mismatch with the same sequence.
#[test]
fn test_reset_token_is_stale_against_next_round() {
    let config = RoundConfig::default().with_seed(3);
    let mut rng = config.make_rng();

    let mut old = new_round(&config, &mut rng, None).unwrap();
    let (a, b) = mismatched_pair(&old);
    old.select(a);
    old.select(b);
    let old_token = old.pending_flip_back().unwrap().token;

    let mut fresh = new_round(&config, &mut rng, Some(&old)).unwrap();
    let (c, d) = mismatched_pair(&fresh);
    fresh.select(c);
    fresh.select(d);
    let fresh_token = fresh.pending_flip_back().unwrap().token;
    assert_eq!(fresh_token.sequence, old_token.sequence);
    assert_ne!(fresh_token, old_token);

    let before = fresh.clone();
    let (fresh, outcome) = flip_back(fresh, old_token);
    assert_eq!(outcome, FlipBackOutcome::Stale);
    assert_eq!(fresh, before);
    assert!(fresh.card(c).unwrap().revealed);
    assert!(fresh.card(d).unwrap().revealed);

    let (fresh, outcome) = flip_back(fresh, fresh_token);
    assert_eq!(outcome, FlipBackOutcome::Applied);
    assert!(fresh.card(c).unwrap().is_hidden());
}

// =============================================================================
// Invariants Under Arbitrary Play
// =============================================================================

#[derive(Clone, Debug)]
enum Step {
    Select(usize),
    FlipBack,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0usize..10).prop_map(Step::Select),
        1 => Just(Step::FlipBack),
    ]
}

proptest! {
    /// Random taps and timer fires never break the round invariants.
    #[test]
    fn test_invariants_hold(seed in any::<u64>(), steps in prop::collection::vec(step_strategy(), 0..200)) {
        let mut round = dealt_round(seed);
        let mut last_score = 0;
        let mut wins = 0;

        for step in steps {
            match step {
                Step::Select(index) => {
                    let effects = round.select(index);
                    wins += effects.iter().filter(|e| **e == Effect::RoundWon).count();
                }
                Step::FlipBack => {
                    if let Some(pending) = round.pending_flip_back().copied() {
                        round.flip_back(pending.token);
                    }
                }
            }

            prop_assert!(round.selection().len() <= 2);
            prop_assert!(revealed_unmatched(&round) <= 2);
            prop_assert!(round.cards().all(|card| !card.matched || card.revealed));
            prop_assert!(round.score() <= round.pair_count());
            prop_assert!(round.score() >= last_score);
            prop_assert_eq!(round.score() * 2, round.deck().matched_count());
            last_score = round.score();
        }

        prop_assert!(wins <= 1);
        prop_assert_eq!(wins == 1, round.is_won());
    }
}
