//! Drive a real session to completion with a scripted player.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::policy::PlayerPolicy;
use crate::core::{ConfigError, GameRng, RoundConfig, TurnPhase};
use crate::runtime::{GameSession, ManualScheduler, SilentAudio};

/// Configuration for autoplay.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Stop after this many turns even if the round is not won.
    pub max_turns: u32,

    /// Seed for dealing; the policy draws from a separate stream of it.
    pub seed: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            max_turns: 1000,
            seed: 42,
        }
    }
}

impl AutoplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum turns per round.
    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = max;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of one autoplayed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub turns: u32,
    pub mismatches: u32,
    pub score: usize,
    pub won: bool,
}

/// Play one round with `policy` until it is won or `max_turns` is reached.
///
/// Play also stops early if the policy gives up or picks a card the round
/// would refuse. The reveal delay is simulated on a `ManualScheduler`, so
/// this runs without waiting.
pub fn play_round<P: PlayerPolicy + ?Sized>(
    round_config: &RoundConfig,
    policy: &mut P,
    config: &AutoplayConfig,
) -> Result<RoundStats, ConfigError> {
    let deal_config = round_config.clone().with_seed(config.seed);
    let delay = deal_config.reveal_delay();
    let mut session = GameSession::new(deal_config, ManualScheduler::new(), SilentAudio)?;
    let mut rng = GameRng::new(config.seed).for_context("policy");
    policy.reset();

    while !session.round().is_won() && session.round().turns() < config.max_turns {
        if session.round().turn_phase() == TurnPhase::Evaluating {
            session.advance(delay);
            continue;
        }

        let Some(index) = policy.choose(session.round(), &mut rng) else {
            break;
        };
        if !session.round().selectable_indices().contains(&index) {
            debug!(index, "policy chose an unselectable card");
            break;
        }
        session.select_card(index);
        policy.observe(session.round());
    }

    let round = session.round();
    let stats = RoundStats {
        turns: round.turns(),
        mismatches: round.mismatches(),
        score: round.score(),
        won: round.is_won(),
    };
    debug!(seed = config.seed, ?stats, "autoplay round finished");
    Ok(stats)
}

/// Play `count` rounds, seeding round `i` with `config.seed + i`.
pub fn play_rounds<P: PlayerPolicy + ?Sized>(
    round_config: &RoundConfig,
    policy: &mut P,
    config: &AutoplayConfig,
    count: u64,
) -> Result<Vec<RoundStats>, ConfigError> {
    (0..count)
        .map(|i| {
            let seeded = config.clone().with_seed(config.seed.wrapping_add(i));
            play_round(round_config, policy, &seeded)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::{MemoryPolicy, RandomPolicy};

    #[test]
    fn test_default_config() {
        let config = AutoplayConfig::default();
        assert_eq!(config.max_turns, 1000);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_memory_policy_wins() {
        let stats = play_round(
            &RoundConfig::default(),
            &mut MemoryPolicy::new(),
            &AutoplayConfig::default(),
        )
        .unwrap();

        assert!(stats.won);
        assert_eq!(stats.score, 4);
        assert!(stats.turns <= 8);
        assert_eq!(stats.turns, stats.mismatches + 4);
    }

    #[test]
    fn test_turn_cap() {
        let stats = play_round(
            &RoundConfig::default().with_pair_count(8),
            &mut RandomPolicy,
            &AutoplayConfig::default().with_max_turns(2),
        )
        .unwrap();

        assert_eq!(stats.turns, 2);
        assert!(!stats.won);
    }

    #[test]
    fn test_invalid_config() {
        let result = play_round(
            &RoundConfig::default().with_pair_count(0),
            &mut RandomPolicy,
            &AutoplayConfig::default(),
        );
        assert_eq!(result, Err(ConfigError::NoPairs));
    }

    #[test]
    fn test_deterministic() {
        let config = AutoplayConfig::default().with_seed(11);
        let a = play_round(&RoundConfig::default(), &mut RandomPolicy, &config).unwrap();
        let b = play_round(&RoundConfig::default(), &mut RandomPolicy, &config).unwrap();
        assert_eq!(a, b);
    }
}
