//! Round configuration.
//!
//! A `RoundConfig` fixes everything needed to deal a round: how many pairs,
//! which symbols, how long a mismatched pair stays visible, and optionally
//! the shuffle seed.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::rng::GameRng;
use crate::cards::{default_alphabet, Symbol};

/// Pairs dealt by default.
pub const DEFAULT_PAIR_COUNT: usize = 4;

/// How long a mismatched pair stays face-up, in milliseconds.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1000;

/// Configuration for dealing rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Number of pairs in the deck (>= 1).
    pub pair_count: usize,

    /// Distinct symbols; the first `pair_count` are used, in order.
    pub alphabet: Vec<Symbol>,

    /// Mismatch flip-back delay in milliseconds.
    pub reveal_delay_ms: u64,

    /// Shuffle seed. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            alphabet: default_alphabet(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Create a config with the given pair count and alphabet.
    pub fn new(pair_count: usize, alphabet: Vec<Symbol>) -> Self {
        Self {
            pair_count,
            alphabet,
            ..Self::default()
        }
    }

    /// Set the number of pairs.
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the alphabet.
    pub fn with_alphabet(mut self, alphabet: Vec<Symbol>) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the flip-back delay.
    pub fn with_reveal_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reveal_delay_ms = delay_ms;
        self
    }

    /// Set the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Flip-back delay as a `Duration`.
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Check the config can deal a valid deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.alphabet.len() < self.pair_count {
            return Err(ConfigError::AlphabetTooShort {
                needed: self.pair_count,
                available: self.alphabet.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &symbol in &self.alphabet {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
        }

        if self.reveal_delay_ms == 0 {
            return Err(ConfigError::ZeroRevealDelay);
        }
        Ok(())
    }

    /// The symbols that end up on the table.
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeds.
    pub fn symbols(&self) -> &[Symbol] {
        let n = self.pair_count.min(self.alphabet.len());
        &self.alphabet[..n]
    }

    /// Build the dealing RNG from `seed`, or from entropy if unset.
    pub fn make_rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
