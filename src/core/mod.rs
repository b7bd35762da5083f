//! Core types: RNG, configuration, errors, and round state.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{RoundConfig, DEFAULT_PAIR_COUNT, DEFAULT_REVEAL_DELAY_MS};
pub use error::{ConfigError, SelectError};
pub use rng::{GameRng, GameRngState};
pub use state::{FlipBackToken, PendingFlipBack, Round, Selection, TurnPhase};
