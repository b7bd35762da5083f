//! # memory-match
//!
//! Game-state engine for a pair-matching memory card game.
//!
//! A deck of paired symbols is shuffled face-down. Each turn the player
//! reveals two cards: a matching pair stays face-up, a mismatch flips back
//! after a fixed delay. The round is won once every pair is matched.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: A `Round` is a plain value. Transitions take it in and
//!    hand it back with a list of effects, so the engine runs without any
//!    rendering host.
//!
//! 2. **Effects, Not Calls**: The rules never play sounds or start timers.
//!    They emit `Effect`s that collaborators interpret.
//!
//! 3. **No Stale Timers**: Every flip-back carries a token tied to the round
//!    generation and mismatch that issued it. Sessions also cancel the live
//!    timer when a new round is dealt.
//!
//! ## Modules
//!
//! - `cards`: Symbols, cards, and decks
//! - `core`: RNG, configuration, errors, round state
//! - `rules`: Round transitions and effects
//! - `runtime`: Timer and audio seams, `GameSession`
//! - `autoplay`: Scripted players for simulation
//!
//! ## Example
//!
//! ```
//! use memory_match::{GameSession, ManualScheduler, RoundConfig, SilentAudio};
//!
//! let config = RoundConfig::default().with_seed(42);
//! let mut session = GameSession::new(config, ManualScheduler::new(), SilentAudio).unwrap();
//!
//! session.select_card(0);
//! assert_eq!(session.round().selection(), &[0]);
//! ```

pub mod autoplay;
pub mod cards;
pub mod core;
pub mod rules;
pub mod runtime;

// Re-export commonly used types
pub use crate::cards::{default_alphabet, Card, CardId, Deck, Symbol};

pub use crate::core::{
    ConfigError, FlipBackToken, GameRng, GameRngState, PendingFlipBack, Round, RoundConfig,
    SelectError, Selection, TurnPhase,
};

pub use crate::rules::{flip_back, new_round, select_card, Effect, Effects, FlipBackOutcome, SoundCue};

pub use crate::runtime::{
    AudioPlayer, GameSession, ManualScheduler, PlaybackError, Scheduler, SilentAudio, TimerHandle,
};

pub use crate::autoplay::{AutoplayConfig, MemoryPolicy, PlayerPolicy, RandomPolicy, RoundStats};
