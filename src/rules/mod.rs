//! Game rules: round transitions and the effects they emit.
//!
//! The rules never touch rendering, audio or timers directly. Hosts feed
//! selections and flip-back tokens in and act on the returned `Effect`s.

pub mod effect;
pub mod engine;

pub use effect::{Effect, Effects, SoundCue};
pub use engine::{flip_back, new_round, select_card, FlipBackOutcome};
