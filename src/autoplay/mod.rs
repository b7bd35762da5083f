//! Scripted play for simulations and benchmarks.
//!
//! Runs whole rounds through a `GameSession` with a `PlayerPolicy` choosing
//! cards, and reports per-round statistics.

mod policy;
mod runner;

pub use policy::{MemoryPolicy, PlayerPolicy, RandomPolicy};
pub use runner::{play_round, play_rounds, AutoplayConfig, RoundStats};
