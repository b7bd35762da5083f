//! Error types for round setup and card selection.

use thiserror::Error;

use crate::cards::Symbol;

/// Invalid round configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a round needs at least one pair")]
    NoPairs,
    #[error("alphabet has {available} symbols but {needed} pairs were requested")]
    AlphabetTooShort { needed: usize, available: usize },
    #[error("symbol '{0}' appears more than once in the alphabet")]
    DuplicateSymbol(Symbol),
    #[error("reveal delay must be greater than zero")]
    ZeroRevealDelay,
}

/// Why a card selection was ignored.
///
/// None of these are fatal: [`Round::select`](crate::core::Round::select)
/// turns every one of them into a no-op.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    #[error("card index {index} is out of range for a deck of {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("round is already won")]
    RoundOver,
    #[error("waiting for the mismatched pair to flip back")]
    AwaitingFlipBack,
    #[error("card {0} is already matched")]
    AlreadyMatched(usize),
    #[error("card {0} is already selected")]
    AlreadySelected(usize),
}
