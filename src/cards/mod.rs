//! Card system: symbols, cards, and decks.
//!
//! ## Key Types
//!
//! - `Symbol`: A face value from a fixed alphabet
//! - `CardId`: Stable identity of a card within one deck
//! - `Card`: Face value plus `revealed` / `matched` flags
//! - `Deck`: Ordered, shuffled pairs of cards

pub mod card;
pub mod deck;
pub mod symbol;

pub use card::{Card, CardId};
pub use deck::Deck;
pub use symbol::{alphabet_from_str, default_alphabet, Symbol};
