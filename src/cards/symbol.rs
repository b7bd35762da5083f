//! Card face values.
//!
//! A `Symbol` is one character from a fixed alphabet. Each symbol in the
//! active alphabet prefix appears on exactly two cards.

use serde::{Deserialize, Serialize};

/// A card face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    /// Create a symbol from a character.
    #[must_use]
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Get the underlying character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The stock alphabet: `A` through `H`.
#[must_use]
pub fn default_alphabet() -> Vec<Symbol> {
    ('A'..='H').map(Symbol).collect()
}

/// Build an alphabet from the characters of a string, in order.
///
/// ```
/// use memory_match::cards::{alphabet_from_str, Symbol};
///
/// let alphabet = alphabet_from_str("XYZ");
/// assert_eq!(alphabet, vec![Symbol('X'), Symbol('Y'), Symbol('Z')]);
/// ```
#[must_use]
pub fn alphabet_from_str(s: &str) -> Vec<Symbol> {
    s.chars().map(Symbol).collect()
}
