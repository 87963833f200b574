use std::fmt::Display;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

pub const ALL_SYMBOLS: [Symbol; 2] = [Symbol::X, Symbol::O];

/// One of the two marks players place. `X` always moves first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Side to move after `ply` moves have been played.
    #[must_use]
    pub const fn to_move(ply: usize) -> Self {
        if ply % 2 == 0 {
            Symbol::X
        } else {
            Symbol::O
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
