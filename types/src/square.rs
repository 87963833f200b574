use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::bitboard::BitBoard;

pub const BOARD_WIDTH: u8 = 3;
pub const NUM_SQUARES: usize = 9;

pub const ALL_SQUARES: [Square; NUM_SQUARES] = [
    Square(0),
    Square(1),
    Square(2),
    Square(3),
    Square(4),
    Square(5),
    Square(6),
    Square(7),
    Square(8),
];

/// A square on the 3x3 grid, indexed row-major from the top left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
pub struct Square(u8);

impl Square {
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < NUM_SQUARES {
            Some(Self(index))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_WIDTH && col < BOARD_WIDTH {
            Some(Self(row * BOARD_WIDTH + col))
        } else {
            None
        }
    }

    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based row.
    #[must_use]
    #[inline(always)]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_WIDTH
    }

    /// Zero-based column.
    #[must_use]
    #[inline(always)]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_WIDTH
    }

    #[must_use]
    #[inline(always)]
    pub const fn bitboard(self) -> BitBoard {
        BitBoard(1 << self.0)
    }

    /// Square one step in the given direction, clamped at the edge of the grid.
    #[must_use]
    pub const fn step(self, d_row: i8, d_col: i8) -> Self {
        let row = clamp_axis(self.row() as i8 + d_row);
        let col = clamp_axis(self.col() as i8 + d_col);
        Self(row * BOARD_WIDTH + col)
    }
}

const fn clamp_axis(value: i8) -> u8 {
    if value < 0 {
        0
    } else if value >= BOARD_WIDTH as i8 {
        BOARD_WIDTH - 1
    } else {
        value as u8
    }
}

impl TryFrom<usize> for Square {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .and_then(Square::new)
            .ok_or(index)
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> Self {
        square.index()
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row() + 1, self.col() + 1)
    }
}
