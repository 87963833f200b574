use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

use smallvec::SmallVec;

use crate::square::{Square, NUM_SQUARES};

/// Set of squares, one bit per square in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct BitBoard(pub u16);

impl BitBoard {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self((1 << NUM_SQUARES) - 1);

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 & Self::FULL.0 == Self::FULL.0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn has(self, square: Square) -> bool {
        !self.is_disjoint(square.bitboard())
    }

    #[must_use]
    pub const fn is_disjoint(self, other: BitBoard) -> bool {
        self.0 & other.0 == Self::EMPTY.0
    }

    #[must_use]
    pub const fn is_subset(self, other: BitBoard) -> bool {
        other.0 & self.0 == self.0
    }

    #[must_use]
    pub const fn is_superset(self, other: BitBoard) -> bool {
        other.is_subset(self)
    }

    #[must_use]
    pub fn try_next_square(self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }
        // Bits above the grid never get set through `Square`, so the index fits.
        Square::new(self.0.trailing_zeros() as u8)
    }

    #[must_use]
    pub const fn iter(self) -> BitBoardIter {
        BitBoardIter(self)
    }

    #[must_use]
    pub fn squares(self) -> SmallVec<Square, NUM_SQUARES> {
        self.iter().collect()
    }
}

pub struct BitBoardIter(BitBoard);

impl Iterator for BitBoardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let square = self.0.try_next_square();
        if let Some(square) = square {
            self.0 ^= square.bitboard();
        }
        square
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl IntoIterator for BitBoard {
    type Item = Square;
    type IntoIter = BitBoardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl ExactSizeIterator for BitBoardIter {
    fn len(&self) -> usize {
        (self.0 & BitBoard::FULL).len()
    }
}

impl FromIterator<Square> for BitBoard {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut res = BitBoard::EMPTY;
        for sq in iter {
            res |= sq.bitboard();
        }
        res
    }
}

macro_rules! impl_math_ops {
    ($($trait:ident, $fn:ident;)*) => {$(
        impl $trait for BitBoard {
            type Output = Self;

            fn $fn(self, rhs: Self) -> Self::Output {
                Self($trait::$fn(self.0, rhs.0))
            }
        }
    )*};
}
impl_math_ops! {
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
}

macro_rules! impl_math_assign_ops {
    ($($trait:ident, $fn:ident;)*) => {$(
        impl $trait for BitBoard {
            fn $fn(&mut self, rhs: Self) {
                $trait::$fn(&mut self.0, rhs.0)
            }
        }
    )*};
}
impl_math_assign_ops! {
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
}

impl Sub for BitBoard {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self & !rhs
    }
}

impl SubAssign for BitBoard {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Complement stays within the nine grid bits.
impl Not for BitBoard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0 & Self::FULL.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_SQUARES;

    fn sq(index: u8) -> Square {
        Square::new(index).unwrap()
    }

    #[test]
    fn iterates_in_square_order() {
        let bb: BitBoard = [sq(8), sq(0), sq(4)].into_iter().collect();
        assert_eq!(bb.len(), 3);
        assert_eq!(bb.iter().collect::<Vec<_>>(), vec![sq(0), sq(4), sq(8)]);
        assert_eq!(bb.iter().len(), 3);
    }

    #[test]
    fn complement_is_bounded() {
        assert_eq!(!BitBoard::EMPTY, BitBoard::FULL);
        assert_eq!(!BitBoard::FULL, BitBoard::EMPTY);
        assert_eq!((!sq(4).bitboard()).len(), 8);
        assert!(ALL_SQUARES.into_iter().collect::<BitBoard>().is_full());
    }

    #[test]
    fn subset() {
        let row: BitBoard = [sq(0), sq(1), sq(2)].into_iter().collect();
        let more = row | sq(5).bitboard();
        assert!(row.is_subset(more));
        assert!(more.is_superset(row));
        assert!(!more.is_subset(row));
        assert_eq!(more - row, sq(5).bitboard());
        assert!(row.has(sq(1)));
        assert!(!row.has(sq(5)));
    }
}
