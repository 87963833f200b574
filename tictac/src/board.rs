use std::fmt::Display;

use enum_map::EnumMap;
use itertools::Itertools;
use smallvec::SmallVec;
use ttt_types::{BitBoard, Cell, Square, Symbol, ALL_SQUARES, ALL_SYMBOLS, NUM_SQUARES};

use crate::win::{detect_win, WinLine};

/// Placement of both symbols on the grid.
///
/// Boards are small `Copy` values; playing onto one yields a new board and
/// leaves the original untouched, which is what lets every snapshot in a
/// game's history stay inspectable.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    marks: EnumMap<Symbol, BitBoard>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a row-major cell array.
    #[must_use]
    pub fn from_cells(cells: [Cell; NUM_SQUARES]) -> Self {
        let mut board = Self::new();
        for (square, cell) in ALL_SQUARES.into_iter().zip(cells) {
            if let Some(symbol) = cell.symbol() {
                board.xor(square, symbol);
            }
        }
        board
    }

    /// Toggles the mark of `symbol` on `square`.
    /// Does not check the other symbol, so this can produce boards no game reaches.
    pub(crate) fn xor(&mut self, square: Square, symbol: Symbol) {
        self.marks[symbol] ^= square.bitboard();
    }

    /// Places `symbol` on `square`.
    /// This is a wrapper around xor with an assert that the square is empty
    pub fn set(&mut self, square: Square, symbol: Symbol) {
        assert!(
            self.is_empty(square),
            "{:?} {:?} {:?}",
            square,
            self.cell(square),
            symbol,
        );
        self.xor(square, symbol);
    }

    /// Copy of this board with `symbol` placed on `square`.
    #[must_use]
    pub fn with(mut self, square: Square, symbol: Symbol) -> Self {
        self.set(square, symbol);
        self
    }

    #[must_use]
    pub fn symbol_on(&self, square: Square) -> Option<Symbol> {
        ALL_SYMBOLS
            .into_iter()
            .find(|symbol| self.marks[*symbol].has(square))
    }

    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.symbol_on(square).into()
    }

    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        !self.occupied().has(square)
    }

    #[must_use]
    pub fn cells(&self) -> [Cell; NUM_SQUARES] {
        ALL_SQUARES.map(|square| self.cell(square))
    }

    #[must_use]
    #[inline(always)]
    pub fn marks(&self, symbol: Symbol) -> BitBoard {
        self.marks[symbol]
    }

    #[must_use]
    pub fn occupied(&self) -> BitBoard {
        self.marks[Symbol::X] | self.marks[Symbol::O]
    }

    #[must_use]
    pub fn num_filled(&self) -> usize {
        self.occupied().len()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    #[must_use]
    pub fn empty_squares(&self) -> SmallVec<Square, NUM_SQUARES> {
        (!self.occupied()).squares()
    }

    #[must_use]
    pub fn winner(&self) -> Option<WinLine> {
        detect_win(self)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .cells()
            .chunks(3)
            .map(|row| row.iter().join("|"))
            .join("\n-+-+-\n");
        write!(f, "{rows}")
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self
            .cells()
            .iter()
            .map(|cell| cell.symbol().map_or('.', Symbol::as_char))
            .collect::<String>();
        write!(f, "Board({cells})")
    }
}
