//! Three-in-a-row detection.

use tracing::instrument;
use ttt_types::{BitBoard, Square, Symbol, ALL_SYMBOLS};

use crate::board::Board;

const fn line(a: u8, b: u8, c: u8) -> [Square; 3] {
    match (Square::new(a), Square::new(b), Square::new(c)) {
        (Some(a), Some(b), Some(c)) => [a, b, c],
        _ => panic!("line squares must be on the grid"),
    }
}

/// The eight winning lines in scan order: rows, columns, then diagonals.
pub const LINES: [[Square; 3]; 8] = [
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    line(0, 4, 8),
    line(2, 4, 6),
];

const LINE_MASKS: [BitBoard; 8] = {
    let mut masks = [BitBoard::EMPTY; 8];
    let mut idx = 0;
    while idx < LINES.len() {
        let [a, b, c] = LINES[idx];
        masks[idx] = BitBoard(a.bitboard().0 | b.bitboard().0 | c.bitboard().0);
        idx += 1;
    }
    masks
};

/// A completed line together with the symbol that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine {
    pub symbol: Symbol,
    pub squares: [Square; 3],
}

impl WinLine {
    #[must_use]
    pub fn contains(&self, square: Square) -> bool {
        self.squares.contains(&square)
    }
}

/// Returns the first line of [`LINES`] held entirely by one symbol.
///
/// Total over any board, including ones with both symbols owning a line;
/// the earlier line in scan order wins then.
#[must_use]
#[instrument(level = "trace", ret)]
pub fn detect_win(board: &Board) -> Option<WinLine> {
    LINES
        .iter()
        .zip(LINE_MASKS)
        .find_map(|(squares, mask)| {
            ALL_SYMBOLS
                .into_iter()
                .find(|symbol| board.marks(*symbol).is_superset(mask))
                .map(|symbol| WinLine {
                    symbol,
                    squares: *squares,
                })
        })
}
