use std::fmt::Display;

use ttt_types::{Square, Symbol};

use crate::{board::Board, win::WinLine};

/// Outcome of the viewed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(WinLine),
    Tie,
    InProgress(Symbol),
}

impl Status {
    /// Status of `board` with `to_move` as the side to play if the game goes on.
    #[must_use]
    pub fn of(board: &Board, to_move: Symbol) -> Self {
        if let Some(win) = board.winner() {
            Status::Winner(win)
        } else if board.is_full() {
            Status::Tie
        } else {
            Status::InProgress(to_move)
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Status::Winner(win) => Some(win.symbol),
            _ => None,
        }
    }

    #[must_use]
    pub fn winning_squares(&self) -> Option<[Square; 3]> {
        match self {
            Status::Winner(win) => Some(win.squares),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress(_))
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(win) => write!(f, "Winner: {}", win.symbol),
            Status::Tie => write!(f, "Tie game!"),
            Status::InProgress(symbol) => write!(f, "Next player: {symbol}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::{board, sq};

    #[test]
    fn in_progress() {
        let status = Status::of(&board("X.. ... ..."), Symbol::O);
        assert_eq!(status, Status::InProgress(Symbol::O));
        assert!(!status.is_over());
        assert_eq!(status.winning_squares(), None);
        assert_eq!(status.to_string(), "Next player: O");
    }

    #[test]
    fn tie_needs_full_board() {
        let status = Status::of(&board("XOX XOO OXX"), Symbol::O);
        assert_eq!(status, Status::Tie);
        assert!(status.is_over());
        assert_eq!(status.to_string(), "Tie game!");
    }

    #[test]
    fn win_on_full_board_is_not_a_tie() {
        let status = Status::of(&board("XXX OOX OXO"), Symbol::O);
        assert_eq!(status.winner(), Some(Symbol::X));
        assert_eq!(status.winning_squares(), Some([sq(0), sq(1), sq(2)]));
        assert_eq!(status.to_string(), "Winner: X");
    }
}
