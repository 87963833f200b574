use tracing::{debug, instrument};
use ttt_types::{Square, Symbol};

use crate::{
    board::Board,
    error::{GameError, Rejection, Result},
    status::Status,
};

/// Board state after one ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    /// `None` only for the empty starting board.
    pub last_move: Option<Square>,
}

impl Snapshot {
    #[must_use]
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Symbol placed by the move that produced this snapshot.
    #[must_use]
    pub fn last_symbol(&self) -> Option<Symbol> {
        self.last_move
            .and_then(|square| self.board.symbol_on(square))
    }
}

/// Every snapshot of one game plus the position currently viewed.
///
/// The side to move is never stored; it follows from the parity of the
/// viewed position. Moving while viewing an earlier position discards the
/// snapshots after it.
#[derive(Debug, Clone)]
pub struct GameHistory {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            cursor: 0,
        }
    }

    /// Plays the side to move on `index` of the viewed board.
    ///
    /// # Errors
    /// [`GameError::InvalidCellSelection`] if `index` is off the board, the
    /// viewed board already has a winner, or the cell is taken. State is
    /// unchanged in that case.
    #[instrument(level = "debug", skip(self), fields(cursor = self.cursor))]
    pub fn apply_move(&mut self, index: usize) -> Result<Square> {
        let reject = |reason: Rejection| {
            debug!(%reason, "move rejected");
            GameError::InvalidCellSelection { index, reason }
        };
        let square = Square::try_from(index).map_err(|_| reject(Rejection::OutOfBounds))?;
        let current = self.current();
        if current.board.winner().is_some() {
            return Err(reject(Rejection::GameOver));
        }
        if !current.board.is_empty(square) {
            return Err(reject(Rejection::Occupied));
        }

        let symbol = self.side_to_move();
        let board = current.board.with(square, symbol);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(Snapshot {
            board,
            last_move: Some(square),
        });
        self.cursor = self.snapshots.len() - 1;
        debug!(%symbol, %square, len = self.snapshots.len(), "move applied");
        Ok(square)
    }

    /// Views the snapshot at `position` without touching the history.
    ///
    /// # Errors
    /// [`GameError::InvalidHistoryPosition`] if there is no such snapshot.
    #[instrument(level = "debug", skip(self))]
    pub fn jump_to(&mut self, position: usize) -> Result<()> {
        if position >= self.snapshots.len() {
            debug!("jump rejected");
            return Err(GameError::InvalidHistoryPosition {
                position,
                len: self.snapshots.len(),
            });
        }
        self.cursor = position;
        Ok(())
    }

    #[must_use]
    pub fn current_status(&self) -> Status {
        Status::of(&self.current().board, self.side_to_move())
    }

    /// Move list label for the snapshot at `position`, with one-indexed row
    /// and column.
    ///
    /// # Errors
    /// [`GameError::InvalidHistoryPosition`] if there is no such snapshot.
    pub fn describe_move(&self, position: usize) -> Result<String> {
        let snapshot = self
            .snapshot(position)
            .ok_or(GameError::InvalidHistoryPosition {
                position,
                len: self.snapshots.len(),
            })?;
        let Some(square) = snapshot.last_move else {
            return Ok("Go to game start".to_owned());
        };
        let symbol = snapshot
            .last_symbol()
            .unwrap_or_else(|| Symbol::to_move(position - 1));
        Ok(format!(
            "Go to move #{position} (row: {}, col: {}, val: {symbol})",
            square.row() + 1,
            square.col() + 1,
        ))
    }

    #[must_use]
    pub fn snapshot(&self, position: usize) -> Option<&Snapshot> {
        self.snapshots.get(position)
    }

    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    #[must_use]
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    #[must_use]
    #[inline(always)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least the starting board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Symbol {
        Symbol::to_move(self.cursor)
    }

    #[must_use]
    pub fn is_at_tip(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }
}
