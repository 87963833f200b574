use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use tictac::{Board, GameHistory};
use ttt_types::{Square, ALL_SQUARES, BOARD_WIDTH};

use crate::app::Message;

const CELL_WIDTH: usize = 3;

pub struct BoardView {
    board: Board,
    winning: Option<[Square; 3]>,
    last_move: Option<Square>,
    focused: Square,
    active: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            winning: None,
            last_move: None,
            focused: Square::default(),
            active: true,
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.focused = self.focused.step(0, -1),
                KeyCode::Right | KeyCode::Char('l') => self.focused = self.focused.step(0, 1),
                KeyCode::Up | KeyCode::Char('k') => self.focused = self.focused.step(-1, 0),
                KeyCode::Down | KeyCode::Char('j') => self.focused = self.focused.step(1, 0),
                KeyCode::Char('n') => self.focus_next_empty(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    return Some(Message::Play(self.focused));
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, history: &GameHistory) {
        let snapshot = history.current();
        self.board = snapshot.board;
        self.last_move = snapshot.last_move;
        self.winning = history.current_status().winning_squares();
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn focused(&self) -> Square {
        self.focused
    }

    // Wraps around to the first empty square; stays put on a full board.
    fn focus_next_empty(&mut self) {
        let empty = self.board.empty_squares();
        if let Some(next) = empty
            .iter()
            .find(|sq| **sq > self.focused)
            .or_else(|| empty.first())
        {
            self.focused = *next;
        }
    }

    fn cell_style(&self, square: Square) -> Style {
        let mut style = Style::default();
        if self.winning.is_some_and(|line| line.contains(&square)) {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if self.last_move == Some(square) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if self.active && self.focused == square {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let separator = (0..BOARD_WIDTH).map(|_| "─".repeat(CELL_WIDTH)).join("┼");
        let mut lines = Vec::new();
        for (row, squares) in ALL_SQUARES.chunks(BOARD_WIDTH as usize).enumerate() {
            if row > 0 {
                lines.push(Line::raw(separator.clone()));
            }
            let mut spans = Vec::new();
            for (col, square) in squares.iter().enumerate() {
                if col > 0 {
                    spans.push(Span::raw("│"));
                }
                spans.push(Span::styled(
                    format!(" {} ", self.board.cell(*square)),
                    self.cell_style(*square),
                ));
            }
            lines.push(Line::from(spans));
        }
        let border = if self.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Paragraph::new(lines).block(Block::bordered().title("Board").border_style(border))
    }
}
