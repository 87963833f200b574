use ratatui::{
    crossterm::event::{Event, KeyCode},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Widget},
};
use tictac::GameHistory;
use tracing::warn;

use crate::app::Message;

/// Chronological move list; `reversed` only affects display and navigation order.
pub struct MoveList {
    labels: Vec<String>,
    current: usize,
    selected: usize,
    reversed: bool,
    active: bool,
}

impl MoveList {
    pub fn new(history: &GameHistory, reversed: bool) -> Self {
        let mut list = Self {
            labels: Vec::new(),
            current: 0,
            selected: 0,
            reversed,
            active: false,
        };
        list.on_state_change(history);
        list
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => self.step(true),
                KeyCode::Up | KeyCode::Char('k') => self.step(false),
                KeyCode::Home => self.selected = self.display_order().next().unwrap_or(0),
                KeyCode::End => self.selected = self.display_order().last().unwrap_or(0),
                KeyCode::Enter => {
                    return Some(Message::JumpTo(self.selected));
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, history: &GameHistory) {
        self.labels = (0..history.len())
            .filter_map(|position| match history.describe_move(position) {
                Ok(label) => Some(label),
                Err(e) => {
                    warn!(%e, "missing move label");
                    None
                }
            })
            .collect();
        self.current = history.cursor();
        self.selected = self.current;
    }

    pub fn toggle_order(&mut self) {
        self.reversed = !self.reversed;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Positions in the order they are listed on screen.
    fn display_order(&self) -> Box<dyn Iterator<Item = usize>> {
        if self.reversed {
            Box::new((0..self.labels.len()).rev())
        } else {
            Box::new(0..self.labels.len())
        }
    }

    // `down` follows screen order, which runs backwards in time when reversed.
    fn step(&mut self, down: bool) {
        let last = self.labels.len().saturating_sub(1);
        let forward = down != self.reversed;
        self.selected = if forward {
            (self.selected + 1).min(last)
        } else {
            self.selected.saturating_sub(1)
        };
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let title = if self.reversed {
            "Moves (newest first)"
        } else {
            "Moves (oldest first)"
        };
        let border = if self.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::new()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Line::raw(title).left_aligned());
        let items = self.display_order().map(|position| {
            let marker = if self.active && position == self.selected {
                '>'
            } else {
                ' '
            };
            let item = ListItem::new(format!("{marker}{}", self.labels[position]));
            if position == self.current {
                item.bold()
            } else {
                item
            }
        });
        List::new(items).block(block)
    }
}
