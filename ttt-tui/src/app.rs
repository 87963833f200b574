use std::{io, ops::ControlFlow, time::Duration};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Paragraph},
    DefaultTerminal, Frame,
};
use tictac::{GameHistory, Status};
use tracing::{debug, info};
use ttt_types::Square;

use crate::{
    board::BoardView,
    config::Config,
    moves::MoveList,
    popup::{centered, HelpPopup},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Board,
    Moves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Quit,
    Play(Square),
    JumpTo(usize),
    ToggleOrder,
    ToggleHelp,
    Reset,
}

pub struct App {
    history: GameHistory,
    focus: Focus,
    show_help: bool,
    board_view: BoardView,
    move_list: MoveList,
    help: HelpPopup,
    tick_rate: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    pub fn new(config: &Config) -> Self {
        let history = GameHistory::new();
        let move_list = MoveList::new(&history, config.reverse_moves);
        let mut app = Self {
            history,
            focus: Focus::Board,
            show_help: false,
            board_view: BoardView::default(),
            move_list,
            help: HelpPopup,
            tick_rate: config.tick_rate(),
        };
        app.set_focus(Focus::Board);
        app
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(message) = self.update() {
                if self.apply(message).is_break() {
                    break;
                }
            }
        }
        Ok(())
    }

    pub fn update(&mut self) -> Option<Message> {
        if event::poll(self.tick_rate).ok()? {
            let event = event::read().ok()?;
            return self.handle_event(&event);
        }
        None
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Message> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if self.show_help {
            return self.help.update(event);
        }
        match key.code {
            KeyCode::Char('q') => return Some(Message::Quit),
            KeyCode::Char('s') => return Some(Message::ToggleOrder),
            KeyCode::Char('r') => return Some(Message::Reset),
            KeyCode::Char('?') => return Some(Message::ToggleHelp),
            KeyCode::Tab => {
                let next = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                self.set_focus(next);
                return None;
            }
            _ => {}
        }
        match self.focus {
            Focus::Board => self.board_view.update(event),
            Focus::Moves => self.move_list.update(event),
        }
    }

    /// Applies `message`; rejected moves and jumps leave the game untouched.
    pub fn apply(&mut self, message: Message) -> ControlFlow<()> {
        match message {
            Message::Quit => return ControlFlow::Break(()),
            Message::Play(square) => match self.history.apply_move(square.index()) {
                Ok(_) => self.on_state_change(),
                Err(e) => debug!(%e, "ignoring selection"),
            },
            Message::JumpTo(position) => match self.history.jump_to(position) {
                Ok(()) => self.on_state_change(),
                Err(e) => debug!(%e, "ignoring jump"),
            },
            Message::ToggleOrder => self.move_list.toggle_order(),
            Message::ToggleHelp => self.show_help = !self.show_help,
            Message::Reset => {
                info!(moves = self.history.len() - 1, "starting new game");
                self.history = GameHistory::new();
                self.on_state_change();
                self.set_focus(Focus::Board);
            }
        }
        ControlFlow::Continue(())
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.board_view.set_active(focus == Focus::Board);
        self.move_list.set_active(focus == Focus::Moves);
    }

    fn on_state_change(&mut self) {
        self.board_view.on_state_change(&self.history);
        self.move_list.on_state_change(&self.history);
        if let status @ (Status::Winner(_) | Status::Tie) = self.history.current_status() {
            if self.history.is_at_tip() {
                info!(%status, "game finished");
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let horizontal = Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]);
        let vertical = Layout::vertical([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Min(0),
        ]);
        let [left, moves] = horizontal.areas(frame.area());
        let [board, status, _] = vertical.areas(left);
        frame.render_widget(self.board_view.draw(), board);
        frame.render_widget(self.status_line(), status);
        frame.render_widget(self.move_list.draw(), moves);
        if self.show_help {
            let (width, height) = self.help.size();
            frame.render_widget(self.help.draw(), centered(frame.area(), width, height));
        }
    }

    fn status_line(&self) -> Paragraph<'static> {
        let status = self.history.current_status();
        let style = match status {
            Status::Winner(_) => Style::default().fg(Color::Yellow).bold(),
            Status::Tie => Style::default().bold(),
            Status::InProgress(_) => Style::default(),
        };
        Paragraph::new(status.to_string())
            .style(style)
            .block(Block::bordered().title("Status"))
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{
        backend::TestBackend,
        crossterm::event::{KeyEvent, KeyModifiers},
        Terminal,
    };
    use ttt_types::Symbol;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press(app: &mut App, code: KeyCode) -> ControlFlow<()> {
        match app.handle_event(&key(code)) {
            Some(message) => app.apply(message),
            None => ControlFlow::Continue(()),
        }
    }

    fn play(app: &mut App, moves: &[u8]) {
        for mv in moves {
            let square = Square::new(*mv).unwrap();
            assert!(app.apply(Message::Play(square)).is_continue());
        }
    }

    #[test]
    fn plays_with_keyboard() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        // Occupied square is ignored.
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history().len(), 3);
        assert_eq!(app.history().current_status(), Status::InProgress(Symbol::X));
    }

    #[test]
    fn jump_through_move_list() {
        let mut app = App::default();
        play(&mut app, &[0, 4, 8]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history().cursor(), 1);
        assert_eq!(app.history().len(), 4);

        // Playing from the past discards the later moves.
        press(&mut app, KeyCode::Tab);
        play(&mut app, &[2]);
        assert_eq!(app.history().len(), 3);
        assert_eq!(app.history().cursor(), 2);
    }

    #[test]
    fn invalid_messages_are_ignored() {
        let mut app = App::default();
        play(&mut app, &[0, 3, 1, 4, 2]);
        let before = app.history().snapshots().to_vec();
        play(&mut app, &[8]);
        assert!(app.apply(Message::JumpTo(42)).is_continue());
        assert_eq!(app.history().snapshots(), before.as_slice());
        assert_eq!(app.history().cursor(), 5);
    }

    #[test]
    fn reset_and_quit() {
        let mut app = App::default();
        play(&mut app, &[4]);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.history().len(), 1);
        assert!(press(&mut app, KeyCode::Char('q')).is_break());
    }

    #[test]
    fn help_swallows_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        assert!(press(&mut app, KeyCode::Char('q')).is_continue());
        assert!(!app.show_help);
        assert!(press(&mut app, KeyCode::Char('q')).is_break());
    }

    #[test]
    fn ignores_key_release() {
        let mut app = App::default();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(app.handle_event(&Event::Key(release)), None);
    }

    #[test]
    fn draws_status() {
        let mut app = App::default();
        play(&mut app, &[0, 4, 1, 3, 2]);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Go to move #5 (row: 1, col: 3, val: X)"));
    }
}
