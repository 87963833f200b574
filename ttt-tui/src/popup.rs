use ratatui::{
    crossterm::event::Event,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::Message;

const KEY_BINDINGS: [(&str, &str); 10] = [
    ("arrows / hjkl", "move focus"),
    ("enter / space", "play focused square"),
    ("n", "focus next empty square"),
    ("enter (moves)", "jump to selected move"),
    ("home / end", "first / last listed move"),
    ("tab", "switch board / moves"),
    ("s", "toggle move order"),
    ("r", "new game"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

#[derive(Debug, Default)]
pub struct Popup<'a> {
    title: Line<'a>,
    content: Text<'a>,
    border_style: Style,
}

impl<'a> Popup<'a> {
    pub fn title(self, title: impl Into<Line<'a>>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }
    pub fn content(self, content: impl Into<Text<'a>>) -> Self {
        Self {
            content: content.into(),
            ..self
        }
    }
    pub fn border_style(self, border_style: Style) -> Self {
        Self {
            border_style,
            ..self
        }
    }
}

impl Widget for Popup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // ensure that all cells under the popup are cleared to avoid leaking content
        Clear.render(area, buf);
        let block = Block::new()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(self.border_style);
        Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .left_aligned()
            .block(block)
            .render(area, buf);
    }
}

/// Rectangle of at most `width` x `height` centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[derive(Default)]
pub struct HelpPopup;

impl HelpPopup {
    pub fn update(&mut self, event: &Event) -> Option<Message> {
        // Any key closes the help.
        if let Event::Key(_) = event {
            return Some(Message::ToggleHelp);
        }
        None
    }

    /// Size needed to show every binding without wrapping.
    pub fn size(&self) -> (u16, u16) {
        let keys = KEY_BINDINGS.iter().map(|(keys, _)| keys.len()).max();
        let actions = KEY_BINDINGS.iter().map(|(_, action)| action.len()).max();
        let widest = keys.unwrap_or(0) + 3 + actions.unwrap_or(0);
        (widest as u16 + 2, KEY_BINDINGS.len() as u16 + 2)
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let width = KEY_BINDINGS
            .iter()
            .map(|(keys, _)| keys.len())
            .max()
            .unwrap_or(0);
        let lines = KEY_BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("{keys:<width$}"), Style::default().bold()),
                    Span::raw("   "),
                    Span::raw(*action),
                ])
            })
            .collect::<Vec<_>>();
        Popup::default()
            .title("Keys")
            .content(lines)
            .border_style(Style::default().fg(Color::Cyan))
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::tests::rendered;

    #[test]
    fn centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 40, 40), area);
        let offset = Rect::new(10, 5, 4, 4);
        assert_eq!(centered(offset, 2, 2), Rect::new(11, 6, 2, 2));
    }

    #[test]
    fn any_key_closes() {
        let mut help = HelpPopup;
        let event = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(help.update(&event), Some(Message::ToggleHelp));
    }

    #[test]
    fn lists_every_binding() {
        let help = HelpPopup;
        let (width, height) = help.size();
        let (text, _) = rendered(help.draw(), width, height);
        for (keys, action) in KEY_BINDINGS {
            assert!(text.contains(keys), "{keys}");
            assert!(text.contains(action), "{action}");
        }
    }
}
