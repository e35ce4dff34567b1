use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

const CHEVRON: &str = "❯ ";

pub fn render(frame: &mut Frame, area: Rect, input: &InputState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // The chevron stays put; only the text scrolls.
    let [chevron_area, text_area] = Layout::horizontal([
        Constraint::Length(CHEVRON.chars().count() as u16),
        Constraint::Min(0),
    ])
    .areas(inner);
    frame.render_widget(
        Span::styled(CHEVRON, Style::default().fg(Theme::ACCENT_TEAL)),
        chevron_area,
    );
    if text_area.width == 0 {
        return;
    }

    // Keep the cursor inside the box by scrolling long answers horizontally.
    let room = text_area.width - 1;
    let cursor = u16::try_from(input.cursor_column()).unwrap_or(u16::MAX);
    let scroll = cursor.saturating_sub(room);

    let text = Paragraph::new(Span::styled(input.text.as_str(), Theme::input_text()))
        .scroll((0, scroll));
    frame.render_widget(text, text_area);

    let cursor_x = text_area.x + (cursor - scroll);
    frame.set_cursor_position((cursor_x.min(text_area.right() - 1), text_area.y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    const BOX: Rect = Rect {
        x: 18,
        y: 10,
        width: 64,
        height: 3,
    };

    fn draw(input: &InputState) -> (Terminal<TestBackend>, Position) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, BOX, input)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        (terminal, cursor)
    }

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new();
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (BOX.x..BOX.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_short_answer_puts_cursor_after_text() {
        let (terminal, cursor) = draw(&typed("grass"));
        assert!(row(&terminal, 11).contains("❯ grass"));
        // border + padding + chevron + five chars
        assert_eq!(cursor, Position::new(BOX.x + 2 + 2 + 5, 11));
    }

    #[test]
    fn test_long_answer_keeps_chevron_and_cursor_in_box() {
        let input = typed(&"a".repeat(70_000));
        let (terminal, cursor) = draw(&input);
        let line = row(&terminal, 11);
        assert!(line.contains("❯ aaaa"));
        assert_eq!(cursor.y, 11);
        assert!(cursor.x < BOX.right() - 1);
        assert!(cursor.x > BOX.x + 4);
    }

    #[test]
    fn test_scrolled_cursor_tracks_editing() {
        let mut input = typed(&"b".repeat(200));
        input.move_home();
        let (terminal, cursor) = draw(&input);
        assert_eq!(cursor.x, BOX.x + 4);
        assert!(row(&terminal, 11).contains("❯ bbb"));
    }
}
