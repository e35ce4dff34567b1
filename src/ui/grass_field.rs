use crate::session::content::GRASS_ART;
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// The grass turns bright while the countdown is actually running.
pub fn render(frame: &mut Frame, layout: &AppLayout, message: &str, seconds: u32, counting: bool) {
    let (grass_style, message_style) = if counting {
        (Theme::grass_live(), Theme::text())
    } else {
        (Theme::grass_idle(), Theme::warning())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let art = Paragraph::new(GRASS_ART.trim_end_matches('\n'))
        .style(grass_style)
        .block(block);
    frame.render_widget(art, layout.art);

    frame.render_widget(
        Paragraph::new(Span::styled(message, message_style)).centered(),
        layout.text,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{}s", seconds), Theme::emphasis())).centered(),
        layout.detail,
    );
}
