use crate::app::state::AppState;
use crate::session::DeviceProfile;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status_line());

    let device = match state.session.profile() {
        DeviceProfile::Pointer => "POINTER",
        DeviceProfile::Touch => "TOUCH",
    };
    let indicator = format!(" [{}] ", device);

    // Pad to fill remaining space
    let remaining = (area.width as usize).saturating_sub(status.width() + indicator.width());
    let line = Line::from(vec![
        Span::styled(status, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(
            indicator,
            Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
