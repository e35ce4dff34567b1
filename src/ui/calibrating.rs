use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};

pub fn render(frame: &mut Frame, layout: &AppLayout, text: &str, progress: f64) {
    let message = Paragraph::new(Span::styled(text, Theme::text())).centered();
    frame.render_widget(message, layout.text);

    let pct = progress.clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .gauge_style(Theme::gauge())
        .ratio(pct / 100.0)
        .label(format!("{}%", pct.floor() as u32));
    frame.render_widget(gauge, layout.detail);
}
