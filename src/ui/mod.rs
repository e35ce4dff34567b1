mod calibrating;
mod grass_field;
mod input_box;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::session::content::{
    BEGIN_LABEL, GROUNDED, LEAVE_LABEL, SESSION_COMPLETE, SUBMIT_LABEL, TAGLINE, TITLE,
};
use crate::session::View;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area(), state.screen());

    match state.session.view() {
        View::Landing => {
            let heading = Text::from(vec![
                Line::styled(TITLE, Theme::title()),
                Line::styled(TAGLINE, Theme::muted()),
            ]);
            frame.render_widget(Paragraph::new(heading).centered(), app_layout.text);
            render_button(frame, app_layout.button, BEGIN_LABEL);
        }
        View::Calibrating { text, progress } => {
            calibrating::render(frame, &app_layout, text, progress);
        }
        View::Grass {
            message,
            seconds_left,
            counting,
        } => {
            grass_field::render(frame, &app_layout, message, seconds_left, counting);
        }
        View::Introspection { prompt, .. } => {
            let prompt = Paragraph::new(Span::styled(prompt, Theme::emphasis()))
                .centered()
                .wrap(Wrap { trim: true });
            frame.render_widget(prompt, app_layout.text);
            input_box::render(frame, app_layout.input, &state.input);
            render_button(frame, app_layout.button, SUBMIT_LABEL);
        }
        View::Validation { response } => {
            frame.render_widget(
                Paragraph::new(Span::styled(response, Theme::emphasis())).centered(),
                app_layout.text,
            );
            let done = Text::from(vec![
                Line::styled(SESSION_COMPLETE, Theme::grass_live()),
                Line::styled(GROUNDED, Theme::muted()),
            ]);
            frame.render_widget(Paragraph::new(done).centered(), app_layout.detail);
            render_button(frame, app_layout.button, LEAVE_LABEL);
        }
    }

    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(format!("[ {} ]", label))
        .style(Theme::button())
        .centered();
    frame.render_widget(button, area);
}
