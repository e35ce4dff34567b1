use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const GRASS_GREEN: Color = Color::Rgb(86, 160, 70);
    pub const GRASS_DIM: Color = Color::Rgb(52, 92, 44);
    pub const ACCENT_TEAL: Color = Color::Rgb(94, 196, 182);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const TEXT_PRIMARY: Color = Color::Rgb(225, 225, 225);
    pub const TEXT_MUTED: Color = Color::Rgb(120, 120, 120);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 40, 40);

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border() -> Style {
        Style::default().fg(Theme::TEXT_MUTED)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Theme::TEXT_PRIMARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Theme::TEXT_MUTED)
    }

    pub fn emphasis() -> Style {
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Theme::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED)
    }

    /// Grass while the countdown is allowed to run.
    pub fn grass_live() -> Style {
        Style::default().fg(Theme::GRASS_GREEN)
    }

    pub fn grass_idle() -> Style {
        Style::default().fg(Theme::GRASS_DIM)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(Theme::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Theme::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Theme::TEXT_PRIMARY).bg(Theme::BG_ELEVATED)
    }
}
