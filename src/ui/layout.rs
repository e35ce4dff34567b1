use crate::session::content::{BEGIN_LABEL, GRASS_ART, LEAVE_LABEL, SUBMIT_LABEL};
use crate::session::Screen;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::UnicodeWidthStr;

const COLUMN_WIDTH: u16 = 64;

/// Regions of the current screen. Rows a screen doesn't use stay empty.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub art: Rect,
    pub text: Rect,
    pub detail: Rect,
    pub input: Rect,
    pub button: Rect,
    pub status_bar: Rect,
}

/// Width and height of the grass picture in cells.
pub fn art_size() -> (u16, u16) {
    let width = GRASS_ART.lines().map(|l| l.width()).max().unwrap_or(0);
    let height = GRASS_ART.lines().count();
    (width as u16, height as u16)
}

pub fn compute_layout(area: Rect, screen: Screen) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::vertical([
        Constraint::Min(5),    // Main content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Centered column
    let column = Layout::horizontal([Constraint::Length(COLUMN_WIDTH.min(content.width))])
        .flex(Flex::Center)
        .split(content)[0];

    let rows = |heights: &[u16]| {
        Layout::vertical(heights.iter().map(|h| Constraint::Length(*h)))
            .flex(Flex::Center)
            .split(column)
    };

    let mut layout = AppLayout {
        status_bar,
        ..AppLayout::default()
    };

    match screen {
        Screen::Landing => {
            let r = rows(&[2, 1, 1]);
            layout.text = r[0];
            layout.button = centered(r[2], button_width(BEGIN_LABEL));
        }
        Screen::Calibrating => {
            let r = rows(&[1, 1, 1]);
            layout.text = r[0];
            layout.detail = r[2];
        }
        Screen::Grass => {
            let (art_w, art_h) = art_size();
            let r = rows(&[art_h + 2, 1, 1, 1]);
            layout.art = centered(r[0], art_w + 2);
            layout.text = r[2];
            layout.detail = r[3];
        }
        Screen::Introspection => {
            let r = rows(&[2, 3, 1, 1]);
            layout.text = r[0];
            layout.input = r[1];
            layout.button = centered(r[3], button_width(SUBMIT_LABEL));
        }
        Screen::Validation => {
            let r = rows(&[1, 1, 2, 1, 1]);
            layout.text = r[0];
            layout.detail = r[2];
            layout.button = centered(r[4], button_width(LEAVE_LABEL));
        }
    }

    layout
}

/// Buttons render as `[ label ]`.
pub fn button_width(label: &str) -> u16 {
    label.width() as u16 + 4
}

fn centered(row: Rect, width: u16) -> Rect {
    Layout::horizontal([Constraint::Length(width.min(row.width))])
        .flex(Flex::Center)
        .split(row)[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    #[test]
    fn test_status_bar_is_bottom_line() {
        let layout = compute_layout(SCREEN, Screen::Landing);
        assert_eq!(layout.status_bar, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn test_grass_art_is_centered_and_framed() {
        let (art_w, art_h) = art_size();
        let layout = compute_layout(SCREEN, Screen::Grass);
        assert_eq!(layout.art.width, art_w + 2);
        assert_eq!(layout.art.height, art_h + 2);
        let left = layout.art.x;
        let right = SCREEN.width - layout.art.right();
        assert!(left.abs_diff(right) <= 1);
        assert!(layout.art.bottom() <= layout.text.y);
    }

    #[test]
    fn test_only_grass_screen_has_art() {
        for screen in [
            Screen::Landing,
            Screen::Calibrating,
            Screen::Introspection,
            Screen::Validation,
        ] {
            let layout = compute_layout(SCREEN, screen);
            assert!(!layout.art.contains(Position::new(50, 10)));
            assert_eq!(layout.art.area(), 0);
        }
    }

    #[test]
    fn test_button_fits_its_label() {
        let layout = compute_layout(SCREEN, Screen::Landing);
        assert_eq!(layout.button.width, "Begin Healing".len() as u16 + 4);
        assert_eq!(layout.button.height, 1);
    }
}
