use crate::config::AppConfig;
use crate::session::{DeviceProfile, Screen, Session};
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

/// Line editor behind the journal prompt. The session only ever sees the
/// full text; the cursor is a terminal concern.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Display columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub input: InputState,
    /// Terminal size, used to hit-test mouse events against the layout.
    pub viewport: Rect,
    /// Last cell the mouse was reported at.
    pub pointer: Option<Position>,
    pub pointer_over_grass: bool,
    pub touch_active: bool,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, viewport: Rect) -> Self {
        let session = Self::fresh_session(&config);
        Self {
            config,
            session,
            input: InputState::new(),
            viewport,
            pointer: None,
            pointer_over_grass: false,
            touch_active: false,
            should_quit: false,
            dirty: true,
        }
    }

    /// The device capability is read once, here.
    fn fresh_session(config: &AppConfig) -> Session {
        let profile = DeviceProfile::from_coarse_pointer(config.device.coarse_pointer);
        Session::new(profile, config.calibration, config.grass)
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    /// Drop per-screen terminal state when the session moves on.
    pub fn screen_changed(&mut self) {
        self.pointer_over_grass = false;
        self.touch_active = false;
        self.input = InputState::new();
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let hint = match self.screen() {
            Screen::Landing => "Enter: begin",
            Screen::Calibrating => "Please wait",
            Screen::Grass => match self.session.profile() {
                DeviceProfile::Pointer => "Hover over the grass. Keep still.",
                DeviceProfile::Touch => "Press and hold the grass.",
            },
            Screen::Introspection => "Type, then Enter",
            Screen::Validation => "Enter: leave",
        };
        format!("{} | Esc: quit", hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing_handles_multibyte_chars() {
        let mut input = InputState::new();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "hélo");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "élo");
        input.move_right();
        assert_eq!(input.cursor, 'é'.len_utf8());
        input.move_end();
        assert_eq!(input.cursor, input.text.len());
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = InputState::new();
        for c in "touch some grass  ".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "touch some ");
        input.delete_word_back();
        assert_eq!(input.text, "touch ");
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let mut input = InputState::new();
        input.insert_char('草');
        input.insert_char('a');
        assert_eq!(input.cursor_column(), 3);
        input.move_left();
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_profile_comes_from_config() {
        let mut config = AppConfig::default();
        config.device.coarse_pointer = Some(true);
        let state = AppState::new(config, Rect::new(0, 0, 80, 24));
        assert_eq!(state.session.profile(), DeviceProfile::Touch);
        assert_eq!(state.session.grass_seconds(), 15);

        let state = AppState::new(AppConfig::default(), Rect::new(0, 0, 80, 24));
        assert_eq!(state.session.profile(), DeviceProfile::Pointer);
        assert_eq!(state.session.grass_seconds(), 45);
    }
}
