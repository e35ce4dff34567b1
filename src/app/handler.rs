use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::session::picker::Picker;
use crate::session::{Screen, Signal};
use crate::ui::layout::compute_layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// Translate one runtime event into session signals, apply them, and hand
/// back whatever the main loop has to do about it.
pub fn handle_event(state: &mut AppState, event: AppEvent, picker: &mut dyn Picker) -> Vec<Action> {
    let mut actions = Vec::new();
    let signals = match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, &mut actions),
        AppEvent::Timer { kind, epoch } => vec![Signal::Timer { kind, epoch }],
    };

    for signal in signals {
        apply(state, signal, picker, &mut actions);
    }
    actions
}

fn apply(state: &mut AppState, signal: Signal, picker: &mut dyn Picker, actions: &mut Vec<Action>) {
    let step = state.session.apply(signal, picker);
    let screen_changed = step.session.screen() != state.screen();
    if step.session.view() != state.session.view() {
        state.dirty = true;
    }
    state.session = step.session;
    if screen_changed {
        state.screen_changed();
    }
    actions.extend(step.commands.into_iter().map(Action::Timer));
}

fn handle_terminal(state: &mut AppState, event: CEvent, actions: &mut Vec<Action>) -> Vec<Signal> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key, actions)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::FocusGained => vec![Signal::FocusGained],
        CEvent::FocusLost => vec![Signal::FocusLost],
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            // The grass may have moved out from under a still pointer.
            match state.pointer {
                Some(pos) => {
                    let over_grass = compute_layout(state.viewport, state.screen())
                        .art
                        .contains(pos);
                    hover_change(state, over_grass).into_iter().collect()
                }
                None => vec![],
            }
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, actions: &mut Vec<Action>) -> Vec<Signal> {
    // Global keybindings
    if (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        || key.code == KeyCode::Esc
    {
        actions.push(Action::Quit);
        return vec![];
    }

    match state.screen() {
        Screen::Landing => match key.code {
            KeyCode::Enter | KeyCode::Char('b') => vec![Signal::Begin],
            KeyCode::Char('q') => {
                actions.push(Action::Quit);
                vec![]
            }
            _ => vec![],
        },
        Screen::Introspection => handle_input_key(state, key),
        Screen::Validation => match key.code {
            KeyCode::Enter => vec![Signal::Reset],
            KeyCode::Char('q') => {
                actions.push(Action::Quit);
                vec![]
            }
            _ => vec![],
        },
        Screen::Calibrating | Screen::Grass => vec![],
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Signal> {
    let before = state.input.text.len();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => return vec![Signal::Submit],
        KeyCode::Char('w') if ctrl => state.input.delete_word_back(),
        KeyCode::Char('a') if ctrl => state.input.move_home(),
        KeyCode::Char('e') if ctrl => state.input.move_end(),
        KeyCode::Char(c) if !ctrl => state.input.insert_char(c),
        KeyCode::Backspace => state.input.delete_back(),
        KeyCode::Delete => state.input.delete_forward(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        _ => {}
    }

    if state.input.text.len() != before {
        vec![Signal::TextChanged(state.input.text.clone())]
    } else {
        vec![]
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Signal> {
    let layout = compute_layout(state.viewport, state.screen());
    let pos = Position::new(mouse.column, mouse.row);
    let over_grass = layout.art.contains(pos);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            state.pointer = Some(pos);
            let mut signals = vec![Signal::PointerMoved];
            signals.extend(hover_change(state, over_grass));
            signals
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if over_grass {
                state.touch_active = true;
                return vec![Signal::TouchStarted];
            }
            if layout.button.contains(pos) {
                return match state.screen() {
                    Screen::Landing => vec![Signal::Begin],
                    Screen::Introspection => vec![Signal::Submit],
                    Screen::Validation => vec![Signal::Reset],
                    Screen::Calibrating | Screen::Grass => vec![],
                };
            }
            vec![]
        }
        // Releasing anywhere ends the touch, like a finger lifting off.
        MouseEventKind::Up(MouseButton::Left) if state.touch_active => {
            state.touch_active = false;
            vec![Signal::TouchEnded]
        }
        _ => vec![],
    }
}

/// Updates the hover latch and reports the crossing, if any.
fn hover_change(state: &mut AppState, over_grass: bool) -> Option<Signal> {
    if over_grass == state.pointer_over_grass {
        return None;
    }
    state.pointer_over_grass = over_grass;
    Some(if over_grass {
        Signal::PointerEntered
    } else {
        Signal::PointerLeft
    })
}
