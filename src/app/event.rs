use crossterm::event::Event as CrosstermEvent;

use crate::session::timer::TimerKind;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A session timer fired. `epoch` is the screen epoch it was armed under.
    Timer { kind: TimerKind, epoch: u64 },
}
