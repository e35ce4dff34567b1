//! Timer commands emitted by the state machine.
//!
//! The session never owns a clock. Each transition returns the commands the
//! runtime has to carry out, and every armed timer is stamped with the epoch
//! of the screen that armed it.

use std::time::Duration;

use super::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Drives the fake progress bar.
    CalibrationTick,
    /// One-shot pause on the 100% frame before the grass screen.
    CalibrationSettle,
    /// Resets the pointer-movement counter.
    MovementWindow,
    /// The grass countdown.
    GrassCountdown,
}

impl TimerKind {
    /// The screen that owns timers of this kind.
    pub fn owner(self) -> Screen {
        match self {
            TimerKind::CalibrationTick | TimerKind::CalibrationSettle => Screen::Calibrating,
            TimerKind::MovementWindow | TimerKind::GrassCountdown => Screen::Grass,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Every(Duration),
    Once(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    pub kind: TimerKind,
    pub cadence: Cadence,
    pub epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerCommand {
    Arm(TimerSpec),
    Cancel(TimerKind),
    /// Drop every timer owned by the screen being left.
    ReleaseAll,
}
