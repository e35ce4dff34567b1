//! The fake calibration progress bar.
//!
//! Progress is a pure function of a tick counter, so every run is identical
//! tick for tick. Once the bar passes the jump threshold it is thrown back
//! once; the message line keeps its own high-water mark and does not follow
//! the bar backwards.

use tracing::debug;

use super::content::{CALIBRATION_MESSAGES, CLOSE_ENOUGH, RECONSIDERING};
use crate::config::CalibrationConfig;

/// Highest value the bar shows before the final frame.
const DISPLAY_CAP: f64 = 99.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// The bar reached 100 after the jump. The tick timer must stop.
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    ticks: u32,
    high_water: Option<usize>,
    jumped: bool,
    finished: bool,
    progress: f64,
    text: &'static str,
}

impl Calibration {
    pub fn new() -> Self {
        Self {
            ticks: 0,
            high_water: None,
            jumped: false,
            finished: false,
            progress: 0.0,
            text: CALIBRATION_MESSAGES[0],
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Index of the furthest calibration message shown so far.
    pub fn message_index(&self) -> Option<usize> {
        self.high_water
    }

    pub fn has_jumped(&self) -> bool {
        self.jumped
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn total_ticks(cfg: &CalibrationConfig) -> u32 {
        (CALIBRATION_MESSAGES.len() as u32).saturating_mul(cfg.ticks_per_message)
    }

    pub fn tick(&mut self, cfg: &CalibrationConfig) -> TickOutcome {
        if self.finished {
            return TickOutcome::Finished;
        }
        self.ticks += 1;

        let index = (self.ticks / cfg.ticks_per_message) as usize;
        let advances = self.high_water.is_none_or(|hw| index > hw);
        if advances && index < CALIBRATION_MESSAGES.len() {
            self.high_water = Some(index);
            self.text = CALIBRATION_MESSAGES[index];
        }

        let total = Self::total_ticks(cfg);
        if percent(self.ticks, total) > cfg.jump_threshold_pct && !self.jumped {
            self.jumped = true;
            self.text = RECONSIDERING;
            self.ticks = (cfg.rewind_fraction * f64::from(total)).floor() as u32;
            debug!(rewound_to = self.ticks, "calibration jump");
        }

        let target = percent(self.ticks, total);
        if target >= 100.0 && self.jumped {
            self.finished = true;
            self.progress = 100.0;
            self.text = CLOSE_ENOUGH;
            debug!("calibration complete");
            return TickOutcome::Finished;
        }

        self.progress = target.clamp(0.0, DISPLAY_CAP);
        TickOutcome::Running
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new()
    }
}

fn percent(ticks: u32, total: u32) -> f64 {
    f64::from(ticks) / f64::from(total) * 100.0
}
