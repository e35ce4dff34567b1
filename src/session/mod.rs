//! The session state machine.
//!
//! A [`Session`] is a plain value. [`Session::apply`] takes the current
//! session and one [`Signal`] and returns the next session together with the
//! timer commands the runtime has to execute. Nothing in here touches a
//! clock, a terminal or a random source directly.
//!
//! ```text
//! Landing -> Calibrating -> Grass -> Introspection -> Validation
//!    ^                                                    |
//!    +------------------------- reset --------------------+
//! ```

pub mod calibration;
pub mod content;
pub mod grass;
pub mod picker;
pub mod timer;

use tracing::{info, trace};

use crate::config::{CalibrationConfig, GrassConfig};
use calibration::{Calibration, TickOutcome};
use grass::{CountdownOutcome, Grass};
use picker::{pick_from, Picker};
use timer::{Cadence, TimerCommand, TimerKind, TimerSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Landing,
    Calibrating,
    Grass,
    Introspection,
    Validation,
}

/// Input capability class, fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceProfile {
    Touch,
    Pointer,
}

impl DeviceProfile {
    /// A coarse pointer means touch. Unknown capability falls back to pointer.
    pub fn from_coarse_pointer(coarse: Option<bool>) -> Self {
        match coarse {
            Some(true) => DeviceProfile::Touch,
            Some(false) | None => DeviceProfile::Pointer,
        }
    }
}

/// Everything the environment can tell the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Begin,
    Submit,
    Reset,
    TextChanged(String),
    FocusGained,
    FocusLost,
    PointerMoved,
    PointerEntered,
    PointerLeft,
    TouchStarted,
    TouchEnded,
    Timer { kind: TimerKind, epoch: u64 },
}

#[derive(Debug, Clone, PartialEq)]
enum Stage {
    Landing,
    Calibrating(Calibration),
    Grass(Grass),
    Introspection,
    Validation,
}

/// Per-screen display data. The render layer draws this and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Landing,
    Calibrating { text: &'static str, progress: f64 },
    Grass {
        message: &'static str,
        seconds_left: u32,
        /// Whether the next countdown tick would count.
        counting: bool,
    },
    Introspection { prompt: &'static str, input: &'a str },
    Validation { response: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    profile: DeviceProfile,
    calibration_cfg: CalibrationConfig,
    grass_cfg: GrassConfig,
    stage: Stage,
    epoch: u64,
    window_focused: bool,
    prompt: Option<&'static str>,
    response: Option<&'static str>,
    input_text: String,
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub session: Session,
    pub commands: Vec<TimerCommand>,
}

impl Session {
    pub fn new(
        profile: DeviceProfile,
        calibration_cfg: CalibrationConfig,
        grass_cfg: GrassConfig,
    ) -> Self {
        Self {
            profile,
            calibration_cfg,
            grass_cfg,
            stage: Stage::Landing,
            epoch: 0,
            window_focused: true,
            prompt: None,
            response: None,
            input_text: String::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        match self.stage {
            Stage::Landing => Screen::Landing,
            Stage::Calibrating(_) => Screen::Calibrating,
            Stage::Grass(_) => Screen::Grass,
            Stage::Introspection => Screen::Introspection,
            Stage::Validation => Screen::Validation,
        }
    }

    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }

    /// Bumped on every screen entry. Timers armed under an older epoch are stale.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn prompt(&self) -> Option<&'static str> {
        self.prompt
    }

    pub fn response(&self) -> Option<&'static str> {
        self.response
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn calibration(&self) -> Option<&Calibration> {
        match &self.stage {
            Stage::Calibrating(cal) => Some(cal),
            _ => None,
        }
    }

    pub fn grass(&self) -> Option<&Grass> {
        match &self.stage {
            Stage::Grass(grass) => Some(grass),
            _ => None,
        }
    }

    /// Countdown start for this session's device.
    pub fn grass_seconds(&self) -> u32 {
        match self.profile {
            DeviceProfile::Touch => self.grass_cfg.touch_seconds,
            DeviceProfile::Pointer => self.grass_cfg.pointer_seconds,
        }
    }

    pub fn view(&self) -> View<'_> {
        match &self.stage {
            Stage::Landing => View::Landing,
            Stage::Calibrating(cal) => View::Calibrating {
                text: cal.text(),
                progress: cal.progress(),
            },
            Stage::Grass(grass) => View::Grass {
                message: grass.message().text(),
                seconds_left: grass.remaining(),
                counting: grass.is_valid(),
            },
            Stage::Introspection => View::Introspection {
                prompt: self.prompt.unwrap_or_default(),
                input: &self.input_text,
            },
            Stage::Validation => View::Validation {
                response: self.response.unwrap_or_default(),
            },
        }
    }

    pub fn apply(&self, signal: Signal, picker: &mut dyn Picker) -> Step {
        let mut session = self.clone();
        let mut commands = Vec::new();
        session.dispatch(signal, picker, &mut commands);
        Step { session, commands }
    }

    fn dispatch(&mut self, signal: Signal, picker: &mut dyn Picker, out: &mut Vec<TimerCommand>) {
        match signal {
            Signal::Begin => {
                if self.screen() == Screen::Landing {
                    self.enter(Stage::Calibrating(Calibration::new()), out);
                }
            }
            Signal::Submit => {
                if self.screen() == Screen::Introspection {
                    self.response = Some(pick_from(picker, content::RESPONSES));
                    self.enter(Stage::Validation, out);
                }
            }
            Signal::Reset => {
                if self.screen() == Screen::Validation {
                    info!(from = ?Screen::Validation, "session reset");
                    out.push(TimerCommand::ReleaseAll);
                    let window_focused = self.window_focused;
                    let epoch = self.epoch + 1;
                    *self = Session::new(self.profile, self.calibration_cfg, self.grass_cfg);
                    self.epoch = epoch;
                    self.window_focused = window_focused;
                }
            }
            Signal::TextChanged(text) => {
                if self.screen() == Screen::Introspection {
                    self.input_text = text;
                }
            }
            Signal::FocusGained => self.window_focus(true),
            Signal::FocusLost => self.window_focus(false),
            Signal::PointerMoved => {
                let threshold = self.grass_cfg.movement_threshold;
                self.with_grass(|grass| grass.pointer_moved(threshold));
            }
            Signal::PointerEntered => self.with_grass(|grass| grass.pointer_over(true)),
            Signal::PointerLeft => self.with_grass(|grass| grass.pointer_over(false)),
            Signal::TouchStarted => self.with_grass(|grass| grass.touch(true)),
            Signal::TouchEnded => self.with_grass(|grass| grass.touch(false)),
            Signal::Timer { kind, epoch } => self.on_timer(kind, epoch, picker, out),
        }
    }

    fn window_focus(&mut self, focused: bool) {
        self.window_focused = focused;
        self.with_grass(|grass| grass.focus_changed(focused));
    }

    fn with_grass(&mut self, f: impl FnOnce(&mut Grass)) {
        if let Stage::Grass(grass) = &mut self.stage {
            f(grass);
        }
    }

    fn on_timer(
        &mut self,
        kind: TimerKind,
        epoch: u64,
        picker: &mut dyn Picker,
        out: &mut Vec<TimerCommand>,
    ) {
        if epoch != self.epoch || kind.owner() != self.screen() {
            trace!(?kind, epoch, current = self.epoch, "stale timer ignored");
            return;
        }

        match kind {
            TimerKind::CalibrationTick => {
                let cfg = self.calibration_cfg;
                if let Stage::Calibrating(cal) = &mut self.stage {
                    if !cal.is_finished() && cal.tick(&cfg) == TickOutcome::Finished {
                        out.push(TimerCommand::Cancel(TimerKind::CalibrationTick));
                        out.push(TimerCommand::Arm(TimerSpec {
                            kind: TimerKind::CalibrationSettle,
                            cadence: Cadence::Once(cfg.settle()),
                            epoch: self.epoch,
                        }));
                    }
                }
            }
            TimerKind::CalibrationSettle => {
                let grass = Grass::new(self.profile, self.grass_seconds(), self.window_focused);
                self.enter(Stage::Grass(grass), out);
            }
            TimerKind::MovementWindow => {
                self.with_grass(Grass::window_elapsed);
            }
            TimerKind::GrassCountdown => {
                let expired = match &mut self.stage {
                    Stage::Grass(grass) => grass.countdown_tick() == CountdownOutcome::Expired,
                    _ => false,
                };
                if expired {
                    out.push(TimerCommand::Cancel(TimerKind::GrassCountdown));
                    self.prompt = Some(pick_from(picker, content::PROMPTS));
                    self.enter(Stage::Introspection, out);
                }
            }
        }
    }

    /// Leave the current screen, releasing its timers, then arm the next one's.
    fn enter(&mut self, stage: Stage, out: &mut Vec<TimerCommand>) {
        let from = self.screen();
        out.push(TimerCommand::ReleaseAll);
        self.stage = stage;
        self.epoch += 1;
        info!(?from, to = ?self.screen(), epoch = self.epoch, "screen transition");

        let epoch = self.epoch;
        match self.screen() {
            Screen::Calibrating => out.push(TimerCommand::Arm(TimerSpec {
                kind: TimerKind::CalibrationTick,
                cadence: Cadence::Every(self.calibration_cfg.tick()),
                epoch,
            })),
            Screen::Grass => {
                out.push(TimerCommand::Arm(TimerSpec {
                    kind: TimerKind::MovementWindow,
                    cadence: Cadence::Every(self.grass_cfg.movement_window()),
                    epoch,
                }));
                out.push(TimerCommand::Arm(TimerSpec {
                    kind: TimerKind::GrassCountdown,
                    cadence: Cadence::Every(self.grass_cfg.countdown_tick()),
                    epoch,
                }));
            }
            Screen::Landing | Screen::Introspection | Screen::Validation => {}
        }
    }
}
