//! Runtime side of the session timers.
//!
//! Each armed timer is a tokio task that pushes [`AppEvent::Timer`] into the
//! main event channel. The scheduler owns the task handles for the current
//! screen only: `ReleaseAll` aborts all of them before the next screen arms
//! its own, and dropping the scheduler aborts whatever is left.

use std::collections::HashMap;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::trace;

use crate::app::event::AppEvent;
use crate::session::timer::{Cadence, TimerCommand, TimerKind, TimerSpec};

pub struct Scheduler {
    tx: UnboundedSender<AppEvent>,
    timers: HashMap<TimerKind, JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            tx,
            timers: HashMap::new(),
        }
    }

    pub fn execute(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Arm(spec) => self.arm(spec),
            TimerCommand::Cancel(kind) => self.cancel(kind),
            TimerCommand::ReleaseAll => self.release_all(),
        }
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.timers.get(&kind).is_some_and(|h| !h.is_finished())
    }

    fn arm(&mut self, spec: TimerSpec) {
        let TimerSpec {
            kind,
            cadence,
            epoch,
        } = spec;
        trace!(?kind, epoch, "arm timer");
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            match cadence {
                Cadence::Once(after) => {
                    time::sleep(after).await;
                    let _ = tx.send(AppEvent::Timer { kind, epoch });
                }
                Cadence::Every(period) => {
                    // First firing one period after arming, like setInterval.
                    let mut interval = time::interval_at(time::Instant::now() + period, period);
                    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    loop {
                        interval.tick().await;
                        if tx.send(AppEvent::Timer { kind, epoch }).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        if let Some(old) = self.timers.insert(kind, handle) {
            old.abort();
        }
    }

    fn cancel(&mut self, kind: TimerKind) {
        if let Some(handle) = self.timers.remove(&kind) {
            trace!(?kind, "cancel timer");
            handle.abort();
        }
    }

    fn release_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.release_all();
    }
}
