//! Timer-driven replay of a step log as an explicit state machine.
//!
//! `start` installs a log and shows its first step, each `tick` advances one
//! step, and `reset` cancels. Timing is the driver's business; the machine only
//! tracks where the replay is.

use crate::algorithm::{Step, StepLog};

/// Where a replay currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    /// Nothing loaded
    Idle,
    /// Showing step `index`, more steps pending
    Running { index: usize },
    /// Showing the last step
    Finished,
}

/// A single replay slot. Starting a new run replaces the active one.
#[derive(Debug, Clone)]
pub struct Replay {
    log: StepLog,
    state: ReplayState,
}

impl Replay {
    pub fn new() -> Self {
        Self {
            log: StepLog::default(),
            state: ReplayState::Idle,
        }
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ReplayState::Running { .. })
    }

    pub fn log(&self) -> &StepLog {
        &self.log
    }

    /// Loads `log` and shows its first step. An active replay is cancelled and
    /// its position discarded.
    pub fn start(&mut self, log: StepLog) -> Option<&Step> {
        if let ReplayState::Running { index } = self.state {
            log::debug!("cancelling replay at step {}/{}", index + 1, self.log.len());
        }

        self.state = match log.len() {
            0 => ReplayState::Idle,
            1 => ReplayState::Finished,
            _ => ReplayState::Running { index: 0 },
        };
        self.log = log;
        self.current_step()
    }

    /// Advances one step. Returns the newly shown step, or `None` when nothing
    /// is running.
    pub fn tick(&mut self) -> Option<&Step> {
        let ReplayState::Running { index } = self.state else {
            return None;
        };

        let next = index + 1;
        self.state = if next + 1 >= self.log.len() {
            ReplayState::Finished
        } else {
            ReplayState::Running { index: next }
        };
        self.current_step()
    }

    /// Stops the replay and drops the loaded log
    pub fn reset(&mut self) {
        self.log = StepLog::default();
        self.state = ReplayState::Idle;
    }

    fn index(&self) -> Option<usize> {
        match self.state {
            ReplayState::Idle => None,
            ReplayState::Running { index } => Some(index),
            ReplayState::Finished => self.log.len().checked_sub(1),
        }
    }

    /// The step on display
    pub fn current_step(&self) -> Option<&Step> {
        self.index().and_then(|index| self.log.get(index))
    }

    /// 1-based position and total, as in "Step 3 / 12"
    pub fn position(&self) -> Option<(usize, usize)> {
        self.index().map(|index| (index + 1, self.log.len()))
    }
}

impl Default for Replay {
    fn default() -> Self {
        Self::new()
    }
}
