//! Running / Paused state machine

use serde::{Deserialize, Serialize};

/// Whether `tick` advances anything.
///
/// Paused suspends the whole per-tick pipeline: no time accrues, nothing
/// moves, nothing spawns, no corruption decay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            RunState::Paused
        } else {
            RunState::Running
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}
