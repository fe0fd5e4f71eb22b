//! Discrete commands from the input layer

use serde::{Deserialize, Serialize};

/// A synchronous command applied between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Attack,
    UseSkill,
    /// Roster slot, zero-based
    SwitchTo(usize),
    TogglePause,
    SetPaused(bool),
}

impl Command {
    /// Map the prototype's key bindings: `Digit1`..`Digit9` switch,
    /// `KeyJ` attacks, `KeyK` uses the ability, `Escape` toggles pause.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "KeyJ" => Some(Command::Attack),
            "KeyK" => Some(Command::UseSkill),
            "Escape" => Some(Command::TogglePause),
            _ => {
                let digit: usize = code.strip_prefix("Digit")?.parse().ok()?;
                // Digit0 has no slot
                digit.checked_sub(1).map(Command::SwitchTo)
            }
        }
    }
}
