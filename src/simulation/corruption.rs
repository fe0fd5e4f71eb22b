//! Passive corruption penalty, applied to every character every tick

use serde::{Deserialize, Serialize};

use crate::core::types::Seconds;
use crate::roster::Roster;

/// Above this, hp drains continuously
pub const DECAY_THRESHOLD: f32 = 60.0;
/// Above this, a character sits in the critical tier
pub const CRITICAL_THRESHOLD: f32 = 90.0;
/// Hp lost per second while above `DECAY_THRESHOLD`
pub const DECAY_RATE: f32 = 6.0;

/// Severity bucket for a corruption value (both bounds strict)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorruptionTier {
    /// `corruption <= 60`
    Stable,
    /// `60 < corruption <= 90`: hp drains
    Decaying,
    /// `corruption > 90`: drains like `Decaying`; no further effect yet
    Critical,
}

pub fn corruption_tier(corruption: f32) -> CorruptionTier {
    if corruption > CRITICAL_THRESHOLD {
        CorruptionTier::Critical
    } else if corruption > DECAY_THRESHOLD {
        CorruptionTier::Decaying
    } else {
        CorruptionTier::Stable
    }
}

/// What one corruption pass changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorruptionReport {
    /// Roster slots whose hp hit 0 during this pass
    pub newly_incapacitated: Vec<usize>,
    /// Roster slots currently in the critical tier
    pub critical: Vec<usize>,
}

/// Drain hp of every over-threshold character by `DECAY_RATE * dt`
pub fn apply_corruption(roster: &mut Roster, dt: Seconds) -> CorruptionReport {
    let mut report = CorruptionReport::default();

    for (index, character) in roster.characters_mut().iter_mut().enumerate() {
        let tier = corruption_tier(character.corruption());
        if tier == CorruptionTier::Stable {
            continue;
        }

        let was_up = !character.is_incapacitated();
        character.adjust_hp(-DECAY_RATE * dt);
        if was_up && character.is_incapacitated() {
            report.newly_incapacitated.push(index);
        }

        if tier == CorruptionTier::Critical {
            // Extension point: the critical tier carries no extra effect yet.
            report.critical.push(index);
        }
    }

    report
}
