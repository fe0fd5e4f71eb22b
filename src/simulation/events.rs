//! Notable simulation events and a bounded history for display

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Seconds};

/// Something the log/sidebar layer may want to show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Construction finished
    Started { characters: usize },
    /// A melee swing connected
    EnemyHit { attacker: String, remaining_hp: f32 },
    /// An enemy was removed at hp <= 0
    EnemyDefeated { enemy: EntityId },
    /// A melee swing went off (hit or miss)
    AttackUsed { character: String, hits: usize },
    AbilityUsed { character: String, summary: String },
    CharacterSwitched { from: String, to: String },
    /// A character's hp reached 0; it stays on the roster
    CharacterIncapacitated { character: String },
    MapChanged { name: String },
    Paused,
    Resumed,
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Started { characters } => write!(
                f,
                "Prototype started. Pick characters with 1-{}. J attacks, K uses the ability.",
                characters
            ),
            SimEvent::EnemyHit { attacker, remaining_hp } => write!(
                f,
                "{} hit an enemy! Enemy HP: {}",
                attacker,
                remaining_hp.round()
            ),
            SimEvent::EnemyDefeated { .. } => write!(f, "Enemy defeated"),
            SimEvent::AttackUsed { character, hits } => {
                write!(f, "{} attacks ({} hit)", character, hits)
            }
            SimEvent::AbilityUsed { summary, .. } => write!(f, "{}", summary),
            SimEvent::CharacterSwitched { to, .. } => write!(f, "Switching to {}", to),
            SimEvent::CharacterIncapacitated { character } => {
                write!(f, "{} is incapacitated!", character)
            }
            SimEvent::MapChanged { name } => write!(f, "Entering {}", name),
            SimEvent::Paused => write!(f, "Game paused"),
            SimEvent::Resumed => write!(f, "Game resumed"),
        }
    }
}

/// An event stamped with the simulation time it happened at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedEvent {
    pub at: Seconds,
    pub event: SimEvent,
}

impl fmt::Display for LoggedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:>7.2}s] {}", self.at, self.event)
    }
}

/// Bounded event history, newest first
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LoggedEvent>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add an entry, dropping the oldest past capacity
    pub fn record(&mut self, entry: LoggedEvent) {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = LoggedEvent>) {
        for entry in entries {
            self.record(entry);
        }
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &LoggedEvent> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LoggedEvent> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t: f32, event: SimEvent) -> LoggedEvent {
        LoggedEvent { at: t, event }
    }

    #[test]
    fn test_newest_first() {
        let mut log = EventLog::new(10);
        log.record(at(1.0, SimEvent::Paused));
        log.record(at(2.0, SimEvent::Resumed));
        assert_eq!(log.latest().unwrap().event, SimEvent::Resumed);
        let times: Vec<f32> = log.iter().map(|e| e.at).collect();
        assert_eq!(times, vec![2.0, 1.0]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = EventLog::new(3);
        for i in 0..5 {
            log.record(at(i as f32, SimEvent::Paused));
        }
        assert_eq!(log.len(), 3);
        let times: Vec<f32> = log.iter().map(|e| e.at).collect();
        assert_eq!(times, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_messages() {
        let hit = SimEvent::EnemyHit { attacker: "Shrek".into(), remaining_hp: 29.6 };
        assert_eq!(hit.to_string(), "Shrek hit an enemy! Enemy HP: 30");

        let switched = SimEvent::CharacterSwitched { from: "Shrek".into(), to: "BMO".into() };
        assert_eq!(switched.to_string(), "Switching to BMO");

        let logged = at(1.5, SimEvent::Paused);
        assert_eq!(logged.to_string(), "[   1.50s] Game paused");
    }
}
