//! Roster - the fixed set of selectable characters and the active slot

use serde::{Deserialize, Serialize};

use crate::roster::character::{Character, CharacterDef};

/// Emitted when the active slot actually changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchNotice {
    pub from: usize,
    pub to: usize,
}

/// Owns every character for the lifetime of the simulation.
///
/// Characters are never removed; hp and corruption persist across switches.
#[derive(Debug, Clone)]
pub struct Roster {
    characters: Vec<Character>,
    active: usize,
}

impl Roster {
    /// Build from definitions with slot 0 active
    pub fn from_defs(defs: &[CharacterDef], corruption_limit: f32) -> Self {
        Self {
            characters: defs
                .iter()
                .map(|def| Character::from_def(def, corruption_limit))
                .collect(),
            active: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The roster is never empty once validated, so the active slot always exists.
    pub fn active_character(&self) -> &Character {
        &self.characters[self.active]
    }

    pub fn active_character_mut(&mut self) -> &mut Character {
        &mut self.characters[self.active]
    }

    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn characters_mut(&mut self) -> &mut [Character] {
        &mut self.characters
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }

    /// Select a new active slot.
    ///
    /// Returns `None` (and changes nothing) when `index` is out of range or
    /// already active.
    pub fn switch_to(&mut self, index: usize) -> Option<SwitchNotice> {
        if index == self.active || index >= self.characters.len() {
            return None;
        }
        let notice = SwitchNotice { from: self.active, to: index };
        self.active = index;
        Some(notice)
    }

    /// Mean corruption across the roster as a fraction of the limit
    pub fn average_corruption_fraction(&self) -> f32 {
        if self.characters.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.characters.iter().map(|c| c.corruption_fraction()).sum();
        sum / self.characters.len() as f32
    }
}
