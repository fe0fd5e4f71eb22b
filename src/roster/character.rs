//! Playable characters and their persistent resources

use serde::{Deserialize, Serialize};

use crate::core::types::clamp;

/// Combat role tag shown next to a character's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Tank,
    Offense,
    Control,
    Agility,
    Support,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Offense => "Offense",
            Role::Control => "Control",
            Role::Agility => "Agility",
            Role::Support => "Support",
        }
    }
}

/// Static definition of a roster slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub max_hp: f32,
}

impl CharacterDef {
    pub fn new(id: &str, name: &str, role: Role, max_hp: f32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role,
            max_hp,
        }
    }
}

/// The prototype's five selectable characters
pub fn default_roster() -> Vec<CharacterDef> {
    vec![
        CharacterDef::new("shrek", "Shrek", Role::Tank, 200.0),
        CharacterDef::new("freeza", "Freeza", Role::Offense, 140.0),
        CharacterDef::new("lula", "Lula", Role::Control, 120.0),
        CharacterDef::new("choque", "Super", Role::Agility, 130.0),
        CharacterDef::new("bmo", "BMO", Role::Support, 100.0),
    ]
}

/// A roster slot with live resources.
///
/// Every mutation clamps: `0 <= hp <= max_hp`, `0 <= corruption <= corruption_limit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub role: Role,
    hp: f32,
    max_hp: f32,
    corruption: f32,
    corruption_limit: f32,
}

impl Character {
    /// Full health, zero corruption
    pub fn from_def(def: &CharacterDef, corruption_limit: f32) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            role: def.role,
            hp: def.max_hp,
            max_hp: def.max_hp,
            corruption: 0.0,
            corruption_limit,
        }
    }

    pub fn hp(&self) -> f32 {
        self.hp
    }

    pub fn max_hp(&self) -> f32 {
        self.max_hp
    }

    pub fn corruption(&self) -> f32 {
        self.corruption
    }

    pub fn corruption_limit(&self) -> f32 {
        self.corruption_limit
    }

    pub fn set_hp(&mut self, hp: f32) {
        self.hp = clamp(hp, 0.0, self.max_hp);
    }

    pub fn adjust_hp(&mut self, delta: f32) {
        self.set_hp(self.hp + delta);
    }

    pub fn set_corruption(&mut self, corruption: f32) {
        self.corruption = clamp(corruption, 0.0, self.corruption_limit);
    }

    pub fn adjust_corruption(&mut self, delta: f32) {
        self.set_corruption(self.corruption + delta);
    }

    /// Still selectable; only flagged
    pub fn is_incapacitated(&self) -> bool {
        self.hp <= 0.0
    }

    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp > 0.0 {
            clamp(self.hp / self.max_hp, 0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn corruption_fraction(&self) -> f32 {
        if self.corruption_limit > 0.0 {
            clamp(self.corruption / self.corruption_limit, 0.0, 1.0)
        } else {
            0.0
        }
    }
}
