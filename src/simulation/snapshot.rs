//! Read-only views for renderers and UI

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Seconds, Vec2};
use crate::entity::Enemy;
use crate::roster::{Character, Role};
use crate::simulation::corruption::{corruption_tier, CorruptionTier};
use crate::world::{Bounds, MapDef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub hp: f32,
    pub max_hp: f32,
    pub corruption: f32,
    pub tier: CorruptionTier,
    pub incapacitated: bool,
    pub active: bool,
}

impl CharacterSnapshot {
    pub fn capture(character: &Character, active: bool) -> Self {
        Self {
            id: character.id.clone(),
            name: character.name.clone(),
            role: character.role,
            hp: character.hp(),
            max_hp: character.max_hp(),
            corruption: character.corruption(),
            tier: corruption_tier(character.corruption()),
            incapacitated: character.is_incapacitated(),
            active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    pub id: EntityId,
    pub position: Vec2,
    pub size: Vec2,
    pub hp: f32,
    pub health_fraction: f32,
}

impl From<&Enemy> for EnemySnapshot {
    fn from(enemy: &Enemy) -> Self {
        Self {
            id: enemy.id,
            position: enemy.body.position,
            size: enemy.body.size,
            hp: enemy.hp,
            health_fraction: enemy.health_fraction(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub index: usize,
    pub name: String,
    pub bounds: Bounds,
}

impl MapSnapshot {
    pub fn capture(index: usize, map: &MapDef) -> Self {
        Self {
            index,
            name: map.name.clone(),
            bounds: map.bounds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: EntityId,
    pub character_index: usize,
    pub position: Vec2,
    pub size: Vec2,
    pub attack_cooldown: Seconds,
}

/// Everything a frame of presentation needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub elapsed: Seconds,
    pub paused: bool,
    pub map: MapSnapshot,
    pub camera: Vec2,
    pub player: PlayerSnapshot,
    pub characters: Vec<CharacterSnapshot>,
    pub enemies: Vec<EnemySnapshot>,
    pub corruption_limit: f32,
    /// Mean corruption fraction across the roster (drives the mist overlay)
    pub average_corruption: f32,
}

impl SimSnapshot {
    pub fn to_json(&self) -> crate::core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One-line status: map name and enemy count
    pub fn status_line(&self) -> String {
        format!("Map: {} - Enemies: {}", self.map.name, self.enemies.len())
    }
}
