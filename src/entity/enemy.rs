//! Roaming enemies

use serde::{Deserialize, Serialize};

use crate::core::types::{clamp, EntityId, Vec2};
use crate::entity::body::Body;

pub const ENEMY_SIZE: Vec2 = Vec2 { x: 36.0, y: 48.0 };
pub const ENEMY_START_HP: f32 = 60.0;
/// Reference maximum used only for the health-bar fraction
pub const ENEMY_HP_REFERENCE: f32 = 60.0;

/// An enemy with a flat hp pool, unrelated to the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub body: Body,
    /// May go negative between a hit and the next cleanup pass
    pub hp: f32,
}

impl Enemy {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            id: EntityId::new(),
            body: Body::new(position, ENEMY_SIZE).with_velocity(velocity),
            hp: ENEMY_START_HP,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0.0
    }

    pub fn health_fraction(&self) -> f32 {
        clamp(self.hp / ENEMY_HP_REFERENCE, 0.0, 1.0)
    }
}
