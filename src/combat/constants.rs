//! Combat constants - all tunable values in one place

use crate::core::types::Vec2;

// Melee
pub const MELEE_COOLDOWN: f32 = 0.4;
pub const MELEE_DAMAGE: f32 = 30.0;
/// Corruption added to the attacker per swing, hit or miss
pub const MELEE_CORRUPTION_COST: f32 = 2.0;
/// Gap between the player's right edge and the hit-box
pub const MELEE_REACH_GAP: f32 = 6.0;
/// Vertical offset of the hit-box from the player's top edge
pub const MELEE_VERTICAL_OFFSET: f32 = 10.0;
pub const MELEE_HITBOX_SIZE: Vec2 = Vec2 { x: 22.0, y: 22.0 };

// Abilities (damage / heal / cleanse amounts, then caster corruption cost)
pub const TANK_DAMAGE: f32 = 18.0;
pub const TANK_CORRUPTION_COST: f32 = 6.0;

pub const OFFENSE_DAMAGE: f32 = 30.0;
pub const OFFENSE_CORRUPTION_COST: f32 = 8.0;

/// Half-width of the uniform impulse range on each axis
pub const CONTROL_IMPULSE: Vec2 = Vec2 { x: 80.0, y: 60.0 };
pub const CONTROL_CORRUPTION_COST: f32 = 7.0;

pub const AGILITY_HEAL: f32 = 40.0;
pub const AGILITY_CORRUPTION_COST: f32 = 5.0;

pub const SUPPORT_HEAL: f32 = 60.0;
pub const SUPPORT_CLEANSE: f32 = 8.0;
