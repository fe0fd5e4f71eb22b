//! The player-controlled entity

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Seconds, Vec2};
use crate::entity::body::Body;
use crate::entity::input::MovementInput;

/// Player box size (world units)
pub const PLAYER_SIZE: Vec2 = Vec2 { x: 48.0, y: 64.0 };
/// Movement speed in world units per second
pub const PLAYER_SPEED: f32 = 180.0;

/// The single live player body.
///
/// Refers to its character by roster index; a fresh entity (new id, zero
/// cooldown) is built on every character switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntity {
    pub id: EntityId,
    pub character_index: usize,
    pub body: Body,
    /// Seconds until melee is available again, never negative
    pub attack_cooldown: Seconds,
}

impl PlayerEntity {
    pub fn new(character_index: usize, position: Vec2) -> Self {
        Self {
            id: EntityId::new(),
            character_index,
            body: Body::new(position, PLAYER_SIZE),
            attack_cooldown: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    /// Set velocity from held keys, move, and tick down the attack cooldown
    pub fn update(&mut self, input: &MovementInput, dt: Seconds) {
        self.body.velocity = input.direction() * PLAYER_SPEED;
        self.body.advance(dt);
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_at_speed() {
        let mut player = PlayerEntity::new(0, Vec2::new(400.0, 300.0));
        let input = MovementInput { right: true, ..Default::default() };
        player.update(&input, 0.5);
        assert_eq!(player.position(), Vec2::new(490.0, 300.0));
    }

    #[test]
    fn test_diagonal_speed_is_normalized() {
        let mut player = PlayerEntity::new(0, Vec2::ZERO);
        let input = MovementInput { down: true, right: true, ..Default::default() };
        player.update(&input, 1.0);
        let moved = player.position().length();
        assert!((moved - PLAYER_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_cooldown_floors_at_zero() {
        let mut player = PlayerEntity::new(0, Vec2::ZERO);
        player.attack_cooldown = 0.1;
        player.update(&MovementInput::none(), 0.05);
        assert!(!player.can_attack());
        player.update(&MovementInput::none(), 0.5);
        assert_eq!(player.attack_cooldown, 0.0);
        assert!(player.can_attack());
    }

    #[test]
    fn test_idle_update_stops_velocity() {
        let mut player = PlayerEntity::new(0, Vec2::new(10.0, 10.0));
        player.body.velocity = Vec2::new(99.0, 99.0);
        player.update(&MovementInput::none(), 0.05);
        assert_eq!(player.body.velocity, Vec2::ZERO);
        assert_eq!(player.position(), Vec2::new(10.0, 10.0));
    }
}
