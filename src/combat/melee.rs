//! Melee resolution
//!
//! The hit-box always projects to the player's right, whichever way the
//! player last moved.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    MELEE_COOLDOWN, MELEE_CORRUPTION_COST, MELEE_DAMAGE, MELEE_HITBOX_SIZE, MELEE_REACH_GAP,
    MELEE_VERTICAL_OFFSET,
};
use crate::core::types::{EntityId, Vec2};
use crate::entity::{Body, Enemy, PlayerEntity};
use crate::roster::Character;

/// One enemy struck by a swing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeleeHit {
    pub enemy: EntityId,
    pub remaining_hp: f32,
}

/// Result of a swing that went off (cooldown had elapsed)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeleeOutcome {
    pub hits: Vec<MeleeHit>,
}

/// Short-lived hit-box in front of the player
pub fn melee_hitbox(player: &PlayerEntity) -> Body {
    let origin = player.body.position;
    Body::new(
        Vec2::new(
            origin.x + player.body.size.x + MELEE_REACH_GAP,
            origin.y + MELEE_VERTICAL_OFFSET,
        ),
        MELEE_HITBOX_SIZE,
    )
}

/// Swing if the cooldown has elapsed.
///
/// Returns `None` while cooling down. Otherwise starts the cooldown, damages
/// every overlapping enemy, and charges the attacker's corruption.
pub fn resolve_melee(
    player: &mut PlayerEntity,
    attacker: &mut Character,
    enemies: &mut [Enemy],
) -> Option<MeleeOutcome> {
    if !player.can_attack() {
        return None;
    }
    player.attack_cooldown = MELEE_COOLDOWN;

    let hitbox = melee_hitbox(player);
    let hits = enemies
        .iter_mut()
        .filter(|enemy| hitbox.overlaps(&enemy.body))
        .map(|enemy| {
            enemy.hp -= MELEE_DAMAGE;
            MeleeHit {
                enemy: enemy.id,
                remaining_hp: enemy.hp,
            }
        })
        .collect();

    attacker.adjust_corruption(MELEE_CORRUPTION_COST);

    Some(MeleeOutcome { hits })
}
